//! Core components of the `twstock` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`TwClient`] and its builder.
//! - The primary [`TwError`] type.
//! - Shared data models like [`PriceRow`] and [`PriceTable`].
//! - The [`PriceSource`] provider abstraction.

/// The main client (`TwClient`), builder, and configuration.
pub mod client;
/// The primary error type (`TwError`) for the crate.
pub mod error;
/// Shared data models used across modules (e.g., `PriceRow`, `DateRange`).
pub mod models;
/// Provider traits for abstracting history and realtime fetching.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::TwClient`
pub use client::{TwClient, TwClientBuilder};
pub use error::TwError;
pub use models::{DateRange, PriceRow, PriceTable, RealtimeSnapshot};
pub use services::{ClientSource, PriceSource, SourceFuture};
