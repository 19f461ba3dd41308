//! twstock: daily prices for a Taiwan-listed equity.
//!
//! Fetches OHLCV history from the Yahoo chart endpoint, normalizes it into a
//! fixed six-column [`PriceTable`], summarizes and renders it, and writes it to
//! CSV. A TWSE realtime snapshot can be fetched alongside.
//!
//! ```no_run
//! # use twstock::{HistoryRequest, Summary, TwClient};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TwClient::builder().build()?;
//! let range = twstock::resolve_range(Some("2026-01-10"), None, chrono::Utc::now().date_naive(), 30)?;
//! let table = HistoryRequest::new(&client, "2330").between(range).fetch().await?;
//! let summary = Summary::from_table(&table)?;
//! println!("mean close {}", twstock::report::fmt_price(summary.mean_close));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod pipeline;
pub mod range;
pub mod realtime;
pub mod report;

pub use core::{
    ClientSource, DateRange, PriceRow, PriceSource, PriceTable, RealtimeSnapshot, TwClient,
    TwClientBuilder, TwError,
};
pub use history::{HistoryRequest, Market};
pub use pipeline::{HistoryOutcome, RunConfig, RunReport, SnapshotOutcome};
pub use range::resolve_range;
pub use realtime::RealtimeRequest;
pub use report::{Locale, ReportStyle, Summary};
