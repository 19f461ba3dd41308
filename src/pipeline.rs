//! End-to-end run: resolve range, fetch, summarize, render, persist.
//!
//! Fetch failures never escape this module as errors. They are logged and
//! surfaced as tagged outcomes so callers can tell "no trading days" apart
//! from a transport or decoding failure.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::core::{DateRange, PriceSource, PriceTable, RealtimeSnapshot, TwError};
use crate::range::{DEFAULT_LOOKBACK_DAYS, resolve_range};
use crate::report::{
    FOOTER, Locale, ReportStyle, Summary, csv_file_name, render_snapshot, render_summary,
    render_table, write_csv,
};

/// Result of the historical fetch.
#[derive(Debug)]
pub enum HistoryOutcome {
    Table(PriceTable),
    /// The provider answered but had no rows in range.
    NoData,
    Failed(TwError),
}

/// Result of the realtime fetch.
#[derive(Debug)]
pub enum SnapshotOutcome {
    Snapshot(RealtimeSnapshot),
    /// The provider answered without any data rows.
    Unavailable,
    Failed(TwError),
}

/// Fetches history and classifies the outcome.
pub async fn fetch_history<S: PriceSource + ?Sized>(
    source: &S,
    symbol: &str,
    range: DateRange,
) -> HistoryOutcome {
    match source.daily_history(symbol, range).await {
        Ok(table) if table.is_empty() => {
            tracing::warn!(%symbol, start = %range.start, end = %range.end, "no data in range");
            HistoryOutcome::NoData
        }
        Ok(table) => HistoryOutcome::Table(table),
        Err(e) => {
            tracing::warn!(%symbol, error = %e, "history fetch failed");
            HistoryOutcome::Failed(e)
        }
    }
}

/// Fetches the realtime snapshot and classifies the outcome.
pub async fn fetch_snapshot<S: PriceSource + ?Sized>(source: &S, symbol: &str) -> SnapshotOutcome {
    match source.realtime_snapshot(symbol).await {
        Ok(Some(snap)) => SnapshotOutcome::Snapshot(snap),
        Ok(None) => {
            tracing::warn!(%symbol, "realtime data unavailable");
            SnapshotOutcome::Unavailable
        }
        Err(e) => {
            tracing::warn!(%symbol, error = %e, "realtime fetch failed");
            SnapshotOutcome::Failed(e)
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub symbol: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub lookback_days: u32,
    pub style: ReportStyle,
    pub locale: Locale,
    pub output_dir: PathBuf,
    pub realtime: bool,
}

impl RunConfig {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            start: None,
            end: None,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            style: ReportStyle::default(),
            locale: Locale::default(),
            output_dir: PathBuf::from("."),
            realtime: false,
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct RunReport {
    /// The console report.
    pub text: String,
    /// Where the table was written; `None` when no table was fetched.
    pub csv_path: Option<PathBuf>,
    pub history: HistoryOutcome,
    /// `None` when the realtime stage was not requested.
    pub snapshot: Option<SnapshotOutcome>,
}

/// Runs the whole pipeline against `source`.
///
/// `now` is the injected wall clock: its date anchors the default range and
/// the full timestamp is printed next to a realtime snapshot. Only an
/// unparsable date or a failed CSV write is returned as an error.
pub async fn run<S: PriceSource + ?Sized>(
    source: &S,
    cfg: &RunConfig,
    now: chrono::NaiveDateTime,
) -> Result<RunReport, TwError> {
    let today: NaiveDate = now.date();
    let range = resolve_range(
        cfg.start.as_deref(),
        cfg.end.as_deref(),
        today,
        cfg.lookback_days,
    )?;

    let mut text = String::new();
    let _ = writeln!(text, "Symbol: {}", cfg.symbol);
    let _ = writeln!(text, "Date range: {} to {}", range.start, range.end);
    let _ = writeln!(text, "{}", "-".repeat(60));

    let history = fetch_history(source, &cfg.symbol, range).await;
    let mut csv_path = None;
    match &history {
        HistoryOutcome::Table(table) => {
            let summary = Summary::from_table(table)?;
            let _ = writeln!(text, "Fetched {} rows", table.len());
            text.push_str(&render_table(table, cfg.style, cfg.locale));
            text.push('\n');
            text.push_str(&render_summary(&summary));

            let path = cfg.output_dir.join(csv_file_name(&cfg.symbol));
            write_csv(&path, table, cfg.locale)?;
            let _ = writeln!(text, "\nSaved {} rows to {}", table.len(), path.display());
            csv_path = Some(path);
        }
        HistoryOutcome::NoData => {
            let _ = writeln!(text, "No data for {} in range", cfg.symbol);
        }
        HistoryOutcome::Failed(e) => {
            let _ = writeln!(text, "Fetch failed for {}: {e}", cfg.symbol);
        }
    }

    let snapshot = if cfg.realtime {
        let outcome = fetch_snapshot(source, &cfg.symbol).await;
        text.push('\n');
        match &outcome {
            SnapshotOutcome::Snapshot(snap) => {
                let stamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
                text.push_str(&render_snapshot(snap, &stamp));
            }
            SnapshotOutcome::Unavailable => {
                let _ = writeln!(text, "Realtime quote unavailable");
            }
            SnapshotOutcome::Failed(e) => {
                let _ = writeln!(text, "Realtime quote failed: {e}");
            }
        }

        let _ = writeln!(text, "\n{}", "=".repeat(80));
        let _ = writeln!(text, "Notes:");
        for line in FOOTER {
            let _ = writeln!(text, "- {line}");
        }
        let _ = writeln!(text, "{}", "=".repeat(80));
        Some(outcome)
    } else {
        None
    };

    Ok(RunReport {
        text,
        csv_path,
        history,
        snapshot,
    })
}
