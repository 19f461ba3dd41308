//! Default date-window resolution.

use chrono::{Days, NaiveDate};

use crate::core::{DateRange, TwError};

/// Lookback used by the history-only report when no start date is given.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// Lookback used by the combined history + realtime run.
pub const COMBINED_LOOKBACK_DAYS: u32 = 60;

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, TwError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| TwError::DateParse {
        input: input.to_string(),
        source,
    })
}

/// Builds a [`DateRange`] from optional ISO date strings.
///
/// A missing start defaults to `today - lookback_days`; a missing end defaults to
/// `today`. The result is not checked for emptiness or ordering.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
    lookback_days: u32,
) -> Result<DateRange, TwError> {
    let start = match start {
        Some(s) => parse_date(s)?,
        None => today
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN),
    };
    let end = match end {
        Some(s) => parse_date(s)?,
        None => today,
    };
    Ok(DateRange::new(start, end))
}
