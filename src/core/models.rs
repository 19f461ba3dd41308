use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/* ----- RANGE ----- */

/// An inclusive span of calendar days.
///
/// No ordering check is made on construction; a request over an inverted range
/// is rejected by the fetcher instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `true` when `start` falls after `end`.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/* ----- HISTORY ----- */

/// One trading day of OHLCV data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// Daily rows for a single symbol, in the order the provider delivered them
/// (ascending by date, one row per trading day).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriceTable {
    rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn new(rows: Vec<PriceRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The last `n` rows, or every row when the table is shorter.
    pub fn tail(&self, n: usize) -> &[PriceRow] {
        let skip = self.rows.len().saturating_sub(n);
        &self.rows[skip..]
    }

    /// The row with the greatest date, regardless of storage order.
    pub fn latest(&self) -> Option<&PriceRow> {
        self.rows.iter().max_by_key(|r| r.date)
    }
}

impl From<Vec<PriceRow>> for PriceTable {
    fn from(rows: Vec<PriceRow>) -> Self {
        Self::new(rows)
    }
}

/* ----- REALTIME ----- */

/// The most recent single data point reported by the realtime endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RealtimeSnapshot {
    /// Symbol as reported by the provider (first field).
    pub symbol: String,
    /// Provider-reported timestamp, verbatim (second field).
    pub as_of: String,
    /// Column names from the payload's `fields` row, when present.
    pub field_names: Vec<String>,
    /// Every field of the row in provider order, rendered as strings.
    pub raw_fields: Vec<String>,
}
