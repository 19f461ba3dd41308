//! Summary statistics, console rendering and CSV persistence for a [`PriceTable`].

mod export;
mod render;

pub use export::{csv_file_name, read_csv, write_csv};
pub use render::{
    FOOTER, fmt_price, group_thousands, render_snapshot, render_summary, render_table,
};

use rust_decimal::Decimal;

use crate::core::{PriceRow, PriceTable, TwError};

/// Language of the column headers in the console table and the CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    /// Traditional Chinese, as used by the exchange.
    ZhTw,
}

impl Locale {
    /// Headers in the fixed column order: date, open, high, low, close, volume.
    pub fn headers(self) -> [&'static str; 6] {
        match self {
            Locale::En => ["date", "open", "high", "low", "close", "volume"],
            Locale::ZhTw => ["日期", "開盤價", "最高價", "最低價", "收盤價", "成交量"],
        }
    }
}

/// How many rows of the table the console report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    Full,
    /// Only the last `n` rows; statistics still cover every row.
    Tail(usize),
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle::Tail(10)
    }
}

/// Aggregate statistics over a whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Unrounded arithmetic mean of `close`.
    pub mean_close: Decimal,
    pub max_high: Decimal,
    pub min_low: Decimal,
    pub total_volume: u64,
    /// The row with the greatest date.
    pub latest_row: PriceRow,
}

impl Summary {
    /// Computes statistics over every row of `table`.
    ///
    /// Fails with [`TwError::EmptyTable`] rather than dividing by zero, and with
    /// [`TwError::Data`] when the closing prices cannot be summed.
    pub fn from_table(table: &PriceTable) -> Result<Self, TwError> {
        let rows = table.rows();
        let latest_row = table.latest().ok_or(TwError::EmptyTable)?.clone();

        let close_sum = rows
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.close))
            .ok_or_else(|| TwError::Data("sum of closing prices overflows".into()))?;
        let mean_close = close_sum
            .checked_div(Decimal::from(rows.len()))
            .ok_or_else(|| TwError::Data("mean close is not representable".into()))?;

        let max_high = rows.iter().map(|r| r.high).max().ok_or(TwError::EmptyTable)?;
        let min_low = rows.iter().map(|r| r.low).min().ok_or(TwError::EmptyTable)?;
        let total_volume = rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.volume));

        Ok(Self {
            mean_close,
            max_high,
            min_low,
            total_volume,
            latest_row,
        })
    }
}
