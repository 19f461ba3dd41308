use chrono::{DateTime, NaiveDate};
use chrono_tz::Asia::Taipei;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::core::{PriceRow, PriceTable, TwError};
use crate::history::wire::{ChartEnvelope, QuoteBlock};

/// Prices are scrubbed of binary float noise to this many decimal places.
pub(crate) const PRICE_DP: u32 = 4;

/// Decodes a chart payload into owned blocks.
pub(crate) fn decode_chart(
    body: &str,
) -> Result<(Vec<i64>, QuoteBlock, Vec<Option<f64>>), TwError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| TwError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| TwError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(TwError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let r0 = chart
        .result
        .ok_or_else(|| TwError::Data("missing result".into()))?
        .into_iter()
        .next()
        .ok_or_else(|| TwError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    if ts.is_empty() {
        // No trading days in range: Yahoo omits the quote arrays entirely.
        return Ok((ts, QuoteBlock::default(), Vec::new()));
    }

    let quote = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| TwError::Data("missing quote".into()))?;
    let adjclose = r0
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|a| a.adjclose)
        .unwrap_or_default();

    Ok((ts, quote, adjclose))
}

/// Maps a chart payload onto the fixed six-column schema.
///
/// Rows with any missing or non-finite OHLC value are dropped; a missing volume
/// becomes 0. Consecutive points on the same Taipei date collapse into one row.
/// With `auto_adjust`, each price is scaled by `adjclose / close`.
pub fn normalize_chart(body: &str, auto_adjust: bool) -> Result<PriceTable, TwError> {
    let (ts, quote, adjclose) = decode_chart(body)?;
    normalize(&ts, &quote, &adjclose, auto_adjust)
}

pub(crate) fn normalize(
    ts: &[i64],
    q: &QuoteBlock,
    adj: &[Option<f64>],
    auto_adjust: bool,
) -> Result<PriceTable, TwError> {
    let mut out: Vec<PriceRow> = Vec::with_capacity(ts.len());

    for (i, &t) in ts.iter().enumerate() {
        let getter_f64 = |v: &Vec<Option<f64>>| v.get(i).and_then(|x| *x);
        let (Some(open), Some(high), Some(low), Some(close)) = (
            getter_f64(&q.open),
            getter_f64(&q.high),
            getter_f64(&q.low),
            getter_f64(&q.close),
        ) else {
            tracing::debug!(ts = t, "dropping row with missing OHLC");
            continue;
        };

        let factor = if auto_adjust {
            price_factor(adj.get(i).and_then(|x| *x), close)
        } else {
            1.0
        };

        let prices = (
            to_price(open * factor),
            to_price(high * factor),
            to_price(low * factor),
            to_price(close * factor),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = prices else {
            tracing::debug!(ts = t, "dropping row with non-finite price");
            continue;
        };

        let row = PriceRow {
            date: trading_date(t)?,
            open,
            high,
            low,
            close,
            volume: q.volume.get(i).and_then(|x| *x).unwrap_or(0),
        };

        // Yahoo can append the live bar as a second point on the current day.
        match out.last_mut() {
            Some(prev) if prev.date == row.date => merge_same_day(prev, row),
            _ => out.push(row),
        }
    }

    Ok(PriceTable::new(out))
}

/// Folds a later point of the same trading day into `prev`.
fn merge_same_day(prev: &mut PriceRow, later: PriceRow) {
    tracing::debug!(date = %prev.date, "merging intraday point into daily bar");
    prev.high = prev.high.max(later.high);
    prev.low = prev.low.min(later.low);
    prev.close = later.close;
    prev.volume = later.volume;
}

fn price_factor(adjclose: Option<f64>, close: f64) -> f64 {
    match adjclose {
        Some(a) if close != 0.0 && a.is_finite() => a / close,
        _ => 1.0,
    }
}

fn to_price(v: f64) -> Option<Decimal> {
    Decimal::from_f64(v).map(|d| d.round_dp(PRICE_DP).normalize())
}

/// Converts a bar timestamp to its calendar date on the Taiwan exchange.
pub(crate) fn trading_date(ts: i64) -> Result<NaiveDate, TwError> {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&Taipei).date_naive())
        .ok_or_else(|| TwError::Data(format!("timestamp out of range: {ts}")))
}
