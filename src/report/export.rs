use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::Locale;
use crate::core::{PriceRow, PriceTable, TwError};
use crate::range::parse_date;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The per-symbol output file name, e.g. `stock_2330.csv`.
pub fn csv_file_name(symbol: &str) -> String {
    format!("stock_{symbol}.csv")
}

/// Writes every row of `table` to `path`, replacing any existing file.
///
/// The file starts with a UTF-8 BOM so spreadsheet tools keep localized headers intact.
pub fn write_csv(path: &Path, table: &PriceTable, locale: Locale) -> Result<(), TwError> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(UTF8_BOM)?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(locale.headers())?;
    for r in table.rows() {
        wtr.write_record([
            r.date.to_string(),
            r.open.to_string(),
            r.high.to_string(),
            r.low.to_string(),
            r.close.to_string(),
            r.volume.to_string(),
        ])?;
    }
    wtr.flush()?;

    tracing::debug!(path = %path.display(), rows = table.len(), "csv written");
    Ok(())
}

/// Reads a file produced by [`write_csv`], in either header locale.
pub fn read_csv(path: &Path) -> Result<PriceTable, TwError> {
    let text = fs::read_to_string(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let field = |i: usize| {
            record
                .get(i)
                .ok_or_else(|| TwError::Data(format!("row {}: missing column {i}", line + 1)))
        };
        let price = |i: usize| -> Result<Decimal, TwError> {
            let raw = field(i)?;
            Decimal::from_str(raw)
                .map_err(|e| TwError::Data(format!("row {}: bad price '{raw}': {e}", line + 1)))
        };
        let volume = field(5)?;

        rows.push(PriceRow {
            date: parse_date(field(0)?)?,
            open: price(1)?,
            high: price(2)?,
            low: price(3)?,
            close: price(4)?,
            volume: volume.parse().map_err(|e| {
                TwError::Data(format!("row {}: bad volume '{volume}': {e}", line + 1))
            })?,
        });
    }
    Ok(PriceTable::new(rows))
}
