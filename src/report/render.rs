use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};

use super::{Locale, ReportStyle, Summary};
use crate::core::{PriceRow, PriceTable, RealtimeSnapshot};

const RULE_WIDTH: usize = 80;

/// Static notes printed after a combined run.
pub const FOOTER: &[&str] = &[
    "Trading days are Monday to Friday, excluding national holidays.",
    "If today's row is missing, today was not a trading day.",
    "The latest trading day is listed in the statistics above.",
];

/// Formats a price with exactly two decimals, rounding half away from zero.
pub fn fmt_price(d: Decimal) -> String {
    format!(
        "{:.2}",
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Formats an integer with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn cells(r: &PriceRow) -> [String; 6] {
    [
        r.date.to_string(),
        fmt_price(r.open),
        fmt_price(r.high),
        fmt_price(r.low),
        fmt_price(r.close),
        group_thousands(r.volume),
    ]
}

/// Renders the table between `=` rules, honoring `style`.
pub fn render_table(table: &PriceTable, style: ReportStyle, locale: Locale) -> String {
    let rows = match style {
        ReportStyle::Full => table.rows(),
        ReportStyle::Tail(n) => table.tail(n),
    };
    let body: Vec<[String; 6]> = rows.iter().map(cells).collect();
    let headers = locale.headers();

    let mut widths = headers.map(|h| h.chars().count());
    for line in &body {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    push_line(&mut out, headers.iter().copied(), &widths);
    for line in &body {
        push_line(&mut out, line.iter().map(String::as_str), &widths);
    }
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    if let ReportStyle::Tail(n) = style
        && table.len() > n
    {
        let _ = writeln!(out, "(showing last {} of {} rows)", rows.len(), table.len());
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            let pad = w.saturating_sub(cell.chars().count());
            // date column is left aligned, numbers are right aligned
            if i == 0 {
                format!("{cell}{}", " ".repeat(pad))
            } else {
                format!("{}{cell}", " ".repeat(pad))
            }
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

/// Renders the statistics block, including the `Latest trading day` line.
pub fn render_summary(s: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Statistics:");
    let _ = writeln!(out, "  Mean close:   {}", fmt_price(s.mean_close));
    let _ = writeln!(out, "  Max high:     {}", fmt_price(s.max_high));
    let _ = writeln!(out, "  Min low:      {}", fmt_price(s.min_low));
    let _ = writeln!(out, "  Total volume: {}", group_thousands(s.total_volume));
    let _ = writeln!(
        out,
        "Latest trading day: {} (close: {}, volume: {})",
        s.latest_row.date,
        fmt_price(s.latest_row.close),
        group_thousands(s.latest_row.volume)
    );
    out
}

pub fn render_snapshot(snap: &RealtimeSnapshot, now: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Realtime snapshot:");
    let _ = writeln!(out, "  Symbol:     {}", snap.symbol);
    let _ = writeln!(out, "  Local time: {now}");
    let _ = writeln!(out, "  Data time:  {}", snap.as_of);
    for (i, value) in snap.raw_fields.iter().enumerate().skip(2) {
        match snap.field_names.get(i) {
            Some(name) => {
                let _ = writeln!(out, "  {name}: {value}");
            }
            None => {
                let _ = writeln!(out, "  [{i}]: {value}");
            }
        }
    }
    out
}
