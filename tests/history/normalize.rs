use crate::common::{chart_body, date};
use rust_decimal::Decimal;
use twstock::history::normalize_chart;

const THREE_DAYS: [crate::common::Bar; 3] = [
    ("2026-01-12", 100.0, 101.0, 99.0, 100.0, 1000),
    ("2026-01-13", 110.0, 115.0, 108.0, 110.0, 2000),
    ("2026-01-14", 105.0, 107.0, 104.0, 105.0, 1500),
];

#[test]
fn three_row_payload_normalizes_to_three_ascending_rows() {
    let table = normalize_chart(&chart_body(&THREE_DAYS), true).unwrap();

    assert_eq!(table.len(), 3);
    let dates: Vec<_> = table.rows().iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![date("2026-01-12"), date("2026-01-13"), date("2026-01-14")]
    );
    assert!(dates.windows(2).all(|w| w[0] < w[1]));

    let r = &table.rows()[1];
    assert_eq!(r.open, Decimal::from(110));
    assert_eq!(r.high, Decimal::from(115));
    assert_eq!(r.low, Decimal::from(108));
    assert_eq!(r.close, Decimal::from(110));
    assert_eq!(r.volume, 2000);
}

#[test]
fn normalized_rows_carry_exactly_six_fields() {
    let table = normalize_chart(&chart_body(&THREE_DAYS), true).unwrap();
    let value = serde_json::to_value(&table.rows()[0]).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let mut expected = vec!["date", "open", "high", "low", "close", "volume"];
    expected.sort_unstable();
    let mut got = keys.clone();
    got.sort_unstable();
    assert_eq!(got, expected, "dividends, adjclose and meta must not leak into rows");
}

#[test]
fn auto_adjust_scales_prices_by_adjclose_ratio() {
    let body = r#"{"chart":{"result":[{"timestamp":[1768179600],
        "indicators":{"quote":[{"open":[100.0],"high":[110.0],"low":[90.0],"close":[100.0],"volume":[5]}],
        "adjclose":[{"adjclose":[95.0]}]}}],"error":null}}"#;

    let adjusted = normalize_chart(body, true).unwrap();
    let r = &adjusted.rows()[0];
    assert_eq!(r.close, Decimal::from(95));
    assert_eq!(r.high, Decimal::new(1045, 1));
    assert_eq!(r.low, Decimal::new(855, 1));
    assert_eq!(r.volume, 5);

    let raw = normalize_chart(body, false).unwrap();
    assert_eq!(raw.rows()[0].close, Decimal::from(100));
}
