use crate::common::{bar_ts, client_for, date, setup_server};
use chrono::TimeZone;
use chrono_tz::Asia::Taipei;
use httpmock::Method::GET;
use rust_decimal::Decimal;
use twstock::{DateRange, HistoryRequest, Summary};

#[tokio::test]
async fn history_skips_points_with_null_ohlc() {
    let server = setup_server();

    // first point valid, second has open=null so must be skipped, third lacks volume
    let body = format!(
        r#"{{
      "chart":{{"result":[{{"timestamp":[{},{},{}],
        "indicators":{{"quote":[{{
          "open":[1000.0,null,1010.0],
          "high":[1015.0,1020.0,1030.0],
          "low":[995.0,1000.0,1005.0],
          "close":[1010.0,1015.0,1025.0],
          "volume":[30000000,31000000,null]
        }}]}}}}],"error":null}}
    }}"#,
        bar_ts(date("2026-01-12")),
        bar_ts(date("2026-01-13")),
        bar_ts(date("2026-01-14")),
    );

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/2330.TW");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = client_for(&server);
    let table = HistoryRequest::new(&client, "2330")
        .between(DateRange::new(date("2026-01-12"), date("2026-01-14")))
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(table.len(), 2, "row with null open should be filtered out");
    let rows = table.rows();
    assert_eq!(rows[0].date, date("2026-01-12"));
    assert_eq!(rows[0].open, Decimal::from(1000));
    assert_eq!(rows[0].volume, 30_000_000);
    assert_eq!(rows[1].date, date("2026-01-14"));
    assert_eq!(rows[1].volume, 0, "missing volume becomes zero");
}

#[tokio::test]
async fn history_with_no_trading_days_is_empty_not_error() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/2330.TW");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"chart":{"result":[{"meta":{"symbol":"2330.TW"},"indicators":{"quote":[{}],"adjclose":[{}]}}],"error":null}}"#);
    });

    let client = client_for(&server);
    let table = HistoryRequest::new(&client, "2330")
        .between(DateRange::new(date("2026-02-14"), date("2026-02-22")))
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert!(table.is_empty());
}

#[tokio::test]
async fn history_merges_live_point_into_same_trading_day() {
    let server = setup_server();

    // Yahoo appends the in-session bar (13:25 Taipei) after the 09:00 daily bar
    let live = Taipei
        .from_local_datetime(&date("2026-02-25").and_hms_opt(13, 25, 0).unwrap())
        .single()
        .unwrap()
        .timestamp();
    let body = format!(
        r#"{{
      "chart":{{"result":[{{"timestamp":[{},{},{}],
        "indicators":{{"quote":[{{
          "open":[100.0,105.0,106.0],
          "high":[110.0,112.0,115.0],
          "low":[95.0,104.0,103.0],
          "close":[105.0,110.0,108.0],
          "volume":[20,20,15]
        }}]}}}}],"error":null}}
    }}"#,
        bar_ts(date("2026-02-24")),
        bar_ts(date("2026-02-25")),
        live,
    );

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/2330.TW");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = client_for(&server);
    let table = HistoryRequest::new(&client, "2330")
        .between(DateRange::new(date("2026-02-24"), date("2026-02-25")))
        .fetch()
        .await
        .unwrap();
    mock.assert();

    let dates: Vec<_> = table.rows().iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date("2026-02-24"), date("2026-02-25")]);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));

    let merged = &table.rows()[1];
    assert_eq!(merged.open, Decimal::from(105));
    assert_eq!(merged.high, Decimal::from(115));
    assert_eq!(merged.low, Decimal::from(103));
    assert_eq!(merged.close, Decimal::from(108));
    assert_eq!(merged.volume, 15);

    let summary = Summary::from_table(&table).unwrap();
    assert_eq!(summary.total_volume, 35);
}
