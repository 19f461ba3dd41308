use crate::common::{MemorySource, date, five_days, rows_of};
use std::sync::atomic::Ordering;
use twstock::pipeline::{fetch_history, fetch_snapshot, run};
use twstock::{
    DateRange, HistoryOutcome, PriceTable, RealtimeSnapshot, RunConfig, SnapshotOutcome, TwError,
};

fn table() -> Result<PriceTable, TwError> {
    Ok(rows_of(&five_days()))
}

fn empty() -> Result<PriceTable, TwError> {
    Ok(PriceTable::default())
}

fn broken() -> Result<PriceTable, TwError> {
    Err(TwError::Status {
        status: 503,
        url: "https://example.invalid/chart".into(),
    })
}

fn no_snapshot() -> Result<Option<RealtimeSnapshot>, TwError> {
    Ok(None)
}

fn bad_snapshot() -> Result<Option<RealtimeSnapshot>, TwError> {
    Err(TwError::Data("json parse error: expected value".into()))
}

fn now() -> chrono::NaiveDateTime {
    date("2026-02-25").and_hms_opt(9, 0, 0).unwrap()
}

fn cfg_in(dir: &tempfile::TempDir) -> RunConfig {
    let mut cfg = RunConfig::new("2330");
    cfg.start = Some("2026-01-10".into());
    cfg.end = Some("2026-02-25".into());
    cfg.output_dir = dir.path().to_path_buf();
    cfg
}

#[tokio::test]
async fn empty_result_is_no_data() {
    let source = MemorySource::new(empty, no_snapshot);
    let range = DateRange::new(date("2026-02-14"), date("2026-02-22"));
    assert!(matches!(
        fetch_history(&source, "2330", range).await,
        HistoryOutcome::NoData
    ));
}

#[tokio::test]
async fn provider_failure_keeps_its_cause() {
    let source = MemorySource::new(broken, bad_snapshot);
    let range = DateRange::new(date("2026-01-10"), date("2026-02-25"));

    match fetch_history(&source, "2330", range).await {
        HistoryOutcome::Failed(TwError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected Failed(Status), got {other:?}"),
    }
    assert!(matches!(
        fetch_snapshot(&source, "2330").await,
        SnapshotOutcome::Failed(TwError::Data(_))
    ));
}

#[tokio::test]
async fn inverted_range_fails_without_crashing() {
    let dir = tempfile::tempdir().unwrap();
    let source = MemorySource::new(table, no_snapshot);
    let mut cfg = cfg_in(&dir);
    cfg.start = Some("2026-02-25".into());
    cfg.end = Some("2026-01-10".into());

    let report = run(&source, &cfg, now()).await.unwrap();
    assert!(matches!(
        report.history,
        HistoryOutcome::Failed(TwError::InvalidDates { .. })
    ));
    assert!(report.csv_path.is_none());
    assert!(!dir.path().join("stock_2330.csv").exists());
}

#[tokio::test]
async fn failed_fetch_skips_csv_but_still_reports_snapshot_stage() {
    let dir = tempfile::tempdir().unwrap();
    let source = MemorySource::new(broken, no_snapshot);
    let mut cfg = cfg_in(&dir);
    cfg.realtime = true;

    let report = run(&source, &cfg, now()).await.unwrap();
    assert!(report.csv_path.is_none());
    assert!(!dir.path().join("stock_2330.csv").exists());
    assert!(report.text.contains("Fetch failed for 2330"));
    assert!(report.text.contains("Realtime quote unavailable"));
    assert!(matches!(report.snapshot, Some(SnapshotOutcome::Unavailable)));
    assert_eq!(source.history_calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.snapshot_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn default_range_is_anchored_on_injected_clock() {
    let dir = tempfile::tempdir().unwrap();
    let source = MemorySource::new(table, no_snapshot);
    let mut cfg = RunConfig::new("2330");
    cfg.output_dir = dir.path().to_path_buf();
    cfg.lookback_days = 60;

    let report = run(&source, &cfg, now()).await.unwrap();
    assert!(report.text.contains("Date range: 2025-12-27 to 2026-02-25"), "{}", report.text);
    assert_eq!(source.snapshot_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_date_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let source = MemorySource::new(table, no_snapshot);
    let mut cfg = cfg_in(&dir);
    cfg.end = Some("25/02/2026".into());

    let err = run(&source, &cfg, now()).await.unwrap_err();
    assert!(matches!(err, TwError::DateParse { .. }));
    assert_eq!(source.history_calls.load(Ordering::SeqCst), 0);
}
