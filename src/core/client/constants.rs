//! Centralized constants for default endpoints, UA, and timeouts.

use std::time::Duration;

/// Default desktop UA; the TWSE endpoint rejects library default identities.
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo chart API base (exchange-qualified symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// TWSE daily average endpoint used for the realtime snapshot.
pub(crate) const DEFAULT_BASE_REALTIME: &str =
    "https://www.twse.com.tw/exchangeReport/STOCK_DAY_AVG_ALL";

/// Overall timeout for the historical chart request.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-request timeout for the realtime snapshot.
pub(crate) const DEFAULT_REALTIME_TIMEOUT: Duration = Duration::from_secs(10);
