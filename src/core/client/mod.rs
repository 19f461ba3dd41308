//! Public client surface + builder.
//! Defaults (UA, endpoints, timeouts) live in `constants`.

mod constants;

use crate::core::TwError;
use constants::{
    DEFAULT_BASE_CHART, DEFAULT_BASE_REALTIME, DEFAULT_REALTIME_TIMEOUT, DEFAULT_TIMEOUT,
    USER_AGENT,
};
use reqwest::Client;
pub use constants::USER_AGENT as DEFAULT_USER_AGENT;
use std::time::Duration;
use url::Url;

/// HTTP client shared by the history and realtime requests.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct TwClient {
    http: Client,
    base_chart: Url,
    base_realtime: Url,
    user_agent: String,
    realtime_timeout: Duration,
}

impl TwClient {
    /// Create a new builder.
    pub fn builder() -> TwClientBuilder {
        TwClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_realtime(&self) -> &Url {
        &self.base_realtime
    }
    pub(crate) fn user_agent(&self) -> &str {
        &self.user_agent
    }
    pub(crate) fn realtime_timeout(&self) -> Duration {
        self.realtime_timeout
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct TwClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_realtime: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    realtime_timeout: Option<Duration>,
}

impl TwClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the realtime endpoint (e.g., `https://www.twse.com.tw/exchangeReport/STOCK_DAY_AVG_ALL`).
    pub fn base_realtime(mut self, url: Url) -> Self {
        self.base_realtime = Some(url);
        self
    }

    /// Set the overall request timeout. Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the timeout applied to the realtime request only. Default: 10 seconds.
    pub fn realtime_timeout(mut self, dur: Duration) -> Self {
        self.realtime_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<TwClient, TwError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_realtime = match self.base_realtime {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_REALTIME)?,
        };
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        let mut httpb = reqwest::Client::builder()
            .user_agent(user_agent.as_str())
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(TwClient {
            http,
            base_chart,
            base_realtime,
            user_agent,
            realtime_timeout: self.realtime_timeout.unwrap_or(DEFAULT_REALTIME_TIMEOUT),
        })
    }
}
