//! Daily OHLCV history via the Yahoo chart v8 endpoint.

mod fetch;
mod normalize;
mod wire;

pub use normalize::normalize_chart;

use crate::core::{DateRange, PriceTable, TwClient, TwError};
use normalize::{decode_chart, normalize};

/// The Taiwanese market a symbol is listed on, which decides its Yahoo suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Market {
    /// Taiwan Stock Exchange listings (`.TW`).
    #[default]
    Twse,
    /// Taipei Exchange over-the-counter listings (`.TWO`).
    Tpex,
}

impl Market {
    pub fn suffix(self) -> &'static str {
        match self {
            Market::Twse => ".TW",
            Market::Tpex => ".TWO",
        }
    }

    /// Appends the exchange suffix unless the symbol already carries one.
    pub fn qualify(self, symbol: &str) -> String {
        if symbol.contains('.') {
            symbol.to_string()
        } else {
            format!("{symbol}{}", self.suffix())
        }
    }
}

/// A builder for fetching daily price history for a single symbol.
#[derive(Clone)]
pub struct HistoryRequest {
    client: TwClient,
    symbol: String,
    market: Market,
    range: Option<DateRange>,
    auto_adjust: bool,
}

impl HistoryRequest {
    /// Creates a new request for a bare exchange code such as `"2330"`.
    pub fn new(client: &TwClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            market: Market::Twse,
            range: None,
            auto_adjust: true,
        }
    }

    /// Sets the listing market. (Default: `Market::Twse`)
    pub fn market(mut self, market: Market) -> Self {
        self.market = market;
        self
    }

    /// Sets the inclusive calendar range to fetch.
    pub fn between(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets whether prices are scaled by the provider's adjusted close. (Default: `true`)
    pub fn auto_adjust(mut self, yes: bool) -> Self {
        self.auto_adjust = yes;
        self
    }

    /// Executes the request.
    ///
    /// An empty table is returned when the provider has no trading days in range.
    /// An inverted range fails with [`TwError::InvalidDates`] before any request is sent.
    pub async fn fetch(self) -> Result<PriceTable, TwError> {
        let range = self
            .range
            .ok_or_else(|| TwError::Data("no date range set".into()))?;
        let qualified = self.market.qualify(&self.symbol);

        let body = fetch::fetch_chart(&self.client, &qualified, range).await?;
        let (ts, quote, adjclose) = decode_chart(&body)?;
        let table = normalize(&ts, &quote, &adjclose, self.auto_adjust)?;

        tracing::info!(
            symbol = %qualified,
            start = %range.start,
            end = %range.end,
            rows = table.len(),
            "daily history fetched"
        );
        Ok(table)
    }
}
