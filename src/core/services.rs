use crate::core::{DateRange, PriceTable, RealtimeSnapshot, TwClient, TwError};
use crate::history::{HistoryRequest, Market};
use crate::realtime::RealtimeRequest;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`PriceSource`] methods.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TwError>> + Send + 'a>>;

/// A provider of daily history and realtime snapshots.
///
/// The pipeline only talks to this trait, so tests can substitute an in-memory
/// implementation for the network. [`ClientSource`] is the network-backed one.
pub trait PriceSource: Send + Sync {
    /// Fetches daily rows for `symbol` over `range` (both ends inclusive).
    ///
    /// An empty table means the provider had no trading days in range.
    fn daily_history<'a>(
        &'a self,
        symbol: &'a str,
        range: DateRange,
    ) -> SourceFuture<'a, PriceTable>;

    /// Fetches the most recent data point for `symbol`, or `None` when the
    /// provider returned no rows.
    fn realtime_snapshot<'a>(
        &'a self,
        symbol: &'a str,
    ) -> SourceFuture<'a, Option<RealtimeSnapshot>>;
}

/// A [`TwClient`] bound to market and adjustment settings.
#[derive(Debug, Clone)]
pub struct ClientSource {
    client: TwClient,
    market: Market,
    auto_adjust: bool,
}

impl ClientSource {
    pub fn new(client: TwClient) -> Self {
        Self {
            client,
            market: Market::Twse,
            auto_adjust: true,
        }
    }

    /// Selects the exchange suffix used for history requests. (Default: `Twse`)
    pub fn market(mut self, market: Market) -> Self {
        self.market = market;
        self
    }

    /// Sets whether history prices are adjusted by the provider's adjusted close. (Default: `true`)
    pub fn auto_adjust(mut self, yes: bool) -> Self {
        self.auto_adjust = yes;
        self
    }
}

impl PriceSource for ClientSource {
    fn daily_history<'a>(
        &'a self,
        symbol: &'a str,
        range: DateRange,
    ) -> SourceFuture<'a, PriceTable> {
        Box::pin(async move {
            HistoryRequest::new(&self.client, symbol)
                .market(self.market)
                .between(range)
                .auto_adjust(self.auto_adjust)
                .fetch()
                .await
        })
    }

    fn realtime_snapshot<'a>(
        &'a self,
        symbol: &'a str,
    ) -> SourceFuture<'a, Option<RealtimeSnapshot>> {
        Box::pin(async move { RealtimeRequest::new(&self.client, symbol).fetch().await })
    }
}
