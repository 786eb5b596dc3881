use crate::application::ports::OrderStore;
use crate::domain::{AssetData, Clock, Orderbook};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GetOrderbookQuery {
    pub base_asset_data: AssetData,
    pub quote_asset_data: AssetData,
}

/// Order book for a base/quote pair as of the clock's current second
pub struct GetOrderbookUseCase<C, S>
where
    C: Clock,
    S: OrderStore,
{
    clock: Arc<C>,
    store: Arc<S>,
}

impl<C, S> GetOrderbookUseCase<C, S>
where
    C: Clock,
    S: OrderStore,
{
    pub fn new(clock: Arc<C>, store: Arc<S>) -> Self {
        Self { clock, store }
    }

    pub fn execute(&self, query: &GetOrderbookQuery) -> Orderbook {
        let as_of = self.clock.unix_seconds();
        let book = self
            .store
            .query_orderbook(&query.base_asset_data, &query.quote_asset_data, as_of);

        tracing::debug!(
            base = %query.base_asset_data,
            quote = %query.quote_asset_data,
            as_of,
            bids = book.bids.total,
            asks = book.asks.total,
            "Orderbook query"
        );
        book
    }
}
