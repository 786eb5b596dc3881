use crate::application::ports::{OrderStore, StoreError};
use crate::domain::{AssetData, AssetPair, OrderHash, Orderbook, StoredOrder, UnixSeconds};
use indexmap::IndexSet;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory order store
///
/// Orders are keyed by hash, with a secondary index from (maker asset,
/// taker asset) to the hashes on that pair in insertion order. Removal and
/// pair lookup never scan the whole book.
///
/// Thread-safe: one `RwLock` guards both maps, so a duplicate check and the
/// insert that follows it are a single critical section.
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<BookState>>,
}

#[derive(Debug, Default)]
struct BookState {
    orders: HashMap<OrderHash, StoredOrder>,
    by_pair: HashMap<AssetPair, IndexSet<OrderHash>>,
}

impl BookState {
    fn live_orders(&self, pair: &AssetPair, as_of: UnixSeconds) -> Vec<StoredOrder> {
        let Some(hashes) = self.by_pair.get(pair) else {
            return Vec::new();
        };

        hashes
            .iter()
            .filter_map(|hash| self.orders.get(hash))
            .filter(|order| order.is_live_at(as_of))
            .cloned()
            .collect()
    }
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        InMemoryOrderStore {
            inner: Arc::new(RwLock::new(BookState::default())),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryOrderStore {
    fn clone(&self) -> Self {
        InMemoryOrderStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&self, order: StoredOrder) -> Result<(), StoreError> {
        let mut guard = self.inner.write();
        let state = &mut *guard;

        let hash = order.hash();
        if state.orders.contains_key(&hash) {
            return Err(StoreError::DuplicateOrder(hash));
        }

        state
            .by_pair
            .entry(order.asset_pair())
            .or_default()
            .insert(hash);
        state.orders.insert(hash, order);
        Ok(())
    }

    fn remove(&self, order_hash: &OrderHash) -> Option<StoredOrder> {
        let mut guard = self.inner.write();
        let state = &mut *guard;

        let order = state.orders.remove(order_hash)?;
        let pair = order.asset_pair();
        if let Some(hashes) = state.by_pair.get_mut(&pair) {
            // shift_remove keeps the remaining hashes in insertion order
            hashes.shift_remove(order_hash);
            if hashes.is_empty() {
                state.by_pair.remove(&pair);
            }
        }
        Some(order)
    }

    fn get(&self, order_hash: &OrderHash) -> Option<StoredOrder> {
        self.inner.read().orders.get(order_hash).cloned()
    }

    fn query_orderbook(
        &self,
        base: &AssetData,
        quote: &AssetData,
        as_of: UnixSeconds,
    ) -> Orderbook {
        let state = self.inner.read();
        let bids = state.live_orders(&AssetPair::bids(base, quote), as_of);
        let asks = state.live_orders(&AssetPair::asks(base, quote), as_of);
        Orderbook::new(bids, asks)
    }

    fn len(&self) -> usize {
        self.inner.read().orders.len()
    }
}
