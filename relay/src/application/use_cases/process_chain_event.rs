use crate::application::ports::OrderStore;
use crate::domain::{ChainEvent, StoredOrder};
use std::sync::Arc;

/// Drop filled or cancelled orders from the book
pub struct ProcessChainEventUseCase<S: OrderStore> {
    store: Arc<S>,
}

impl<S: OrderStore> ProcessChainEventUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the removed order, or `None` when the hash was not in the book
    pub fn execute(&self, event: ChainEvent) -> Option<StoredOrder> {
        tracing::info!("Order {} {}", event.kind, event.order_hash);

        let removed = self.store.remove(&event.order_hash);
        if removed.is_none() {
            tracing::debug!(order_hash = %event.order_hash, "Order not held, nothing to remove");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{WETH, ZRX, hash, stored};
    use crate::infrastructure::InMemoryOrderStore;

    #[test]
    fn test_fill_and_cancel_remove_order() {
        let store = Arc::new(InMemoryOrderStore::new());
        store.insert(stored(1, ZRX, WETH, u64::MAX)).unwrap();
        store.insert(stored(2, ZRX, WETH, u64::MAX)).unwrap();

        let use_case = ProcessChainEventUseCase::new(Arc::clone(&store));

        assert!(use_case.execute(ChainEvent::fill(hash(1))).is_some());
        assert!(use_case.execute(ChainEvent::cancel(hash(2))).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_event_for_unknown_order_is_ignored() {
        let store = Arc::new(InMemoryOrderStore::new());
        let use_case = ProcessChainEventUseCase::new(Arc::clone(&store));

        assert!(use_case.execute(ChainEvent::fill(hash(3))).is_none());
        assert!(store.is_empty());
    }
}
