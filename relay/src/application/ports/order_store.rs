use crate::domain::{AssetData, OrderHash, Orderbook, StoredOrder, UnixSeconds};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("order {0} is already in the book")]
    DuplicateOrder(OrderHash),
}

/// Store of live orders
///
/// All operations are in-memory and synchronous; implementations must make
/// each call atomic with respect to the others.
pub trait OrderStore: Send + Sync {
    /// Add an accepted order. Rejects a hash that is already held and leaves
    /// the existing record untouched.
    fn insert(&self, order: StoredOrder) -> Result<(), StoreError>;

    /// Remove an order by hash. Removing an unknown hash is a no-op.
    fn remove(&self, order_hash: &OrderHash) -> Option<StoredOrder>;

    /// Get a held order by hash, whether or not it has expired
    fn get(&self, order_hash: &OrderHash) -> Option<StoredOrder>;

    /// Bids and asks for `base`/`quote` that are still live strictly after `as_of`
    fn query_orderbook(
        &self,
        base: &AssetData,
        quote: &AssetData,
        as_of: UnixSeconds,
    ) -> Orderbook;

    /// Number of held orders, expired ones included
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
