pub mod events;
pub mod order_book;
pub mod services;

#[cfg(test)]
pub(crate) mod test_fixtures;

use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

pub use events::{ChainEvent, ChainEventKind};
pub use order_book::{
    AssetPair, DEFAULT_PAGE, DEFAULT_PER_PAGE, OrderMetadata, Orderbook, Page, StoredOrder,
};
pub use services::Clock;

// Re-export the shared order types so callers need a single import path
pub use relay_core::{
    Address, Amount, AssetData, ChainId, OrderHash, OrderInfo, OrderRelevantState, OrderStatus,
    SignedOrder, UnixSeconds,
};
