//! Chain event plumbing
//!
//! Feeds push `ChainEvent`s into an mpsc channel; a single listener task
//! drains it and applies removals, so every fill/cancel reaches the store
//! through the same `remove` path and in arrival order.

mod websocket;

pub use websocket::{FeedError, WebSocketEventFeed};

use crate::application::{OrderStore, ProcessChainEventUseCase};
use crate::domain::ChainEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Apply every event from `events` to the store until all senders are dropped
pub fn spawn_listener<S>(
    use_case: ProcessChainEventUseCase<S>,
    mut events: mpsc::Receiver<ChainEvent>,
) -> JoinHandle<()>
where
    S: OrderStore + 'static,
{
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            use_case.execute(event);
        }
        tracing::info!("Chain event channel closed, listener exiting");
    })
}
