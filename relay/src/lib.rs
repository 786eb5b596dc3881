//! SRA Relay
//!
//! An order relay speaking the 0x Standard Relayer API (v3). Makers post
//! signed orders, takers read order books per asset pair, and orders leave
//! the book when a fill or cancel is observed on chain.
//!
//! # Architecture
//!
//! - **Domain**: Stored orders, asset pairs, order-book pages, chain events
//! - **Application**: Ports (`OrderStore`, `OrderValidator`) and use cases
//!   (submit order, get order book, process chain event)
//! - **Infrastructure**: In-memory store, clocks, validators, the WebSocket
//!   event feed and configuration
//! - **Presentation**: SRA v3 REST API
//!
//! Orders are held in memory only; nothing survives a restart.
//!
//! # Example
//!
//! ```ignore
//! use sra_relay::{Relay, RelayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let relay = Relay::new(RelayConfig::default())?;
//!     relay.run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::{
    AssetData, AssetPair, ChainEvent, ChainEventKind, Clock, OrderHash, OrderMetadata, OrderStatus,
    Orderbook, Page, SignedOrder, StoredOrder, Timestamp,
};

pub use infrastructure::{
    EventFeedConfig, InMemoryOrderStore, ManualClock, RelayConfig, RemoteOrderValidator,
    SystemClock, TrustingOrderValidator, WebSocketEventFeed,
};

pub use application::{
    OrderStore, OrderValidator, ProcessChainEventUseCase, StoreError, SubmitOrderError,
    ValidatorError,
};

pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The relay server
pub struct Relay<C: Clock + 'static> {
    pub config: RelayConfig,
    pub clock: Arc<C>,
    pub store: Arc<InMemoryOrderStore>,
    pub validator: Arc<dyn OrderValidator>,
}

impl<C: Clock + 'static> Relay<C> {
    /// Create a relay with the given clock; the validator is chosen from config
    pub fn with_clock(config: RelayConfig, clock: Arc<C>) -> Result<Self, ValidatorError> {
        let validator: Arc<dyn OrderValidator> = match &config.validator.url {
            Some(url) => {
                let remote = RemoteOrderValidator::new(url.as_str(), config.validator.timeout())?;
                tracing::info!("Validating orders with {}", remote.url());
                Arc::new(remote)
            }
            None => {
                tracing::warn!(
                    "No validator configured; accepting orders without on-chain checks"
                );
                Arc::new(TrustingOrderValidator::new(Arc::clone(&clock)))
            }
        };

        Ok(Self::with_validator(config, clock, validator))
    }

    /// Create a relay around an explicit validator
    pub fn with_validator(
        config: RelayConfig,
        clock: Arc<C>,
        validator: Arc<dyn OrderValidator>,
    ) -> Self {
        Relay {
            config,
            clock,
            store: Arc::new(InMemoryOrderStore::new()),
            validator,
        }
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.clock),
            Arc::clone(&self.store),
            Arc::clone(&self.validator),
            self.config.network.chain_id,
            self.config.order_config.clone(),
        ));

        create_router(state)
    }

    /// Subscribe to a fill/cancel feed and apply its events to the store.
    ///
    /// Returns the feed and listener tasks.
    pub fn spawn_event_feed(&self, feed: &EventFeedConfig) -> (JoinHandle<()>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(feed.channel_capacity);
        let listener = infrastructure::spawn_listener(
            ProcessChainEventUseCase::new(Arc::clone(&self.store)),
            rx,
        );
        let feed = WebSocketEventFeed::new(feed.url.as_str(), feed.reconnect_delay()).spawn(tx);
        (feed, listener)
    }

    /// Run the relay server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_address();

        match &self.config.event_feed {
            Some(feed) => {
                self.spawn_event_feed(feed);
            }
            None => tracing::warn!(
                "No chain event feed configured; filled or cancelled orders stay in the book"
            ),
        }

        let network = &self.config.network;
        tracing::info!(
            "SRA relay for {} (network {}, chain {}, rpc {}) listening on {}",
            network.name,
            network.network_id,
            network.chain_id,
            network.rpc_url,
            addr
        );

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, self.rest_router()).await?;

        Ok(())
    }
}

impl Relay<SystemClock> {
    /// Create a relay on the wall clock
    pub fn new(config: RelayConfig) -> Result<Self, ValidatorError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }
}
