pub mod clock;
pub mod config;
pub mod event_feed;
pub mod repositories;
pub mod validators;

pub use clock::{ManualClock, SystemClock};
pub use config::{
    ConfigError, EventFeedConfig, NetworkConfig, OrderConfigDefaults, RelayConfig, ServerConfig,
    ValidatorConfig,
};
pub use event_feed::{FeedError, WebSocketEventFeed, spawn_listener};
pub use repositories::InMemoryOrderStore;
pub use validators::{RemoteOrderValidator, TrustingOrderValidator};
