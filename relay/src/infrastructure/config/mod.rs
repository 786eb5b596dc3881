//! Configuration loading for the relay
//!
//! Supports a JSON configuration file for:
//! - Server bind address
//! - Network (chain id, RPC endpoint), with presets for known networks
//! - Order config defaults returned by `/v3/order_config`
//! - The order validation service and the chain event feed
//!
//! Environment variables (`HOST`, `PORT`, `CHAIN_ID`, `VALIDATOR_URL`,
//! `EVENT_FEED_URL`) override file values.

use crate::domain::{Address, Amount, ChainId};
use alloy_primitives::U256;
use relay_core::serde_amount;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
    #[error("Unknown network '{0}' (expected ganache, kovan, ropsten or rinkeby)")]
    UnknownNetwork(String),
}

/// Root configuration for the relay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Network the relay accepts orders for
    #[serde(default)]
    pub network: NetworkConfig,

    /// Values handed out by `/v3/order_config`
    #[serde(default)]
    pub order_config: OrderConfigDefaults,

    /// Order validation service
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Fill/cancel event feed; without one, orders leave the book only by expiring
    #[serde(default)]
    pub event_feed: Option<EventFeedConfig>,
}

impl RelayConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Default configuration for a named network preset
    pub fn for_network(name: &str) -> Result<Self, ConfigError> {
        let network =
            NetworkConfig::preset(name).ok_or_else(|| ConfigError::UnknownNetwork(name.into()))?;
        Ok(Self {
            network,
            ..Default::default()
        })
    }

    /// Apply overrides from process environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test maps)
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_value("PORT", &port)?;
        }
        if let Some(chain_id) = lookup("CHAIN_ID") {
            self.network.chain_id = parse_value("CHAIN_ID", &chain_id)?;
        }
        if let Some(url) = lookup("VALIDATOR_URL") {
            self.validator.url = Some(url);
        }
        if let Some(url) = lookup("EVENT_FEED_URL") {
            match &mut self.event_feed {
                Some(feed) => feed.url = url,
                None => self.event_feed = Some(EventFeedConfig::new(url)),
            }
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Network the relay serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub rpc_url: String,
    pub network_id: u64,
    pub chain_id: ChainId,
}

impl NetworkConfig {
    /// Local ganache snapshot
    pub fn ganache() -> Self {
        Self {
            name: "ganache".to_string(),
            rpc_url: "http://127.0.0.1:8545".to_string(),
            network_id: 50,
            chain_id: 1337,
        }
    }

    pub fn kovan() -> Self {
        Self::public_testnet("kovan", 42)
    }

    pub fn ropsten() -> Self {
        Self::public_testnet("ropsten", 3)
    }

    pub fn rinkeby() -> Self {
        Self::public_testnet("rinkeby", 4)
    }

    fn public_testnet(name: &str, id: u64) -> Self {
        Self {
            name: name.to_string(),
            rpc_url: format!("https://{name}.infura.io"),
            network_id: id,
            chain_id: id,
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ganache" => Some(Self::ganache()),
            "kovan" => Some(Self::kovan()),
            "ropsten" => Some(Self::ropsten()),
            "rinkeby" => Some(Self::rinkeby()),
            _ => None,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::ganache()
    }
}

/// Fee and sender settings the relay asks makers to put in their orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfigDefaults {
    #[serde(default)]
    pub sender_address: Address,
    #[serde(default)]
    pub fee_recipient_address: Address,
    #[serde(default = "default_maker_fee", with = "serde_amount")]
    pub maker_fee: Amount,
    #[serde(default = "default_taker_fee", with = "serde_amount")]
    pub taker_fee: Amount,
}

fn default_maker_fee() -> Amount {
    U256::ZERO
}

fn default_taker_fee() -> Amount {
    U256::from(1000u64)
}

impl Default for OrderConfigDefaults {
    fn default() -> Self {
        Self {
            sender_address: Address::ZERO,
            fee_recipient_address: Address::ZERO,
            maker_fee: default_maker_fee(),
            taker_fee: default_taker_fee(),
        }
    }
}

/// Order validation service. Without a URL the relay runs the trusting
/// development validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_validator_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_validator_timeout_ms() -> u64 {
    5000
}

impl ValidatorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_ms: default_validator_timeout_ms(),
        }
    }
}

/// WebSocket fill/cancel feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFeedConfig {
    pub url: String,
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_reconnect_delay_ms() -> u64 {
    5000
}

fn default_channel_capacity() -> usize {
    1024
}

impl EventFeedConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}
