mod amount;
mod asset_data;
mod order_hash;

pub use alloy_primitives::{Address, Bytes};
pub use amount::{Amount, AmountError, parse_amount, serde_amount};
pub use asset_data::{AssetData, HexParseError};
pub use order_hash::OrderHash;

/// EIP-155 chain identifier (1337 for a local ganache node)
pub type ChainId = u64;

/// Unix time in seconds, the unit of `expirationTimeSeconds`
pub type UnixSeconds = u64;
