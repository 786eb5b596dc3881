use alloy_primitives::{Bytes, hex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    #[error("'{0}' is not a hex string")]
    InvalidHex(String),
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Opaque ABI-encoded description of a tradeable asset (token proxy id plus
/// token address and ids). The relay never interprets it; it is only compared.
///
/// Equality is on the decoded bytes, so `0xF47261B0…` and `0xf47261b0…` name
/// the same asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AssetData(Bytes);

impl AssetData {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for AssetData {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s)
            .map(|bytes| AssetData(Bytes::from(bytes)))
            .map_err(|_| HexParseError::InvalidHex(s.to_string()))
    }
}

impl fmt::Display for AssetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(&self.0))
    }
}

impl Serialize for AssetData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssetData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
