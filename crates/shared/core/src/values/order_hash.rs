use super::HexParseError;
use alloy_primitives::{B256, hex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 32-byte order digest assigned by the validator. Primary key of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderHash(B256);

impl OrderHash {
    pub const fn new(digest: B256) -> Self {
        OrderHash(digest)
    }
}

impl FromStr for OrderHash {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| HexParseError::InvalidHex(s.to_string()))?;
        if bytes.len() != 32 {
            return Err(HexParseError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        Ok(OrderHash(B256::from_slice(&bytes)))
    }
}

impl fmt::Display for OrderHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(self.0))
    }
}

impl Serialize for OrderHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OrderHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
