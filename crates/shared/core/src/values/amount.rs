use alloy_primitives::U256;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use thiserror::Error;

/// Token amounts, fees, salts and expiry times are 256-bit unsigned integers
/// on the exchange contract. Never represent them as floating point.
pub type Amount = U256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount '{0}' is not an unsigned integer")]
    NotAnInteger(String),
    #[error("amount '{0}' does not fit in 256 bits")]
    OutOfRange(String),
}

/// Parse a decimal (`"1000"`) or `0x`-prefixed hex (`"0x3e8"`) amount.
pub fn parse_amount(raw: &str) -> Result<Amount, AmountError> {
    if raw.is_empty() {
        return Err(AmountError::Empty);
    }

    let (digits, radix) = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (raw, 10),
    };

    let valid = !digits.is_empty()
        && digits.chars().all(|c| match radix {
            16 => c.is_ascii_hexdigit(),
            _ => c.is_ascii_digit(),
        });
    if !valid {
        return Err(AmountError::NotAnInteger(raw.to_string()));
    }

    U256::from_str_radix(digits, radix).map_err(|_| AmountError::OutOfRange(raw.to_string()))
}

/// Serde adapter for [`Amount`] fields: decimal strings on the wire.
///
/// Accepts decimal strings, hex strings and JSON integers that fit in a
/// `u64`. JSON floats are rejected so precision can never be lost silently.
pub mod serde_amount {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }

    struct AmountVisitor;

    impl Visitor<'_> for AmountVisitor {
        type Value = Amount;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an unsigned 256-bit integer as a decimal or hex string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
            parse_amount(v).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
            Ok(U256::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
            u64::try_from(v)
                .map(U256::from)
                .map_err(|_| E::custom(AmountError::NotAnInteger(v.to_string())))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
            Err(E::custom(AmountError::NotAnInteger(v.to_string())))
        }
    }
}
