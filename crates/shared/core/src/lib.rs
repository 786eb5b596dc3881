//! SRA Relay Core
//!
//! Wire types shared by the relay and its collaborators: signed 0x v3 orders,
//! opaque asset data, order hashes and 256-bit amounts.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{OrderInfo, OrderRelevantState, OrderStatus, SignedOrder, UnknownOrderStatus};
pub use values::{
    Address, Amount, AmountError, AssetData, Bytes, ChainId, HexParseError, OrderHash,
    UnixSeconds, parse_amount, serde_amount,
};
