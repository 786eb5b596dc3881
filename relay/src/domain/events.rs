use relay_core::OrderHash;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange contract event that ends an order's life in the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainEventKind {
    Fill,
    Cancel,
}

impl fmt::Display for ChainEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainEventKind::Fill => write!(f, "filled"),
            ChainEventKind::Cancel => write!(f, "cancelled"),
        }
    }
}

/// Fill or cancel notification keyed by order hash.
///
/// Wire form: `{"event":"fill","orderHash":"0x…"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEvent {
    #[serde(rename = "event")]
    pub kind: ChainEventKind,
    pub order_hash: OrderHash,
}

impl ChainEvent {
    pub fn fill(order_hash: OrderHash) -> Self {
        ChainEvent {
            kind: ChainEventKind::Fill,
            order_hash,
        }
    }

    pub fn cancel(order_hash: OrderHash) -> Self {
        ChainEvent {
            kind: ChainEventKind::Cancel,
            order_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_event() {
        let hash = format!("0x{}", "ef".repeat(32));
        let json = format!(r#"{{"event":"cancel","orderHash":"{hash}"}}"#);
        let event: ChainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, ChainEvent::cancel(hash.parse().unwrap()));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = format!(r#"{{"event":"transfer","orderHash":"0x{}"}}"#, "ef".repeat(32));
        assert!(serde_json::from_str::<ChainEvent>(&json).is_err());
    }
}
