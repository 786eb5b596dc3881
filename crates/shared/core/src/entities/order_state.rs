use super::OrderStatus;
use crate::values::{Amount, OrderHash, serde_amount};
use serde::{Deserialize, Serialize};

/// Result of the exchange's `getOrderInfo` for one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub order_status: OrderStatus,
    pub order_hash: OrderHash,
    #[serde(with = "serde_amount")]
    pub order_taker_asset_filled_amount: Amount,
}

/// Everything the relay needs to decide whether to accept an order,
/// as computed by an external validator (`getOrderRelevantState`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRelevantState {
    pub order_info: OrderInfo,
    #[serde(with = "serde_amount")]
    pub fillable_taker_asset_amount: Amount,
    pub is_valid_signature: bool,
}

impl OrderRelevantState {
    /// Fillable, something left to fill, and correctly signed
    pub fn is_fillable(&self) -> bool {
        self.order_info.order_status.is_fillable()
            && !self.fillable_taker_asset_amount.is_zero()
            && self.is_valid_signature
    }

    pub fn order_hash(&self) -> OrderHash {
        self.order_info.order_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn state(status: OrderStatus, remaining: u64, valid: bool) -> OrderRelevantState {
        OrderRelevantState {
            order_info: OrderInfo {
                order_status: status,
                order_hash: format!("0x{}", "11".repeat(32)).parse().unwrap(),
                order_taker_asset_filled_amount: U256::ZERO,
            },
            fillable_taker_asset_amount: U256::from(remaining),
            is_valid_signature: valid,
        }
    }

    #[test]
    fn test_all_three_conditions_required() {
        assert!(state(OrderStatus::Fillable, 10, true).is_fillable());
        assert!(!state(OrderStatus::Expired, 10, true).is_fillable());
        assert!(!state(OrderStatus::Fillable, 0, true).is_fillable());
        assert!(!state(OrderStatus::Fillable, 10, false).is_fillable());
    }

    #[test]
    fn test_wire_format() {
        let json = format!(
            r#"{{
                "orderInfo": {{
                    "orderStatus": 3,
                    "orderHash": "0x{}",
                    "orderTakerAssetFilledAmount": "0"
                }},
                "fillableTakerAssetAmount": "250",
                "isValidSignature": true
            }}"#,
            "22".repeat(32)
        );
        let parsed: OrderRelevantState = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_fillable());
        assert_eq!(parsed.fillable_taker_asset_amount, U256::from(250u64));
    }
}
