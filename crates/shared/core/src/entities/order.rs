use crate::values::{Address, Amount, AssetData, Bytes, ChainId, UnixSeconds, serde_amount};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A signed 0x v3 order as submitted by makers.
///
/// The relay reads `maker_asset_data`, `taker_asset_data` and
/// `expiration_time_seconds`; everything else is carried through untouched
/// and handed back to takers in order-book responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    pub chain_id: ChainId,
    pub exchange_address: Address,
    pub maker_address: Address,
    pub taker_address: Address,
    pub fee_recipient_address: Address,
    pub sender_address: Address,
    #[serde(with = "serde_amount")]
    pub maker_asset_amount: Amount,
    #[serde(with = "serde_amount")]
    pub taker_asset_amount: Amount,
    #[serde(with = "serde_amount")]
    pub maker_fee: Amount,
    #[serde(with = "serde_amount")]
    pub taker_fee: Amount,
    #[serde(with = "serde_amount")]
    pub expiration_time_seconds: Amount,
    #[serde(with = "serde_amount")]
    pub salt: Amount,
    pub maker_asset_data: AssetData,
    pub taker_asset_data: AssetData,
    #[serde(default)]
    pub maker_fee_asset_data: AssetData,
    #[serde(default)]
    pub taker_fee_asset_data: AssetData,
    pub signature: Bytes,
}

impl SignedOrder {
    /// Returns true if the order is still valid strictly after `as_of`
    pub fn is_live_at(&self, as_of: UnixSeconds) -> bool {
        self.expiration_time_seconds > U256::from(as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const ORDER_JSON: &str = r#"{
        "chainId": 1337,
        "exchangeAddress": "0x48bacb9266a570d521063ef5dd96e61686dbe788",
        "makerAddress": "0x5409ed021d9299bf6814279a6a1411a7e866a631",
        "takerAddress": "0x0000000000000000000000000000000000000000",
        "feeRecipientAddress": "0x0000000000000000000000000000000000000000",
        "senderAddress": "0x0000000000000000000000000000000000000000",
        "makerAssetAmount": "5000000000000000000",
        "takerAssetAmount": "100000000000000000000000000001",
        "makerFee": "0",
        "takerFee": "1000",
        "expirationTimeSeconds": "1700000600",
        "salt": "71403417929722946263004598425296436355812478393436429880328617624618893115364",
        "makerAssetData": "0xf47261b0000000000000000000000000871dd7c2b4b25e1aa18728e9d5f2af4c4e431f5c",
        "takerAssetData": "0xf47261b00000000000000000000000000b1ba0af832d7c05fd64161e0db78e85978e8082",
        "makerFeeAssetData": "0x",
        "takerFeeAssetData": "0x",
        "signature": "0x1b01020304"
    }"#;

    #[test]
    fn test_parse_order_preserves_big_integers() {
        let order: SignedOrder = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.chain_id, 1337);
        assert_eq!(
            order.taker_asset_amount.to_string(),
            "100000000000000000000000000001"
        );
        assert_eq!(
            order.salt.to_string(),
            "71403417929722946263004598425296436355812478393436429880328617624618893115364"
        );
        assert!(order.maker_fee_asset_data.is_empty());
    }

    #[test]
    fn test_serialized_amounts_are_decimal_strings() {
        let order: SignedOrder = serde_json::from_str(ORDER_JSON).unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["takerFee"], "1000");
        assert_eq!(value["expirationTimeSeconds"], "1700000600");
    }

    #[test]
    fn test_float_amount_is_rejected() {
        let json = ORDER_JSON.replace(r#""takerFee": "1000""#, r#""takerFee": 1000.5"#);
        assert!(serde_json::from_str::<SignedOrder>(&json).is_err());
    }

    #[test]
    fn test_liveness_is_strict() {
        let order: SignedOrder = serde_json::from_str(ORDER_JSON).unwrap();
        assert!(order.is_live_at(1_700_000_599));
        assert!(!order.is_live_at(1_700_000_600));
    }
}
