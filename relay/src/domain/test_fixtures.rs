//! Order builders shared by unit tests

use super::{Address, AssetData, OrderHash, SignedOrder, StoredOrder, UnixSeconds};
use alloy_primitives::{B256, Bytes, U256};

pub const WETH: &str = "0xf47261b0000000000000000000000000c778417e063141139fce010982780140aa0cd5ab";
pub const ZRX: &str = "0xf47261b0000000000000000000000000ff67881f8d12f372d91baae9752eb3631ff0ed00";

pub fn asset(raw: &str) -> AssetData {
    raw.parse().unwrap()
}

pub fn hash(n: u8) -> OrderHash {
    OrderHash::new(B256::repeat_byte(n))
}

pub fn signed_order(maker: &str, taker: &str, expiry: UnixSeconds) -> SignedOrder {
    SignedOrder {
        chain_id: 1337,
        exchange_address: Address::ZERO,
        maker_address: Address::repeat_byte(0x54),
        taker_address: Address::ZERO,
        fee_recipient_address: Address::ZERO,
        sender_address: Address::ZERO,
        maker_asset_amount: U256::from(5u64),
        taker_asset_amount: U256::from(10u64),
        maker_fee: U256::ZERO,
        taker_fee: U256::ZERO,
        expiration_time_seconds: U256::from(expiry),
        salt: U256::from(42u64),
        maker_asset_data: asset(maker),
        taker_asset_data: asset(taker),
        maker_fee_asset_data: AssetData::default(),
        taker_fee_asset_data: AssetData::default(),
        signature: Bytes::from_static(&[0x1b, 0x01]),
    }
}

pub fn stored(n: u8, maker: &str, taker: &str, expiry: UnixSeconds) -> StoredOrder {
    let order = signed_order(maker, taker, expiry);
    let remaining = order.taker_asset_amount;
    StoredOrder::new(order, hash(n), remaining)
}
