use relay_core::{
    Amount, AssetData, OrderHash, OrderRelevantState, SignedOrder, UnixSeconds, serde_amount,
};
use serde::{Deserialize, Serialize};

/// Page number reported on every order-book side; the relay does not paginate.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size reported on every order-book side.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Relay-side metadata captured when an order is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetadata {
    pub order_hash: OrderHash,
    /// Remaining taker amount at acceptance time; not refreshed afterwards
    #[serde(with = "serde_amount")]
    pub remaining_fillable_taker_asset_amount: Amount,
}

/// An accepted order as held by the store and served to takers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOrder {
    pub order: SignedOrder,
    pub meta_data: OrderMetadata,
}

impl StoredOrder {
    pub fn new(order: SignedOrder, order_hash: OrderHash, remaining: Amount) -> Self {
        StoredOrder {
            order,
            meta_data: OrderMetadata {
                order_hash,
                remaining_fillable_taker_asset_amount: remaining,
            },
        }
    }

    /// Build the record from the validator's verdict on `order`
    pub fn accepted(order: SignedOrder, state: &OrderRelevantState) -> Self {
        Self::new(order, state.order_hash(), state.fillable_taker_asset_amount)
    }

    pub fn hash(&self) -> OrderHash {
        self.meta_data.order_hash
    }

    pub fn asset_pair(&self) -> AssetPair {
        AssetPair::new(
            self.order.maker_asset_data.clone(),
            self.order.taker_asset_data.clone(),
        )
    }

    pub fn is_live_at(&self, as_of: UnixSeconds) -> bool {
        self.order.is_live_at(as_of)
    }
}

/// Directed pair of asset fingerprints: what the maker gives, what the taker gives
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetPair {
    pub maker: AssetData,
    pub taker: AssetData,
}

impl AssetPair {
    pub fn new(maker: AssetData, taker: AssetData) -> Self {
        AssetPair { maker, taker }
    }

    /// Orders buying `base` with `quote`: maker gives quote, taker gives base
    pub fn bids(base: &AssetData, quote: &AssetData) -> Self {
        Self::new(quote.clone(), base.clone())
    }

    /// Orders selling `base` for `quote`: maker gives base, taker gives quote
    pub fn asks(base: &AssetData, quote: &AssetData) -> Self {
        Self::new(base.clone(), quote.clone())
    }
}

/// One side of the order book with SRA pagination fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub records: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
}

impl<T> Page<T> {
    /// Every matching record on page 1; `total` counts them all
    pub fn first(records: Vec<T>) -> Self {
        let total = records.len();
        Page {
            records,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            total,
        }
    }
}

/// Order book for one base/quote pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orderbook {
    pub bids: Page<StoredOrder>,
    pub asks: Page<StoredOrder>,
}

impl Orderbook {
    pub fn new(bids: Vec<StoredOrder>, asks: Vec<StoredOrder>) -> Self {
        Orderbook {
            bids: Page::first(bids),
            asks: Page::first(asks),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_orderbook_shape() {
        let json = serde_json::to_value(Orderbook::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bids": { "records": [], "page": 1, "perPage": 100, "total": 0 },
                "asks": { "records": [], "page": 1, "perPage": 100, "total": 0 },
            })
        );
    }

    #[test]
    fn test_bid_and_ask_pairs_are_mirrored() {
        let base: AssetData = "0x01".parse().unwrap();
        let quote: AssetData = "0x02".parse().unwrap();

        let bids = AssetPair::bids(&base, &quote);
        let asks = AssetPair::asks(&base, &quote);

        assert_eq!(bids.taker, base);
        assert_eq!(bids.maker, quote);
        assert_eq!(asks.maker, base);
        assert_eq!(asks.taker, quote);
    }
}
