use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order status as reported by the exchange contract's `getOrderInfo`.
///
/// Serialized as the contract's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderStatus {
    /// Default value
    Invalid,
    /// Order does not have a valid maker asset amount
    InvalidMakerAssetAmount,
    /// Order does not have a valid taker asset amount
    InvalidTakerAssetAmount,
    /// Order can be filled
    Fillable,
    /// Order has already expired
    Expired,
    /// Order is fully filled
    FullyFilled,
    /// Order has been cancelled
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown order status code {0}")]
pub struct UnknownOrderStatus(pub u8);

impl OrderStatus {
    pub fn is_fillable(&self) -> bool {
        matches!(self, OrderStatus::Fillable)
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> u8 {
        match status {
            OrderStatus::Invalid => 0,
            OrderStatus::InvalidMakerAssetAmount => 1,
            OrderStatus::InvalidTakerAssetAmount => 2,
            OrderStatus::Fillable => 3,
            OrderStatus::Expired => 4,
            OrderStatus::FullyFilled => 5,
            OrderStatus::Cancelled => 6,
        }
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = UnknownOrderStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OrderStatus::Invalid),
            1 => Ok(OrderStatus::InvalidMakerAssetAmount),
            2 => Ok(OrderStatus::InvalidTakerAssetAmount),
            3 => Ok(OrderStatus::Fillable),
            4 => Ok(OrderStatus::Expired),
            5 => Ok(OrderStatus::FullyFilled),
            6 => Ok(OrderStatus::Cancelled),
            other => Err(UnknownOrderStatus(other)),
        }
    }
}
