use crate::application::ports::{OrderValidator, ValidatorError};
use crate::domain::{Clock, OrderHash, OrderInfo, OrderRelevantState, OrderStatus, SignedOrder};
use alloy_primitives::{U256, keccak256};
use async_trait::async_trait;
use std::sync::Arc;

/// Development validator for running the relay without a validation service.
///
/// Signatures are assumed valid and the hash is keccak-256 of the order's
/// JSON, which is NOT the exchange's EIP-712 order hash. Amount and expiry
/// checks mirror the contract's `getOrderInfo` ordering.
pub struct TrustingOrderValidator<C: Clock> {
    clock: Arc<C>,
}

impl<C: Clock> TrustingOrderValidator<C> {
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    fn status_of(&self, order: &SignedOrder) -> OrderStatus {
        if order.maker_asset_amount.is_zero() {
            OrderStatus::InvalidMakerAssetAmount
        } else if order.taker_asset_amount.is_zero() {
            OrderStatus::InvalidTakerAssetAmount
        } else if !order.is_live_at(self.clock.unix_seconds()) {
            OrderStatus::Expired
        } else {
            OrderStatus::Fillable
        }
    }
}

#[async_trait]
impl<C: Clock> OrderValidator for TrustingOrderValidator<C> {
    async fn order_relevant_state(
        &self,
        order: &SignedOrder,
    ) -> Result<OrderRelevantState, ValidatorError> {
        let payload =
            serde_json::to_vec(order).map_err(|e| ValidatorError::Protocol(e.to_string()))?;
        let order_status = self.status_of(order);

        let fillable_taker_asset_amount = if order_status.is_fillable() {
            order.taker_asset_amount
        } else {
            U256::ZERO
        };

        Ok(OrderRelevantState {
            order_info: OrderInfo {
                order_status,
                order_hash: OrderHash::new(keccak256(&payload)),
                order_taker_asset_filled_amount: U256::ZERO,
            },
            fillable_taker_asset_amount,
            is_valid_signature: true,
        })
    }
}
