use crate::application::ports::{OrderStore, OrderValidator, StoreError, ValidatorError};
use crate::domain::{Amount, OrderHash, OrderStatus, SignedOrder, StoredOrder};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitOrderError {
    #[error(transparent)]
    Validator(#[from] ValidatorError),
    #[error(
        "order {order_hash} is not fillable (status {status:?}, remaining {remaining}, valid signature {valid_signature})"
    )]
    NotFillable {
        order_hash: OrderHash,
        status: OrderStatus,
        remaining: Amount,
        valid_signature: bool,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Accept a signed order into the book if the validator says it is fillable
pub struct SubmitOrderUseCase<S, V>
where
    S: OrderStore,
    V: OrderValidator + ?Sized,
{
    store: Arc<S>,
    validator: Arc<V>,
}

impl<S, V> SubmitOrderUseCase<S, V>
where
    S: OrderStore,
    V: OrderValidator + ?Sized,
{
    pub fn new(store: Arc<S>, validator: Arc<V>) -> Self {
        Self { store, validator }
    }

    pub async fn execute(&self, order: SignedOrder) -> Result<StoredOrder, SubmitOrderError> {
        let state = self.validator.order_relevant_state(&order).await?;

        if !state.is_fillable() {
            tracing::warn!(
                order_hash = %state.order_hash(),
                status = ?state.order_info.order_status,
                remaining = %state.fillable_taker_asset_amount,
                valid_signature = state.is_valid_signature,
                "Rejecting unfillable order"
            );
            return Err(SubmitOrderError::NotFillable {
                order_hash: state.order_hash(),
                status: state.order_info.order_status,
                remaining: state.fillable_taker_asset_amount,
                valid_signature: state.is_valid_signature,
            });
        }

        let stored = StoredOrder::accepted(order, &state);
        self.store.insert(stored.clone())?;

        tracing::info!(
            order_hash = %stored.hash(),
            maker_asset = %stored.order.maker_asset_data,
            taker_asset = %stored.order.taker_asset_data,
            "Order accepted"
        );
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{WETH, ZRX, hash, signed_order};
    use crate::domain::{OrderInfo, OrderRelevantState};
    use crate::infrastructure::InMemoryOrderStore;
    use alloy_primitives::U256;
    use async_trait::async_trait;

    /// Returns a fixed verdict for every order
    struct StubValidator(Result<OrderRelevantState, ValidatorError>);

    impl StubValidator {
        fn verdict(status: OrderStatus, remaining: u64, valid_signature: bool) -> Self {
            StubValidator(Ok(OrderRelevantState {
                order_info: OrderInfo {
                    order_status: status,
                    order_hash: hash(7),
                    order_taker_asset_filled_amount: U256::ZERO,
                },
                fillable_taker_asset_amount: U256::from(remaining),
                is_valid_signature: valid_signature,
            }))
        }
    }

    #[async_trait]
    impl OrderValidator for StubValidator {
        async fn order_relevant_state(
            &self,
            _order: &SignedOrder,
        ) -> Result<OrderRelevantState, ValidatorError> {
            self.0.clone()
        }
    }

    fn use_case(
        validator: StubValidator,
    ) -> (
        Arc<InMemoryOrderStore>,
        SubmitOrderUseCase<InMemoryOrderStore, StubValidator>,
    ) {
        let store = Arc::new(InMemoryOrderStore::new());
        let use_case = SubmitOrderUseCase::new(Arc::clone(&store), Arc::new(validator));
        (store, use_case)
    }

    #[tokio::test]
    async fn test_fillable_order_is_stored_under_validator_hash() {
        let (store, use_case) = use_case(StubValidator::verdict(OrderStatus::Fillable, 10, true));

        let stored = use_case
            .execute(signed_order(ZRX, WETH, u64::MAX))
            .await
            .unwrap();

        assert_eq!(stored.hash(), hash(7));
        assert_eq!(
            stored.meta_data.remaining_fillable_taker_asset_amount,
            U256::from(10u64)
        );
        assert!(store.get(&hash(7)).is_some());
    }

    #[tokio::test]
    async fn test_unfillable_orders_rejected() {
        for validator in [
            StubValidator::verdict(OrderStatus::Expired, 10, true),
            StubValidator::verdict(OrderStatus::Fillable, 0, true),
            StubValidator::verdict(OrderStatus::Fillable, 10, false),
        ] {
            let (store, use_case) = use_case(validator);
            let result = use_case.execute(signed_order(ZRX, WETH, u64::MAX)).await;
            assert!(matches!(result, Err(SubmitOrderError::NotFillable { .. })));
            assert!(store.is_empty());
        }
    }

    #[tokio::test]
    async fn test_resubmission_is_duplicate() {
        let (store, use_case) = use_case(StubValidator::verdict(OrderStatus::Fillable, 10, true));

        use_case
            .execute(signed_order(ZRX, WETH, u64::MAX))
            .await
            .unwrap();
        let second = use_case.execute(signed_order(ZRX, WETH, u64::MAX)).await;

        assert_eq!(
            second,
            Err(SubmitOrderError::Store(StoreError::DuplicateOrder(hash(7))))
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_validator_failure_propagates() {
        let (store, use_case) = use_case(StubValidator(Err(ValidatorError::Unavailable(
            "connection refused".into(),
        ))));

        let result = use_case.execute(signed_order(ZRX, WETH, u64::MAX)).await;
        assert!(matches!(result, Err(SubmitOrderError::Validator(_))));
        assert!(store.is_empty());
    }
}
