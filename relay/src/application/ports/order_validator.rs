use crate::domain::{OrderRelevantState, SignedOrder};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("validator unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected validator response: {0}")]
    Protocol(String),
}

/// Port to whatever computes on-chain order state (status, hash, remaining
/// fillable amount, signature validity).
///
/// The relay never hashes or verifies orders itself.
#[async_trait]
pub trait OrderValidator: Send + Sync {
    async fn order_relevant_state(
        &self,
        order: &SignedOrder,
    ) -> Result<OrderRelevantState, ValidatorError>;
}
