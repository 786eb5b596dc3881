mod order_store;
mod order_validator;

pub use order_store::{OrderStore, StoreError};
pub use order_validator::{OrderValidator, ValidatorError};
