pub mod ports;
pub mod use_cases;

pub use ports::{OrderStore, OrderValidator, StoreError, ValidatorError};
pub use use_cases::{
    GetOrderbookQuery, GetOrderbookUseCase, ProcessChainEventUseCase, SubmitOrderError,
    SubmitOrderUseCase,
};
