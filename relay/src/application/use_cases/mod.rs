mod get_orderbook;
mod process_chain_event;
mod submit_order;

pub use get_orderbook::{GetOrderbookQuery, GetOrderbookUseCase};
pub use process_chain_event::ProcessChainEventUseCase;
pub use submit_order::{SubmitOrderError, SubmitOrderUseCase};
