mod order;
mod order_state;
mod order_status;

pub use order::SignedOrder;
pub use order_state::{OrderInfo, OrderRelevantState};
pub use order_status::{OrderStatus, UnknownOrderStatus};
