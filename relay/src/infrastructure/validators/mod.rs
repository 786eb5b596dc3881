mod remote;
mod trusting;

pub use remote::RemoteOrderValidator;
pub use trusting::TrustingOrderValidator;
