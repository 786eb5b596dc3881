use crate::domain::Timestamp;
use relay_core::UnixSeconds;

/// Basic clock trait - provides current time
///
/// Order-book queries are evaluated against this clock, so tests can pin
/// "now" and exercise expiry without sleeping.
pub trait Clock: Send + Sync {
    /// Get current time from this clock's perspective
    fn now(&self) -> Timestamp;

    /// Current Unix time in whole seconds (floor), clamped at the epoch
    fn unix_seconds(&self) -> UnixSeconds {
        self.now().timestamp().max(0) as UnixSeconds
    }
}
