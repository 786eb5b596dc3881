mod manual_clock;

pub use manual_clock::ManualClock;

use crate::domain::{Clock, Timestamp};
use chrono::Utc;

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}
