use crate::domain::{Clock, Timestamp};
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock that only moves when told to
///
/// Clones share state, so a test can hold one handle while the relay holds
/// another.
#[derive(Debug)]
pub struct ManualClock {
    inner: Arc<RwLock<Timestamp>>,
}

impl ManualClock {
    /// Create a clock frozen at a specific time
    pub fn at(time: Timestamp) -> Self {
        ManualClock {
            inner: Arc::new(RwLock::new(time)),
        }
    }

    /// Create a clock frozen at the current wall-clock time
    pub fn fixed() -> Self {
        Self::at(Utc::now())
    }

    pub fn advance(&self, duration: Duration) {
        *self.inner.write() += duration;
    }

    pub fn set_time(&self, time: Timestamp) {
        *self.inner.write() = time;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::fixed()
    }
}

impl Clone for ManualClock {
    fn clone(&self) -> Self {
        ManualClock {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.inner.read()
    }
}
