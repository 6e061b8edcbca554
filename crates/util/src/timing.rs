//! Async timing helpers for throttling.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::trace;

/// Resolve after `duration` has elapsed.
pub async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// A throttle shared between concurrent callers.
///
/// Every [`Throttler::throttle`] call holds an internal lock for `freq`, so
/// at most one caller passes per interval. Waiters are served in arrival
/// order; there is no priority and no cancellation. Clones share the same
/// lock.
///
/// ```
/// use std::time::Duration;
/// use goodish_util::timing::Throttler;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let throttler = Throttler::new(Duration::from_millis(100));
/// throttler.throttle().await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Throttler {
    freq: Duration,
    lock: Arc<Mutex<()>>,
}

impl Throttler {
    pub fn new(freq: Duration) -> Self {
        Self {
            freq,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn freq(&self) -> Duration {
        self.freq
    }

    /// Wait for this caller's turn, then hold it for one interval.
    pub async fn throttle(&self) {
        let _guard = self.lock.lock().await;
        trace!(freq_ms = self.freq.as_millis() as u64, "throttle acquired");
        wait(self.freq).await;
    }
}
