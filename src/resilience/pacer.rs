use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Minimum inter-request spacing for one client instance.
///
/// This is a simple global throttle, not a token bucket: at most one request
/// starts per interval, independent of how many are still in flight.
/// Concurrent callers serialize on the internal lock; whoever acquires it
/// first claims the next slot. No fairness guarantee beyond that.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    /// Time of the last pacing check. Stamped on every attempt, including
    /// ones whose request goes on to fail.
    last_request: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Mutex::new(None),
        }
    }

    /// Suspend until the interval has elapsed since the previous pacing
    /// check, then stamp the marker. The wait is a task suspension; other
    /// tasks on the runtime keep running.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
