//! Inter-page throttling
//!
//! A governor token bucket with a burst of one token: the first acquisition
//! passes immediately, every later one waits out the remainder of the
//! interval. This gives exactly the pagination contract of "a fixed minimum
//! delay between consecutive fetches, skipped before the very first fetch".

use crate::types::THROTTLE_INTERVAL;
use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Enforces the minimum delay between consecutive page fetches
#[derive(Clone)]
pub struct Throttle {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl Throttle {
    /// Create a throttle with the process-wide interval
    pub fn new() -> Self {
        Self::with_interval(THROTTLE_INTERVAL)
    }

    /// Create a throttle with an explicit interval (used by tests)
    pub fn with_interval(interval: Duration) -> Self {
        let one = NonZeroU32::new(1).unwrap();
        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(one))
            .allow_burst(one);
        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Wait until the next fetch is allowed
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Check whether a fetch would be allowed right now
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").finish()
    }
}
