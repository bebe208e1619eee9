//! Fixed-interval gate between catalog lookups

use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Lets one caller through at most once per `period`.
/// The first `ready()` returns immediately; a zero period never waits.
pub struct RateLimiter {
    ticker: Option<Interval>,
}

impl RateLimiter {
    pub fn new(period: Duration) -> Self {
        let ticker = (!period.is_zero()).then(|| {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });
        Self { ticker }
    }

    pub async fn ready(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.tick().await;
        }
    }
}
