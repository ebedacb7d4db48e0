//! Cancellable repeating timer for the game loop.
//!
//! The host arms it at the engine's speed, re-arms it whenever the speed
//! changes and disarms it on pause or death. A disarmed ticker never fires.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[derive(Debug, Default)]
pub struct Ticker {
    interval: Option<Interval>,
    period: Option<Duration>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start firing every `period`, first tick one period from now
    pub fn arm(&mut self, period: Duration) {
        let mut interval = interval_at(Instant::now() + period, period);
        // A slow frame must not cause a burst of catch-up moves
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.period = Some(period);
    }

    pub fn disarm(&mut self) {
        self.interval = None;
        self.period = None;
    }

    /// Re-arm at `period` if armed at a different one
    pub fn set_period(&mut self, period: Duration) {
        if self.is_armed() && self.period != Some(period) {
            self.arm(period);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Wait for the next tick; pends forever while disarmed
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
