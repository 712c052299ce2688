use std::future::Future;
use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval};

/// Paces the game loop. Starting is construction, stopping is dropping.
pub trait TickScheduler: Send {
    fn next_tick(&mut self) -> impl Future<Output = ()> + Send;
}

pub struct IntervalScheduler {
    interval: Interval,
}

impl IntervalScheduler {
    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl TickScheduler for IntervalScheduler {
    async fn next_tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Ticks as fast as the loop can go; used for headless simulations and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl TickScheduler for ImmediateScheduler {
    async fn next_tick(&mut self) {
        tokio::task::yield_now().await;
    }
}
