use std::time::{Duration, Instant};

pub const ONE_SECOND: Duration = Duration::from_secs(1);

/// A periodic countdown interval polled by the event loop.
///
/// The countdown only exists while a round is being played; dropping it is
/// the cancellation, after which nothing can fire.
#[derive(Debug, Clone)]
pub struct Countdown {
    period: Duration,
    next_fire: Instant,
}

impl Countdown {
    /// Start a one-second countdown whose first period ends one second after `now`
    pub fn start(now: Instant) -> Self {
        Self::with_period(now, ONE_SECOND)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_fire: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of whole periods that ended since the previous poll
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next_fire {
            fired += 1;
            self.next_fire += self.period;
        }
        fired
    }
}
