//! Live polling loop.
//!
//! One blocking fetch per cycle, processed synchronously, followed by a
//! jittered pause. Fetches never overlap and the snapshot cache is only
//! touched by successful cycles, so a failed fetch leaves the previous good
//! snapshot in place for the next diff.

use crate::client::StatsClient;
use crate::config::LiveConfig;
use crate::source::StatsSource;
use crate::{Error, Result};
use covstat_engine::{LiveChange, SnapshotCache};
use rand::Rng;
use std::time::Duration;
use tracing::{info, warn};

/// Blocks the loop between polls
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Delay between polls: `base + uniform(0, jitter)` after a successful
/// cycle, a flat `retry` after a failed one. The jitter spreads load from
/// many clients polling the same shared API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub base: Duration,
    pub jitter: Duration,
    pub retry: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::from(&LiveConfig::default())
    }
}

impl From<&LiveConfig> for PollSchedule {
    fn from(config: &LiveConfig) -> Self {
        Self {
            base: Duration::from_secs(config.base_delay_secs),
            jitter: Duration::from_secs(config.jitter_secs),
            retry: Duration::from_secs(config.retry_delay_secs),
        }
    }
}

impl PollSchedule {
    pub fn next_delay(&self, rng: &mut impl Rng) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rng.random_range(0..=jitter_ms))
    }
}

#[derive(Debug)]
pub enum LiveEvent {
    /// A cycle completed; `changes` is empty when nothing moved
    Changes {
        changes: Vec<LiveChange>,
        next_poll: Duration,
    },

    /// The fetch failed; the loop waits `retry_in` and tries again
    FetchFailed { error: Error, retry_in: Duration },
}

pub struct LiveMonitor<S, Z = ThreadSleeper> {
    client: StatsClient<S>,
    cache: SnapshotCache,
    schedule: PollSchedule,
    sleeper: Z,
}

impl<S: StatsSource> LiveMonitor<S, ThreadSleeper> {
    pub fn new(client: StatsClient<S>, schedule: PollSchedule) -> Self {
        Self::with_sleeper(client, schedule, ThreadSleeper)
    }
}

impl<S: StatsSource, Z: Sleeper> LiveMonitor<S, Z> {
    pub fn with_sleeper(client: StatsClient<S>, schedule: PollSchedule, sleeper: Z) -> Self {
        Self {
            client,
            cache: SnapshotCache::new(),
            schedule,
            sleeper,
        }
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    pub fn sleeper(&self) -> &Z {
        &self.sleeper
    }

    /// Fetch one snapshot and diff it against the cache
    pub fn poll_once(&mut self) -> Result<Vec<LiveChange>> {
        let snapshot = self.client.list()?;
        let changes = self.cache.apply(snapshot);
        info!(
            changes = changes.len(),
            territories = self.cache.len(),
            "live cycle complete"
        );
        Ok(changes)
    }

    /// Poll, report the outcome, then sleep. Returns the delay that was slept.
    pub fn step(&mut self, on_event: &mut impl FnMut(LiveEvent)) -> Duration {
        let delay = match self.poll_once() {
            Ok(changes) => {
                let delay = self.schedule.next_delay(&mut rand::rng());
                on_event(LiveEvent::Changes {
                    changes,
                    next_poll: delay,
                });
                delay
            }
            Err(error) => {
                warn!(error = %error, "live fetch failed");
                let delay = self.schedule.retry;
                on_event(LiveEvent::FetchFailed {
                    error,
                    retry_in: delay,
                });
                delay
            }
        };

        self.sleeper.sleep(delay);
        delay
    }

    /// Run exactly `cycles` poll cycles, sleeping after each one
    pub fn run_cycles(&mut self, cycles: usize, mut on_event: impl FnMut(LiveEvent)) {
        for _ in 0..cycles {
            self.step(&mut on_event);
        }
    }

    pub fn run(&mut self, mut on_event: impl FnMut(LiveEvent)) -> ! {
        loop {
            self.step(&mut on_event);
        }
    }
}
