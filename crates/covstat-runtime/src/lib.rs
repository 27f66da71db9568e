pub mod client;
pub mod config;
pub mod error;
pub mod live;
pub mod source;

pub use client::StatsClient;
pub use config::{Config, LiveConfig, resolve_config_path};
pub use error::{Error, Result};
pub use live::{LiveEvent, LiveMonitor, PollSchedule, Sleeper, ThreadSleeper};
pub use source::{HttpSource, StatsSource};
