//! Testing infrastructure for covstat tests.
//!
//! - `fixtures`: JSON payloads shaped like the statistics API responses
//! - `source`: scripted in-memory `StatsSource` and a recording `Sleeper`

pub mod fixtures;
pub mod source;

pub use source::{RecordingSleeper, StubSource};
