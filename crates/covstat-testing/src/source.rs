use covstat_runtime::{Error, Result, Sleeper, StatsSource};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

enum Scripted {
    Payload(Value),
    Failure(String),
}

impl Scripted {
    fn into_result(self) -> Result<Value> {
        match self {
            Scripted::Payload(value) => Ok(value),
            Scripted::Failure(reason) => Err(Error::Transport(reason)),
        }
    }
}

/// In-memory source replaying scripted responses in order, one per fetch.
/// An exhausted script fails like an unreachable server.
#[derive(Default)]
pub struct StubSource {
    summary: RefCell<VecDeque<Scripted>>,
    list: RefCell<VecDeque<Scripted>>,
    timeline: RefCell<VecDeque<Scripted>>,
    timeline_requests: RefCell<Vec<(String, u32)>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(self, payload: Value) -> Self {
        self.summary.borrow_mut().push_back(Scripted::Payload(payload));
        self
    }

    pub fn with_summary_failure(self, reason: &str) -> Self {
        self.summary
            .borrow_mut()
            .push_back(Scripted::Failure(reason.to_string()));
        self
    }

    pub fn with_list(self, payload: Value) -> Self {
        self.list.borrow_mut().push_back(Scripted::Payload(payload));
        self
    }

    pub fn with_list_failure(self, reason: &str) -> Self {
        self.list
            .borrow_mut()
            .push_back(Scripted::Failure(reason.to_string()));
        self
    }

    pub fn with_timeline(self, payload: Value) -> Self {
        self.timeline
            .borrow_mut()
            .push_back(Scripted::Payload(payload));
        self
    }

    pub fn with_timeline_failure(self, reason: &str) -> Self {
        self.timeline
            .borrow_mut()
            .push_back(Scripted::Failure(reason.to_string()));
        self
    }

    /// `(territory, days)` of every timeline fetch so far
    pub fn timeline_requests(&self) -> Vec<(String, u32)> {
        self.timeline_requests.borrow().clone()
    }

    fn next(queue: &RefCell<VecDeque<Scripted>>) -> Result<Value> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Scripted::Failure("no scripted response".to_string()))
            .into_result()
    }
}

impl StatsSource for StubSource {
    fn fetch_summary(&self) -> Result<Value> {
        Self::next(&self.summary)
    }

    fn fetch_list(&self) -> Result<Value> {
        Self::next(&self.list)
    }

    fn fetch_timeline(&self, territory: &str, days: u32) -> Result<Value> {
        self.timeline_requests
            .borrow_mut()
            .push((territory.to_string(), days));
        Self::next(&self.timeline)
    }
}

/// Records requested pauses instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    pub slept: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
    }
}
