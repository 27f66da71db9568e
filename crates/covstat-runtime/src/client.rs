use crate::source::{HttpSource, StatsSource};
use crate::{Config, Result};
use covstat_types::{ListEntry, Summary, Timeline, TimelineSeries};
use tracing::debug;

/// Fetches payloads from a [`StatsSource`] and decodes them into entities
pub struct StatsClient<S = HttpSource> {
    source: S,
}

impl StatsClient<HttpSource> {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpSource::new(config)?))
    }
}

impl<S: StatsSource> StatsClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn summary(&self) -> Result<Summary> {
        let payload = self.source.fetch_summary()?;
        Ok(Summary::decode(&payload)?)
    }

    pub fn list(&self) -> Result<Vec<ListEntry>> {
        let payload = self.source.fetch_list()?;
        let entries = ListEntry::decode_list(&payload)?;
        debug!(territories = entries.len(), "decoded territory list");
        Ok(entries)
    }

    pub fn timeline(&self, territory: &str, days: u32) -> Result<Timeline> {
        let payload = self.source.fetch_timeline(territory, days)?;
        let series = TimelineSeries::decode(&payload)?;
        Ok(covstat_engine::reconstruct(territory, &series))
    }
}
