use crate::{Config, Error, Result};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Where raw payloads come from. Implementations only transport and parse
/// JSON; validating the shape is left to the decoders.
pub trait StatsSource {
    fn fetch_summary(&self) -> Result<Value>;

    fn fetch_list(&self) -> Result<Value>;

    fn fetch_timeline(&self, territory: &str, days: u32) -> Result<Value>;
}

/// Blocking HTTP source for the public statistics API
pub struct HttpSource {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("covstat/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let started = Instant::now();

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("{} returned {}", url, status)));
        }

        let value = response.json::<Value>()?;
        debug!(
            url = %url,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched payload"
        );
        Ok(value)
    }
}

impl StatsSource for HttpSource {
    fn fetch_summary(&self) -> Result<Value> {
        self.get("all")
    }

    fn fetch_list(&self) -> Result<Value> {
        self.get("countries")
    }

    fn fetch_timeline(&self, territory: &str, days: u32) -> Result<Value> {
        self.get(&timeline_path(territory, days))
    }
}

fn timeline_path(territory: &str, days: u32) -> String {
    format!(
        "historical/{}?lastdays={}",
        urlencoding::encode(territory),
        days
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_path_encodes_territory() {
        assert_eq!(
            timeline_path("United States", 30),
            "historical/United%20States?lastdays=30"
        );
        assert_eq!(timeline_path("all", 7), "historical/all?lastdays=7");
    }

    #[test]
    fn test_base_url_drops_trailing_slash() -> Result<()> {
        let config = Config {
            api_url: "http://localhost:9000/v3/covid-19/".to_string(),
            ..Config::default()
        };

        let source = HttpSource::new(&config)?;
        assert_eq!(source.base_url, "http://localhost:9000/v3/covid-19");
        Ok(())
    }
}
