use super::derive_active;
use crate::error::{DecodingError, Result};
use crate::record::{Record, decode_array};
use serde_json::Value;

/// Per-territory snapshot from the list endpoint.
///
/// Metrics are optional because the source omits or mistypes them from time
/// to time. Absent metrics render as a placeholder and compare as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEntry {
    pub territory: String,
    pub cases: Option<f64>,
    pub cases_today: Option<f64>,
    pub deaths: Option<f64>,
    pub deaths_today: Option<f64>,
    pub recovered: Option<f64>,
    pub recovered_today: Option<f64>,
    pub active: Option<f64>,
}

impl ListEntry {
    pub fn new(territory: impl Into<String>) -> Self {
        Self {
            territory: territory.into(),
            ..Self::default()
        }
    }

    pub fn decode(value: &Value) -> Result<Self> {
        let record = Record::from_value(value)?;

        let territory = record.required_str("country")?;
        if territory.is_empty() {
            return Err(DecodingError::Empty {
                field: "country".to_string(),
            });
        }

        let cases = record.optional_number("cases");
        let deaths = record.optional_number("deaths");
        let recovered = record.optional_number("recovered");

        // The endpoint usually reports `active` itself; fall back to deriving it
        let active = record
            .optional_number("active")
            .or_else(|| derive_active(cases, deaths, recovered));

        Ok(Self {
            territory: territory.to_string(),
            cases,
            cases_today: record.optional_number("todayCases"),
            deaths,
            deaths_today: record.optional_number("todayDeaths"),
            recovered,
            recovered_today: record.optional_number("todayRecovered"),
            active,
        })
    }

    pub fn decode_list(value: &Value) -> Result<Vec<Self>> {
        decode_array(value, Self::decode)
    }
}

/// Signed change of the tracked metrics between two snapshots of one territory
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ListEntryDifference {
    pub cases: f64,
    pub deaths: f64,
    pub recovered: f64,
}

impl ListEntryDifference {
    pub fn between(old: &ListEntry, new: &ListEntry) -> Self {
        Self {
            cases: delta(old.cases, new.cases),
            deaths: delta(old.deaths, new.deaths),
            recovered: delta(old.recovered, new.recovered),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cases == 0.0 && self.deaths == 0.0 && self.recovered == 0.0
    }
}

// A missing operand forces a zero delta
fn delta(old: Option<f64>, new: Option<f64>) -> f64 {
    match (old, new) {
        (Some(old), Some(new)) => new - old,
        _ => 0.0,
    }
}
