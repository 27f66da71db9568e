use crate::error::Result;
use crate::record::Record;
use serde_json::Value;

/// Global snapshot as reported by the summary endpoint. Every count is a
/// non-negative whole number; anything else fails to decode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub cases: f64,
    pub deaths: f64,
    pub recovered: f64,
    pub affected_territories: f64,
}

impl Summary {
    pub fn decode(value: &Value) -> Result<Self> {
        let record = Record::from_value(value)?;

        Ok(Self {
            cases: record.required_count("cases")?,
            deaths: record.required_count("deaths")?,
            recovered: record.required_count("recovered")?,
            affected_territories: record.required_count("affectedCountries")?,
        })
    }

    pub fn active(&self) -> f64 {
        self.cases - self.deaths - self.recovered
    }
}
