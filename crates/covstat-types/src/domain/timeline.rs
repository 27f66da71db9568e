use crate::error::Result;
use crate::record::Record;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Which metric a single-column timeline view renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Cases,
    Deaths,
    Recovered,
    Active,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Cases,
        Subject::Deaths,
        Subject::Recovered,
        Subject::Active,
    ];
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Cases => write!(f, "cases"),
            Subject::Deaths => write!(f, "deaths"),
            Subject::Recovered => write!(f, "recovered"),
            Subject::Active => write!(f, "active"),
        }
    }
}

/// The three raw date -> value series of the historical endpoint.
/// Each series may cover a different set of dates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineSeries {
    pub cases: IndexMap<String, f64>,
    pub deaths: IndexMap<String, f64>,
    pub recovered: IndexMap<String, f64>,
}

impl TimelineSeries {
    /// Territory histories nest the series under `timeline`; the global
    /// history carries them at the root.
    pub fn decode(value: &Value) -> Result<Self> {
        let root = Record::from_value(value)?;
        let record = if root.contains("timeline") {
            root.nested("timeline")?
        } else {
            root
        };

        Ok(Self {
            cases: record.number_series("cases")?,
            deaths: record.number_series("deaths")?,
            recovered: record.number_series("recovered")?,
        })
    }
}

/// Aggregate state of one calendar date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineEntry {
    pub date: String,
    pub cases: Option<f64>,
    pub deaths: Option<f64>,
    pub recovered: Option<f64>,
    pub active: Option<f64>,
    pub cases_increase: Option<f64>,
    pub deaths_increase: Option<f64>,
    pub recovered_increase: Option<f64>,
    pub active_increase: Option<f64>,
}

impl TimelineEntry {
    pub fn value(&self, subject: Subject) -> Option<f64> {
        match subject {
            Subject::Cases => self.cases,
            Subject::Deaths => self.deaths,
            Subject::Recovered => self.recovered,
            Subject::Active => self.active,
        }
    }

    /// Relative change against the preceding entry (0.05 = +5%)
    pub fn increase(&self, subject: Subject) -> Option<f64> {
        match subject {
            Subject::Cases => self.cases_increase,
            Subject::Deaths => self.deaths_increase,
            Subject::Recovered => self.recovered_increase,
            Subject::Active => self.active_increase,
        }
    }

    pub fn set_increase(&mut self, subject: Subject, increase: Option<f64>) {
        let slot = match subject {
            Subject::Cases => &mut self.cases_increase,
            Subject::Deaths => &mut self.deaths_increase,
            Subject::Recovered => &mut self.recovered_increase,
            Subject::Active => &mut self.active_increase,
        };
        *slot = increase;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    territory: String,
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new(territory: impl Into<String>, entries: Vec<TimelineEntry>) -> Self {
        Self {
            territory: territory.into(),
            entries,
        }
    }

    pub fn territory(&self) -> &str {
        &self.territory
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values of `subject` in entry order, `None` where a date lacks it
    pub fn subject_values(
        &self,
        subject: Subject,
    ) -> impl Iterator<Item = Option<f64>> + '_ {
        self.entries.iter().map(move |entry| entry.value(subject))
    }

    /// Largest present value of `subject`, used to scale bar graphs
    pub fn max_value(&self, subject: Subject) -> Option<f64> {
        self.subject_values(subject).flatten().reduce(f64::max)
    }
}
