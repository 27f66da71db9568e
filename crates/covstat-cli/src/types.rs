use clap::ValueEnum;
use covstat_engine::SortKey;
use covstat_types::Subject;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => write!(f, "auto"),
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Cases,
    CasesToday,
    Deaths,
    DeathsToday,
    Recovered,
    RecoveredToday,
    Active,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Cases => SortKey::Cases,
            SortField::CasesToday => SortKey::CasesToday,
            SortField::Deaths => SortKey::Deaths,
            SortField::DeathsToday => SortKey::DeathsToday,
            SortField::Recovered => SortKey::Recovered,
            SortField::RecoveredToday => SortKey::RecoveredToday,
            SortField::Active => SortKey::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SubjectField {
    Cases,
    Deaths,
    Recovered,
    Active,
}

impl From<SubjectField> for Subject {
    fn from(field: SubjectField) -> Self {
        match field {
            SubjectField::Cases => Subject::Cases,
            SubjectField::Deaths => Subject::Deaths,
            SubjectField::Recovered => Subject::Recovered,
            SubjectField::Active => Subject::Active,
        }
    }
}
