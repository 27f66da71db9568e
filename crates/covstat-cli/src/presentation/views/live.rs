use super::{METRIC_WIDTH, TERRITORY_WIDTH};
use crate::presentation::formatters::NumberFormatter;
use crate::presentation::{Color, Column, Table};
use covstat_engine::LiveChange;

pub fn table() -> Table {
    Table::new(vec![
        Column::new("TIME", 8, Color::Default),
        Column::new("TERRITORY", TERRITORY_WIDTH, Color::Default),
        Column::new("CASE NEW", METRIC_WIDTH, Color::Yellow),
        Column::new("CASE ALL", METRIC_WIDTH, Color::Yellow),
        Column::new("CASE DAY", METRIC_WIDTH, Color::Yellow),
        Column::new("DTH NEW", METRIC_WIDTH, Color::Red),
        Column::new("DTH ALL", METRIC_WIDTH, Color::Red),
        Column::new("DTH DAY", METRIC_WIDTH, Color::Red),
        Column::new("REC NEW", METRIC_WIDTH, Color::Green),
        Column::new("REC ALL", METRIC_WIDTH, Color::Green),
        Column::new("REC DAY", METRIC_WIDTH, Color::Green),
        Column::new("ACTIVE", METRIC_WIDTH, Color::Blue),
    ])
}

/// One stream row: deltas are signed and left blank when zero
pub fn row(time: &str, change: &LiveChange) -> Vec<String> {
    let count = NumberFormatter::COUNT;
    let entry = &change.entry;
    let difference = &change.difference;

    vec![
        time.to_string(),
        entry.territory.clone(),
        delta(difference.cases),
        count.format_optional(entry.cases),
        count.format_optional(entry.cases_today),
        delta(difference.deaths),
        count.format_optional(entry.deaths),
        count.format_optional(entry.deaths_today),
        delta(difference.recovered),
        count.format_optional(entry.recovered),
        count.format_optional(entry.recovered_today),
        count.format_optional(entry.active),
    ]
}

fn delta(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        NumberFormatter::DELTA.format(value)
    }
}
