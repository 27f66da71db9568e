use super::{METRIC_WIDTH, TERRITORY_WIDTH};
use crate::presentation::formatters::NumberFormatter;
use crate::presentation::{Color, Column, Table};
use covstat_types::ListEntry;

pub fn table() -> Table {
    Table::new(vec![
        Column::new("TERRITORY", TERRITORY_WIDTH, Color::Default),
        Column::new("CASE ALL", METRIC_WIDTH, Color::Yellow),
        Column::new("CASE DAY", METRIC_WIDTH, Color::Yellow),
        Column::new("DTH ALL", METRIC_WIDTH, Color::Red),
        Column::new("DTH DAY", METRIC_WIDTH, Color::Red),
        Column::new("REC ALL", METRIC_WIDTH, Color::Green),
        Column::new("REC DAY", METRIC_WIDTH, Color::Green),
        Column::new("ACTIVE", METRIC_WIDTH, Color::Blue),
    ])
}

pub fn row(entry: &ListEntry) -> Vec<String> {
    let count = NumberFormatter::COUNT;
    vec![
        entry.territory.clone(),
        count.format_optional(entry.cases),
        count.format_optional(entry.cases_today),
        count.format_optional(entry.deaths),
        count.format_optional(entry.deaths_today),
        count.format_optional(entry.recovered),
        count.format_optional(entry.recovered_today),
        count.format_optional(entry.active),
    ]
}
