use super::METRIC_WIDTH;
use crate::presentation::formatters::NumberFormatter;
use crate::presentation::{Color, Column, Table};
use covstat_types::Summary;

pub fn table() -> Table {
    Table::new(vec![
        Column::new("CASES", METRIC_WIDTH, Color::Yellow),
        Column::new("DEATHS", METRIC_WIDTH, Color::Red),
        Column::new("RECOVERED", METRIC_WIDTH, Color::Green),
        Column::new("ACTIVE", METRIC_WIDTH, Color::Blue),
        Column::new("TERRITORIES", METRIC_WIDTH, Color::Default),
    ])
}

pub fn row(summary: &Summary) -> Vec<String> {
    let count = NumberFormatter::COUNT;
    vec![
        count.format(summary.cases),
        count.format(summary.deaths),
        count.format(summary.recovered),
        count.format(summary.active()),
        count.format(summary.affected_territories),
    ]
}
