use super::METRIC_WIDTH;
use crate::presentation::formatters::NumberFormatter;
use crate::presentation::formatters::bar::render_bar;
use crate::presentation::{Color, Column, Table};
use covstat_types::{Subject, Timeline, TimelineEntry};

const DATE_WIDTH: usize = 12;
const PERCENT_WIDTH: usize = 9;
pub const BAR_WIDTH: usize = 40;

fn color(subject: Subject) -> Color {
    match subject {
        Subject::Cases => Color::Yellow,
        Subject::Deaths => Color::Red,
        Subject::Recovered => Color::Green,
        Subject::Active => Color::Blue,
    }
}

fn header(subject: Subject) -> &'static str {
    match subject {
        Subject::Cases => "CASES",
        Subject::Deaths => "DEATHS",
        Subject::Recovered => "RECOVERED",
        Subject::Active => "ACTIVE",
    }
}

fn percent_header(subject: Subject) -> &'static str {
    match subject {
        Subject::Cases => "CASE +%",
        Subject::Deaths => "DTH +%",
        Subject::Recovered => "REC +%",
        Subject::Active => "ACT +%",
    }
}

/// Every subject with its growth column
pub fn table() -> Table {
    let mut columns = vec![Column::new("DATE", DATE_WIDTH, Color::Default)];
    for subject in Subject::ALL {
        columns.push(Column::new(header(subject), METRIC_WIDTH, color(subject)));
        columns.push(Column::new(
            percent_header(subject),
            PERCENT_WIDTH,
            color(subject),
        ));
    }
    Table::new(columns)
}

pub fn row(entry: &TimelineEntry) -> Vec<String> {
    let mut cells = vec![entry.date.clone()];
    for subject in Subject::ALL {
        cells.push(NumberFormatter::COUNT.format_optional(entry.value(subject)));
        cells.push(NumberFormatter::PERCENT.format_percent(entry.increase(subject)));
    }
    cells
}

/// One subject with a bar graph scaled to the timeline's largest value
pub fn subject_table(subject: Subject) -> Table {
    Table::new(vec![
        Column::new("DATE", DATE_WIDTH, Color::Default),
        Column::new(header(subject), METRIC_WIDTH, color(subject)),
        Column::new("+%", PERCENT_WIDTH, color(subject)),
        Column::new("TREND", BAR_WIDTH + 1, color(subject)),
    ])
}

pub fn subject_rows(timeline: &Timeline, subject: Subject) -> Vec<Vec<String>> {
    let max = timeline.max_value(subject);

    timeline
        .entries()
        .iter()
        .zip(timeline.subject_values(subject))
        .map(|(entry, value)| {
            vec![
                entry.date.clone(),
                NumberFormatter::COUNT.format_optional(value),
                NumberFormatter::PERCENT.format_percent(entry.increase(subject)),
                render_bar(value, max, BAR_WIDTH),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_table() {
        let entry = TimelineEntry {
            date: "3/1/20".to_string(),
            cases: Some(150.0),
            cases_increase: Some(0.5),
            ..TimelineEntry::default()
        };

        let cells = row(&entry);
        assert_eq!(cells.len(), table().columns().len());
        assert_eq!(&cells[..3], &["3/1/20", "150", "+50%"]);
        assert_eq!(cells[3], "-");
    }

    #[test]
    fn test_subject_rows_fill_bar_for_maximum() {
        let timeline = Timeline::new(
            "X",
            vec![
                TimelineEntry {
                    date: "a".to_string(),
                    deaths: Some(5.0),
                    ..TimelineEntry::default()
                },
                TimelineEntry {
                    date: "b".to_string(),
                    deaths: Some(10.0),
                    deaths_increase: Some(1.0),
                    ..TimelineEntry::default()
                },
            ],
        );

        let rows = subject_rows(&timeline, Subject::Deaths);
        assert_eq!(rows[0][3].chars().count(), BAR_WIDTH / 2);
        assert_eq!(rows[1][2], "+100%");
        assert_eq!(rows[1][3].chars().count(), BAR_WIDTH);
        assert_eq!(rows[1].len(), subject_table(Subject::Deaths).columns().len());
    }
}
