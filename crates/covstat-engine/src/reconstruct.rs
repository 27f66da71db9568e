use covstat_types::{Subject, Timeline, TimelineEntry, TimelineSeries, derive_active};
use indexmap::IndexSet;

/// Merge the three sparse series into one timeline.
///
/// Dates appear in first-seen order while scanning cases, then deaths, then
/// recovered. The result is neither filtered nor re-sorted, so a source that
/// lists dates out of calendar order yields an out-of-order timeline.
pub fn reconstruct(territory: &str, series: &TimelineSeries) -> Timeline {
    let dates: IndexSet<&str> = series
        .cases
        .keys()
        .chain(series.deaths.keys())
        .chain(series.recovered.keys())
        .map(String::as_str)
        .collect();

    let mut entries: Vec<TimelineEntry> = dates
        .into_iter()
        .map(|date| {
            let cases = series.cases.get(date).copied();
            let deaths = series.deaths.get(date).copied();
            let recovered = series.recovered.get(date).copied();

            TimelineEntry {
                date: date.to_string(),
                cases,
                deaths,
                recovered,
                active: derive_active(cases, deaths, recovered),
                ..TimelineEntry::default()
            }
        })
        .collect();

    for index in 1..entries.len() {
        let (before, after) = entries.split_at_mut(index);
        let previous = &before[index - 1];
        let current = &mut after[0];

        for subject in Subject::ALL {
            let increase = relative_increase(previous.value(subject), current.value(subject));
            current.set_increase(subject, increase);
        }
    }

    Timeline::new(territory, entries)
}

/// `(current - previous) / previous`, or `None` when either side is missing,
/// the previous value is zero, or nothing changed. An unchanged value is
/// `None` rather than `Some(0.0)`.
pub fn relative_increase(previous: Option<f64>, current: Option<f64>) -> Option<f64> {
    let (previous, current) = (previous?, current?);

    if previous == 0.0 || current == previous {
        return None;
    }

    Some((current - previous) / previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_increase() {
        assert_eq!(relative_increase(Some(100.0), Some(150.0)), Some(0.5));
        assert_eq!(relative_increase(Some(200.0), Some(150.0)), Some(-0.25));
    }

    #[test]
    fn test_relative_increase_from_zero_is_none() {
        assert_eq!(relative_increase(Some(0.0), Some(150.0)), None);
        assert_eq!(relative_increase(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn test_relative_increase_without_change_is_none() {
        assert_eq!(relative_increase(Some(100.0), Some(100.0)), None);
    }

    #[test]
    fn test_relative_increase_with_missing_side_is_none() {
        assert_eq!(relative_increase(None, Some(100.0)), None);
        assert_eq!(relative_increase(Some(100.0), None), None);
    }

    #[test]
    fn test_empty_series_yield_empty_timeline() {
        let timeline = reconstruct("all", &TimelineSeries::default());
        assert!(timeline.is_empty());
        assert_eq!(timeline.territory(), "all");
    }
}
