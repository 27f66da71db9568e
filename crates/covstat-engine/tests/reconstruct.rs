use covstat_engine::reconstruct;
use covstat_types::{Subject, TimelineSeries};
use indexmap::IndexMap;

fn series(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
    pairs
        .iter()
        .map(|(date, value)| (date.to_string(), *value))
        .collect()
}

fn dates(timeline: &covstat_types::Timeline) -> Vec<&str> {
    timeline
        .entries()
        .iter()
        .map(|entry| entry.date.as_str())
        .collect()
}

#[test]
fn test_sparse_series_merge_per_date() {
    let input = TimelineSeries {
        cases: series(&[("1/1", 10.0), ("1/2", 12.0)]),
        deaths: series(&[("1/1", 1.0)]),
        recovered: series(&[]),
    };

    let timeline = reconstruct("X", &input);
    assert_eq!(timeline.len(), 2);

    let first = &timeline.entries()[0];
    assert_eq!(first.date, "1/1");
    assert_eq!(first.cases, Some(10.0));
    assert_eq!(first.deaths, Some(1.0));
    assert_eq!(first.recovered, None);
    assert_eq!(first.active, None);

    let second = &timeline.entries()[1];
    assert_eq!(second.date, "1/2");
    assert_eq!(second.cases, Some(12.0));
    assert_eq!(second.deaths, None);
    assert_eq!(second.recovered, None);
    assert_eq!(second.active, None);
}

#[test]
fn test_active_and_growth_rates() {
    let input = TimelineSeries {
        cases: series(&[("1/1", 100.0), ("1/2", 150.0), ("1/3", 150.0)]),
        deaths: series(&[("1/1", 10.0), ("1/2", 10.0), ("1/3", 20.0)]),
        recovered: series(&[("1/1", 0.0), ("1/2", 40.0), ("1/3", 60.0)]),
    };

    let timeline = reconstruct("X", &input);
    let entries = timeline.entries();

    assert_eq!(entries[0].active, Some(90.0));
    assert_eq!(entries[1].active, Some(100.0));
    assert_eq!(entries[2].active, Some(70.0));

    // First entry has nothing to compare against
    for subject in Subject::ALL {
        assert_eq!(entries[0].increase(subject), None);
    }

    assert_eq!(entries[1].cases_increase, Some(0.5));
    // Unchanged value: None, not 0%
    assert_eq!(entries[1].deaths_increase, None);
    // Previous value of zero
    assert_eq!(entries[1].recovered_increase, None);

    assert_eq!(entries[2].cases_increase, None);
    assert_eq!(entries[2].deaths_increase, Some(1.0));
    assert_eq!(entries[2].recovered_increase, Some(0.5));
    assert_eq!(entries[2].active_increase, Some(-0.3));
}

#[test]
fn test_dates_follow_first_seen_order_across_series() {
    let input = TimelineSeries {
        cases: series(&[("1/2", 5.0), ("1/3", 6.0)]),
        deaths: series(&[("1/1", 1.0), ("1/3", 1.0)]),
        recovered: series(&[("1/4", 2.0)]),
    };

    let timeline = reconstruct("X", &input);
    assert_eq!(dates(&timeline), vec!["1/2", "1/3", "1/1", "1/4"]);
}

#[test]
fn test_growth_is_measured_against_preceding_entry_in_reconstructed_order() {
    let input = TimelineSeries {
        cases: series(&[("1/1", 100.0)]),
        deaths: series(&[("1/2", 4.0)]),
        recovered: series(&[]),
    };

    let timeline = reconstruct("X", &input);
    let entries = timeline.entries();

    // 1/2 has no cases entry, so there is no cases growth to report
    assert_eq!(entries[1].cases, None);
    assert_eq!(entries[1].cases_increase, None);
}

#[test]
fn test_decoded_payload_reconstructs() {
    let value = serde_json::json!({
        "country": "Iceland",
        "timeline": {
            "cases": { "3/1/20": 1, "3/2/20": 3 },
            "deaths": { "3/1/20": 0, "3/2/20": 0 },
            "recovered": { "3/1/20": 0, "3/2/20": 1 }
        }
    });

    let input = TimelineSeries::decode(&value).unwrap();
    let timeline = reconstruct("Iceland", &input);

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.entries()[1].cases_increase, Some(2.0));
    assert_eq!(timeline.entries()[1].active, Some(2.0));
    assert_eq!(timeline.entries()[1].active_increase, Some(1.0));
}
