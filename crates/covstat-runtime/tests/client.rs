use covstat_runtime::{Error, StatsClient};
use covstat_testing::StubSource;
use covstat_testing::fixtures::{list_payload, summary_payload, territory, timeline_payload};
use serde_json::json;

#[test]
fn test_summary_decodes_payload() {
    let client = StatsClient::new(StubSource::new().with_summary(summary_payload(100, 5, 60, 3)));

    let summary = client.summary().expect("summary");
    assert_eq!(summary.cases, 100.0);
    assert_eq!(summary.active(), 35.0);
    assert_eq!(summary.affected_territories, 3.0);
}

#[test]
fn test_malformed_summary_is_decoding_error() {
    let client = StatsClient::new(StubSource::new().with_summary(json!({ "cases": "100" })));

    assert!(matches!(client.summary(), Err(Error::Decoding(_))));
}

#[test]
fn test_failed_fetch_is_transport_error() {
    let client = StatsClient::new(StubSource::new().with_list_failure("503 Service Unavailable"));

    let error = client.list().unwrap_err();
    assert!(matches!(error, Error::Transport(_)));
}

#[test]
fn test_list_keeps_fetch_order() {
    let client = StatsClient::new(StubSource::new().with_list(list_payload(vec![
        territory("Peru", 10, 1, 2),
        territory("Chad", 30, 2, 20),
    ])));

    let entries = client.list().expect("list");
    let names: Vec<&str> = entries.iter().map(|e| e.territory.as_str()).collect();
    assert_eq!(names, vec!["Peru", "Chad"]);
}

#[test]
fn test_timeline_reconstructs_requested_territory() {
    let source = StubSource::new().with_timeline(timeline_payload(
        "Norway",
        &[("1/1/21", 10), ("1/2/21", 12)],
        &[("1/1/21", 1)],
        &[],
    ));
    let client = StatsClient::new(source);

    let timeline = client.timeline("Norway", 2).expect("timeline");
    assert_eq!(timeline.territory(), "Norway");
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.entries()[1].active, None);
    assert_eq!(
        client.source().timeline_requests(),
        vec![("Norway".to_string(), 2)]
    );
}
