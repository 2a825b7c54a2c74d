use std::fs;

use bedwatch_core::{filter_dataset, occupancy_status, FilterCriteria, OccupancyStatus};
use bedwatch_feed::parse_feed_str;
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn district_feed_matches_golden() {
    let feed = fs::read_to_string(fixture_path("district_feed.json"))
        .expect("could not read sample feed");

    let records = parse_feed_str(&feed).expect("could not parse feed");
    let actual = serde_json::to_value(&records).expect("could not serialize records");

    let expected = fs::read_to_string(fixture_path("district_records.json"))
        .expect("could not read golden records");
    let expected: Value = serde_json::from_str(&expected).expect("golden file is not valid JSON");

    assert_eq!(actual, expected);
}

#[test]
fn parsed_feed_flows_through_filtering() {
    let feed = fs::read_to_string(fixture_path("district_feed.json"))
        .expect("could not read sample feed");
    let records = parse_feed_str(&feed).expect("could not parse feed");

    let filtered = filter_dataset(&records, &FilterCriteria::default(), "erandwane");
    assert_eq!(filtered.len(), 1);
    // Zero capacity classifies as full.
    assert_eq!(occupancy_status(&filtered[0]), OccupancyStatus::Full);
}
