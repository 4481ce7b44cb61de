use std::fs;

use accel_travel_calculator::export::{profile, report};
use accel_travel_calculator::flight::sample_profile;
use accel_travel_calculator::{FlightRequest, plan};
use tempfile::tempdir;

#[test]
fn json_report_carries_inputs_results_and_text() {
    let flight = plan(&FlightRequest::default()).unwrap();
    let mut buffer = Vec::new();
    report::write_json(&mut buffer, &flight).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["engine"]["name"], "LOX/LH2");
    assert_eq!(value["engine"]["exhaust_velocity_m_s"], 4_400.0);
    assert_eq!(value["parameters"]["dry_mass_kg"], 1_000.0);
    assert_eq!(value["result"]["fuel_mass_kg"]["exponent"], 211);
    assert_eq!(
        value["travel_time_text"],
        "1 day, 5 hours, 20 minutes, 3.03 seconds"
    );
    assert!(value.get("name").is_none());
}

#[test]
fn json_file_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/out/report.json");
    let flight = plan(&FlightRequest::default()).unwrap();
    report::write_json_file(&path, &flight).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"travel_time_s\""));
    assert!(contents.ends_with('\n'));
}

#[test]
fn profile_csv_has_header_and_one_row_per_sample() {
    let flight = plan(&FlightRequest::default()).unwrap();
    let samples = sample_profile(&flight.parameters, &flight.result, 8).unwrap();
    let mut buffer = Vec::new();
    profile::write_csv(&mut buffer, &samples).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "time_s,distance_m,velocity_m_s,mass_kg");
    assert_eq!(lines.len(), samples.len() + 1);
    assert!(lines[1].starts_with("0.0,0.0,0.0,2.933143059e211"));
    assert!(lines.last().unwrap().ends_with(",1.000000000e3"));
}

#[test]
fn empty_profile_still_writes_header() {
    let mut buffer = Vec::new();
    profile::write_csv(&mut buffer, &[]).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap().trim_end(),
        profile::HEADER.join(",")
    );
}
