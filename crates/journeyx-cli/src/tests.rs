//! CLI command tests
//!
//! This module contains all tests for the CLI commands and bundled data.

use std::io::Write;

use journeyx_core::{FactModel, InsightEngine, TransportMode, WeatherFact};

use crate::commands;
use crate::data;

fn write_conditions_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

// ========== Bundled Data Tests ==========

#[test]
fn test_bundled_city_readings_validate() {
    for city in data::CITIES {
        let fact = WeatherFact::from_reading(&city.reading());
        assert!(fact.is_ok(), "Reading for {} should validate", city.city);
        assert!(!city.tags.is_empty());
    }
}

#[test]
fn test_find_city_is_case_insensitive() {
    assert!(data::find_city("paris").is_some());
    assert!(data::find_city("NEW YORK").is_some());
    assert!(data::find_city("Atlantis").is_none());
}

#[test]
fn test_journey_options_validate() {
    let options = data::journey_options();
    assert_eq!(options.len(), 3);
    for option in &options {
        assert!(option.validate().is_ok());
    }
}

#[test]
fn test_new_york_fixture_routes_to_train() {
    let city = data::find_city("New York").unwrap();
    let facts = FactModel::builder()
        .weather(&city.reading())
        .transport(&data::journey_options())
        .build();
    let evaluation = InsightEngine::new().evaluate(&facts);

    // Rainy fixture day: the reliability pick wins
    let rec = evaluation.recommendation.unwrap();
    assert_eq!(rec.picked_mode, TransportMode::Train);
    assert_eq!(rec.headline, "Train is more reliable today");
}

#[test]
fn test_cairo_fixture_triggers_heat_advisory() {
    let city = data::find_city("Cairo").unwrap();
    let facts = FactModel::builder()
        .weather(&city.reading())
        .content(&city.tags(), &city.label())
        .build();
    let evaluation = InsightEngine::new().evaluate(&facts);

    assert!(evaluation
        .insights
        .iter()
        .any(|i| i.title == "High heat advisory"));
}

// ========== Assistant Command Tests ==========

#[test]
fn test_cmd_assistant_with_bundled_city() {
    assert!(commands::cmd_assistant("Paris", &[], false).is_ok());
    assert!(commands::cmd_assistant("Sydney", &[], true).is_ok());
}

#[test]
fn test_cmd_assistant_with_extra_tags() {
    let tags = vec!["MountainTrail".to_string()];
    assert!(commands::cmd_assistant("Tokyo", &tags, false).is_ok());
}

#[test]
fn test_cmd_assistant_unknown_city_fails() {
    let result = commands::cmd_assistant("Atlantis", &[], false);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Unknown city"));
}

#[test]
fn test_cmd_cities() {
    assert!(commands::cmd_cities().is_ok());
}

// ========== Transport Command Tests ==========

#[test]
fn test_cmd_transport_renders_pick() {
    assert!(commands::cmd_transport("New York", "Boston", "New York", false).is_ok());
    assert!(commands::cmd_transport("New York", "Boston", "Sydney", true).is_ok());
}

#[test]
fn test_cmd_transport_unknown_city_fails() {
    assert!(commands::cmd_transport("A", "B", "Atlantis", false).is_err());
}

// ========== Safety Command Tests ==========

#[test]
fn test_cmd_safety() {
    assert!(commands::cmd_safety(false).is_ok());
    assert!(commands::cmd_safety(true).is_ok());
}

// ========== Evaluate Command Tests ==========

#[test]
fn test_cmd_evaluate_reads_conditions_file() {
    let file = write_conditions_file(
        r#"{
            "weather": {"temperature": 18.0, "condition": "Rainy", "wind_speed": 15.0, "humidity": 80.0},
            "tags": ["CityBreak"],
            "location": "New York, USA",
            "transport": [
                {"mode": "train", "price_amount": 180.0, "duration_minutes": 345}
            ]
        }"#,
    );

    assert!(commands::cmd_evaluate(file.path(), false).is_ok());
    assert!(commands::cmd_evaluate(file.path(), true).is_ok());
}

#[test]
fn test_cmd_evaluate_accepts_partial_documents() {
    let file = write_conditions_file(r#"{"tags": ["BeachParadise"]}"#);
    assert!(commands::cmd_evaluate(file.path(), false).is_ok());
}

#[test]
fn test_cmd_evaluate_rejects_malformed_file() {
    let file = write_conditions_file("{not json");
    let result = commands::cmd_evaluate(file.path(), false);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid conditions document"));
}

#[test]
fn test_cmd_evaluate_missing_file_fails() {
    let result = commands::cmd_evaluate(std::path::Path::new("/nonexistent/trip.json"), false);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to read conditions file"));
}
