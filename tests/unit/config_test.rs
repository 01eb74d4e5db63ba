//! Unit tests for config module

use igw::config::{ExtractionConfig, OutputFormat};
use igw::Config;

use crate::helpers::temp_config;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.extraction.top_n, 3);
    assert_eq!(config.extraction.max_response_gap_secs, 86_400);
    assert_eq!(config.extraction.min_topic_len, 3);
    assert_eq!(config.extraction.max_topic_len, 99);
    assert_eq!(config.extraction.min_timestamp_year, 2001);
    assert_eq!(config.output.format, OutputFormat::Pretty);
    assert_eq!(config.output.max_name_width, 24);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.extraction.top_n, config.extraction.top_n);
    assert_eq!(parsed.output.format, config.output.format);
}

#[test]
fn partial_sections_fill_in_defaults() {
    let toml_str = r#"
[extraction]
top_n = 2

[output]
format = "json"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.extraction.top_n, 2);
    assert_eq!(config.extraction.max_topic_len, 99);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.max_name_width, 24);
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config.extraction.top_n, 3);
}

#[test]
fn load_from_reads_file() {
    let (_dir, path) = temp_config("[extraction]\nmax_response_gap_secs = 3600\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.extraction.max_response_gap_secs, 3600);
}

#[test]
fn load_from_rejects_invalid_values() {
    let (_dir, path) = temp_config("[extraction]\nmin_topic_len = 50\nmax_topic_len = 10\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("min_topic_len"));
}

#[test]
fn load_from_rejects_rankings_longer_than_three() {
    let (_dir, path) = temp_config("[extraction]\ntop_n = 4\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("extraction.top_n 4"));
}

#[test]
fn load_from_rejects_reply_gaps_over_a_day() {
    let (_dir, path) = temp_config("[extraction]\nmax_response_gap_secs = 604800\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("max_response_gap_secs"));
}

#[test]
fn load_from_rejects_timestamp_years_before_2001() {
    let (_dir, path) = temp_config("[extraction]\nmin_timestamp_year = 1999\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("min_timestamp_year"));
}

#[test]
fn bounds_are_inclusive() {
    let config = ExtractionConfig {
        top_n: 3,
        max_response_gap_secs: 86_400,
        min_timestamp_year: 2001,
        ..ExtractionConfig::default()
    };
    assert!(config.validate().is_ok());
    let config = ExtractionConfig {
        top_n: 1,
        max_response_gap_secs: 60,
        min_timestamp_year: 2015,
        ..ExtractionConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn load_from_rejects_malformed_toml() {
    let (_dir, path) = temp_config("[extraction\ntop_n = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn topic_length_check_counts_characters() {
    let config = ExtractionConfig::default();
    assert!(config.topic_len_ok("Art"));
    assert!(config.topic_len_ok("Café"));
    assert!(!config.topic_len_ok("AI"));
    assert!(!config.topic_len_ok(&"x".repeat(100)));
}
