//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and validation.

use rstest::rstest;
use std::path::PathBuf;
use tbsim_core::HarnessError;
use tbsim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.clock.period, 10);
    assert_eq!(config.clock.reset_cycles, 5);
    assert_eq!(config.run.max_sim_time, 1000);
    assert!(config.trace.enabled);
    assert_eq!(config.trace.path, PathBuf::from("waveform.vcd"));
    assert_eq!(config.trace.depth, 99);
}

#[test]
fn test_default_half_period() {
    assert_eq!(ClockConfig::default().half_period(), 5);
}

#[rstest]
#[case(10, 5)]
#[case(11, 5)]
#[case(2, 1)]
#[case(1, 0)]
fn test_half_period_rounds_down(#[case] period: u64, #[case] half: u64) {
    let clock = ClockConfig {
        period,
        ..ClockConfig::default()
    };
    assert_eq!(clock.half_period(), half);
}

#[test]
fn test_json_empty_document_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_json_partial_sections_keep_defaults() {
    let json = r#"{
        "clock": { "period": 4 },
        "trace": { "path": "out/run.vcd", "depth": 1 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.clock.period, 4);
    assert_eq!(config.clock.reset_cycles, 5);
    assert_eq!(config.run.max_sim_time, 1000);
    assert!(config.trace.enabled);
    assert_eq!(config.trace.path, PathBuf::from("out/run.vcd"));
    assert_eq!(config.trace.depth, 1);
}

#[test]
fn test_json_full_document() {
    let json = r#"{
        "clock": { "period": 20, "reset_cycles": 2 },
        "run": { "max_sim_time": 400 },
        "trace": { "enabled": false, "path": "x.vcd", "depth": 3 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.clock.period, 20);
    assert_eq!(config.clock.reset_cycles, 2);
    assert_eq!(config.run.max_sim_time, 400);
    assert!(!config.trace.enabled);
    assert_eq!(config.trace.depth, 3);
}

#[test]
fn test_json_malformed_is_config_error() {
    let err = Config::from_json(r#"{ "clock": { "period": "fast" } }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn test_validate_accepts_defaults() {
    Config::default().validate().unwrap();
}

#[rstest]
#[case(0)]
#[case(1)]
fn test_validate_rejects_zero_half_period(#[case] period: u64) {
    let mut config = Config::default();
    config.clock.period = period;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, HarnessError::Initialization(_)));
}

#[test]
fn test_validate_rejects_empty_trace_path() {
    let mut config = Config::default();
    config.trace.path = PathBuf::new();
    assert!(matches!(
        config.validate(),
        Err(HarnessError::Initialization(_))
    ));
}

#[test]
fn test_validate_ignores_path_when_tracing_disabled() {
    let mut config = Config::default();
    config.trace.enabled = false;
    config.trace.path = PathBuf::new();
    config.validate().unwrap();
}
