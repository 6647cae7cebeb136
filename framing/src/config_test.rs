#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let cfg = FrameConfig::default();
    assert_eq!(cfg.scale_max, MAX_SCALE);
    assert_eq!(cfg.min_border, Dimensions::new(50.0, 50.0));
    assert_eq!(cfg.max_border, Dimensions::new(1000.0, 1000.0));
    assert_eq!(cfg.default_border, Dimensions::new(250.0, 250.0));
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_lookup_empty_uses_defaults() {
    let cfg = FrameConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, FrameConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = FrameConfig::from_lookup(lookup_from(&[
        ("PHOTOWALL_SCALE_MAX", "3"),
        ("PHOTOWALL_MIN_BORDER", "20x30"),
        ("PHOTOWALL_MAX_BORDER", " 800 "),
        ("PHOTOWALL_DEFAULT_BORDER", "300X200"),
        ("PHOTOWALL_MIN_ZOOM", "0.25"),
        ("PHOTOWALL_MAX_ZOOM", "4"),
        ("PHOTOWALL_ZOOM_STEP", "0.5"),
    ]))
    .unwrap();
    assert_eq!(cfg.scale_max, 3.0);
    assert_eq!(cfg.min_border, Dimensions::new(20.0, 30.0));
    assert_eq!(cfg.max_border, Dimensions::new(800.0, 800.0));
    assert_eq!(cfg.default_border, Dimensions::new(300.0, 200.0));
    assert_eq!(cfg.min_zoom, 0.25);
    assert_eq!(cfg.max_zoom, 4.0);
    assert_eq!(cfg.zoom_step, 0.5);
}

#[test]
fn from_lookup_rejects_garbage_number() {
    let err = FrameConfig::from_lookup(lookup_from(&[("PHOTOWALL_SCALE_MAX", "lots")])).unwrap_err();
    assert_eq!(err, ConfigError::Parse { var: "PHOTOWALL_SCALE_MAX", value: "lots".into() });
}

#[test]
fn from_lookup_rejects_garbage_size() {
    let err = FrameConfig::from_lookup(lookup_from(&[("PHOTOWALL_MIN_BORDER", "10xwide")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { var: "PHOTOWALL_MIN_BORDER", .. }));
}

#[test]
fn from_lookup_rejects_inverted_border_range() {
    let err = FrameConfig::from_lookup(lookup_from(&[("PHOTOWALL_MIN_BORDER", "2000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange { what: "border width", .. }));
}

#[test]
fn validate_rejects_non_positive_scale() {
    let cfg = FrameConfig { scale_max: 0.0, ..FrameConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { what: "scale_max", .. })));
}

#[test]
fn validate_rejects_nan_zoom_step() {
    let cfg = FrameConfig { zoom_step: f64::NAN, ..FrameConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::Parse { var: "PHOTOWALL_MAX_ZOOM", value: "x".into() };
    assert!(err.to_string().contains("PHOTOWALL_MAX_ZOOM"));
}

#[test]
fn clamp_border_limits_each_axis() {
    let cfg = FrameConfig::default();
    assert_eq!(cfg.clamp_border(Dimensions::new(10.0, 5000.0)), Dimensions::new(50.0, 1000.0));
    assert_eq!(cfg.clamp_border(Dimensions::new(100.0, 100.0)), Dimensions::new(100.0, 100.0));
}

#[test]
fn parse_size_accepts_both_forms() {
    assert_eq!(parse_size("120x80").unwrap(), Dimensions::new(120.0, 80.0));
    assert_eq!(parse_size("64").unwrap(), Dimensions::new(64.0, 64.0));
    assert!(parse_size("").is_err());
}

#[test]
fn env_value_distinguishes_unset_from_unreadable() {
    assert_eq!(env_value("PHOTOWALL_SCALE_MAX", Ok("3".into())), Ok(Some("3".to_string())));
    assert_eq!(env_value("PHOTOWALL_SCALE_MAX", Err(VarError::NotPresent)), Ok(None));

    let err = env_value("PHOTOWALL_MIN_BORDER", Err(VarError::NotUnicode("64".into()))).unwrap_err();
    assert_eq!(err, ConfigError::Parse { var: "PHOTOWALL_MIN_BORDER", value: "64".into() });
}

#[test]
fn every_env_var_is_read() {
    for var in ENV_VARS {
        let err = FrameConfig::from_lookup(lookup_from(&[(var, "garbage")])).unwrap_err();
        assert_eq!(err, ConfigError::Parse { var, value: "garbage".into() });
    }
}

