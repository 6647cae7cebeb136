#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_4;

use super::*;

const EPSILON: f64 = 1e-6;

fn request(border: f64, rotation: f64) -> FitRequest {
    FitRequest {
        border: Dimensions::new(border, border),
        original: Dimensions::new(600.0, 400.0),
        rotation,
        offset: None,
        scale: None,
    }
}

#[test]
fn defaults_to_centred_min_cover() {
    let report = fit_report(&request(200.0, 0.0));
    assert_eq!(report.scale, 0.5);
    assert_eq!(report.width, 300.0);
    assert_eq!(report.height, 200.0);
    assert_eq!(report.x_offset, -50.0);
    assert_eq!(report.y_offset, 0.0);
    assert!(report.covers);
}

#[test]
fn rotated_image_grows_and_keeps_ratio() {
    let report = fit_report(&request(200.0, FRAC_PI_4));
    assert!(report.covers);
    assert!(report.scale > 0.5);
    assert!((report.width / report.height - 1.5).abs() < EPSILON);
    assert_eq!(report.rotation, FRAC_PI_4);
}

#[test]
fn explicit_offset_is_settled() {
    let report = fit_report(&FitRequest { offset: Some(Point::new(100.0, 0.0)), ..request(200.0, 0.0) });
    assert!(report.covers);
    assert!((report.x_offset - 0.0).abs() < EPSILON);
}

#[test]
fn report_serializes_camel_case() {
    let value = serde_json::to_value(fit_report(&request(200.0, 0.0))).expect("serializes");
    assert!(value.get("xOffset").is_some());
    assert_eq!(value["covers"], true);
}

#[test]
fn parse_point_accepts_negative_pairs() {
    assert_eq!(parse_point("-12.5, 4"), Ok(Point::new(-12.5, 4.0)));
    assert!(parse_point("12").is_err());
    assert!(parse_point("a,b").is_err());
}
