#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

use super::*;

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn placement(width: f64, height: f64, x: f64, y: f64, rotation: f64) -> Placement {
    Placement { dimensions: Dimensions::new(width, height), offset: Point::new(x, y), rotation }
}

fn assert_covers(p: &Placement, border: Dimensions) {
    let deficit = coverage_deficit(p, border);
    assert!(deficit >= -EPSILON, "border not covered: deficit {deficit}, placement {p:?}");
}

fn assert_ratio(p: &Placement, ratio: f64) {
    let actual = p.dimensions.width / p.dimensions.height;
    assert!(approx_eq(actual, ratio), "ratio {actual} != {ratio}");
}

// =============================================================
// Corner helpers
// =============================================================

#[test]
fn border_corners_start_at_origin() {
    let c = border_corners(Dimensions::new(300.0, 200.0));
    assert_eq!(c.a, Point::ORIGIN);
    assert_eq!(c.c, Point::new(300.0, 200.0));
}

#[test]
fn image_corners_pivot_on_border_center() {
    let border = Dimensions::new(100.0, 100.0);
    let c = image_corners(&placement(100.0, 100.0, 0.0, 0.0, PI), border);
    assert!(approx_eq(c.a.x, 100.0));
    assert!(approx_eq(c.a.y, 100.0));
}

// =============================================================
// Coverage check
// =============================================================

#[test]
fn exact_match_covers() {
    let border = Dimensions::new(200.0, 200.0);
    assert!(covers(&placement(200.0, 200.0, 0.0, 0.0, 0.0), border));
    assert_eq!(coverage_deficit(&placement(200.0, 200.0, 0.0, 0.0, 0.0), border), 0.0);
}

#[test]
fn shifted_image_leaves_gap() {
    let border = Dimensions::new(200.0, 200.0);
    let p = placement(200.0, 200.0, 10.0, 0.0, 0.0);
    assert!(!covers(&p, border));
    assert!(approx_eq(coverage_deficit(&p, border), -10.0));
}

#[test]
fn rotated_exact_match_does_not_cover() {
    let border = Dimensions::new(200.0, 200.0);
    assert!(!covers(&placement(200.0, 200.0, 0.0, 0.0, FRAC_PI_4), border));
}

#[test]
fn quarter_turn_of_square_still_covers() {
    let border = Dimensions::new(200.0, 200.0);
    assert!(covers(&placement(200.0, 200.0, 0.0, 0.0, FRAC_PI_2), border));
}

// =============================================================
// settle_offset
// =============================================================

#[test]
fn settle_offset_pulls_image_onto_right_corner() {
    let border = Dimensions::new(200.0, 200.0);
    let offset = settle_offset(&placement(300.0, 200.0, -120.0, 0.0, 0.0), border);
    assert!(approx_eq(offset.x, -100.0));
    assert!(approx_eq(offset.y, 0.0));
}

#[test]
fn settle_offset_pulls_image_onto_top_left_corner() {
    let border = Dimensions::new(200.0, 200.0);
    let offset = settle_offset(&placement(300.0, 300.0, 15.0, 25.0, 0.0), border);
    assert!(approx_eq(offset.x, 0.0));
    assert!(approx_eq(offset.y, 0.0));
}

#[test]
fn settle_offset_leaves_covering_image_alone() {
    let border = Dimensions::new(200.0, 200.0);
    let p = placement(400.0, 300.0, -50.0, -20.0, 0.0);
    assert_eq!(settle_offset(&p, border), p.offset);
}

// =============================================================
// fit
// =============================================================

#[test]
fn fit_is_identity_on_covering_state() {
    let border = Dimensions::new(300.0, 300.0);
    let p = placement(600.0, 400.0, -100.0, -40.0, 0.1);
    assert!(covers(&p, border));
    assert_eq!(fit(&p, border, 1.5), p);
}

#[test]
fn fit_twice_is_a_fixed_point() {
    let border = Dimensions::new(200.0, 200.0);
    let p = placement(300.0, 200.0, -50.0, 0.0, 0.7);
    let once = fit(&p, border, 1.5);
    let twice = fit(&once, border, 1.5);
    assert_eq!(once, twice);
}

#[test]
fn fit_prefers_shifting_over_growing() {
    let border = Dimensions::new(200.0, 200.0);
    let fitted = fit(&placement(300.0, 200.0, -120.0, 0.0, 0.0), border, 1.5);
    assert_eq!(fitted.dimensions, Dimensions::new(300.0, 200.0));
    assert!(approx_eq(fitted.offset.x, -100.0));
    assert_covers(&fitted, border);
}

#[test]
fn fit_grows_square_rotated_by_eighth_turn() {
    // Scenario: image exactly matches the border, then rotates by pi/4.
    let border = Dimensions::new(200.0, 200.0);
    let fitted = fit(&placement(200.0, 200.0, 0.0, 0.0, FRAC_PI_4), border, 1.0);

    assert_covers(&fitted, border);
    assert_ratio(&fitted, 1.0);
    assert!(approx_eq(fitted.dimensions.width, 200.0 * SQRT_2));
    assert_eq!(fitted.rotation, FRAC_PI_4);
}

#[test]
fn fit_keeps_grown_image_centered_on_border() {
    let border = Dimensions::new(200.0, 200.0);
    let fitted = fit(&placement(200.0, 200.0, 0.0, 0.0, FRAC_PI_4), border, 1.0);
    let center = image_corners(&fitted, border).center();
    assert!(approx_eq(center.x, 100.0));
    assert!(approx_eq(center.y, 100.0));
}

#[test]
fn fit_landscape_image_preserves_ratio_under_rotation() {
    let border = Dimensions::new(200.0, 200.0);
    let ratio = 1.5;
    for angle in [0.2, FRAC_PI_4, 1.0, 2.0, -0.6, PI + 0.3] {
        let fitted = fit(&placement(300.0, 200.0, -50.0, 0.0, angle), border, ratio);
        assert_covers(&fitted, border);
        assert_ratio(&fitted, ratio);
        assert!(fitted.dimensions.width >= 300.0 - EPSILON);
    }
}

#[test]
fn fit_portrait_border_and_landscape_image() {
    let border = Dimensions::new(120.0, 400.0);
    let ratio = 600.0 / 400.0;
    let fitted = fit(&placement(600.0, 400.0, -240.0, 0.0, 0.35), border, ratio);
    assert_covers(&fitted, border);
    assert_ratio(&fitted, ratio);
}

#[test]
fn fit_grows_undersized_image() {
    let border = Dimensions::new(200.0, 100.0);
    let fitted = fit(&placement(100.0, 100.0, 0.0, 0.0, 0.0), border, 1.0);
    assert_covers(&fitted, border);
    assert_ratio(&fitted, 1.0);
    assert!(fitted.dimensions.width >= 200.0 - EPSILON);
}

#[test]
fn fit_results_are_finite() {
    let border = Dimensions::new(50.0, 1000.0);
    let fitted = fit(&placement(10.0, 10.0, 500.0, -500.0, 3.0), border, 1.0);
    assert!(fitted.offset.is_finite());
    assert!(fitted.dimensions.width.is_finite());
    assert_covers(&fitted, border);
}
