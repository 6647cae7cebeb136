#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn dims(width: f64, height: f64) -> Dimensions {
    Dimensions::new(width, height)
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn min_cover_scale_takes_tighter_axis() {
    assert_eq!(min_cover_scale(dims(300.0, 300.0), dims(600.0, 400.0)), 0.75);
    assert_eq!(min_cover_scale(dims(100.0, 100.0), dims(600.0, 400.0)), 0.25);
}

#[test]
fn min_cover_scale_ignores_empty_original() {
    assert_eq!(min_cover_scale(dims(100.0, 100.0), dims(0.0, 0.0)), 0.0);
}

#[test]
fn covering_bounds_clamp_both_ends() {
    let bounds = ScaleBounds::covering(dims(300.0, 300.0), dims(600.0, 400.0), 5.0);
    assert_eq!(bounds.clamp(0.1), 0.75);
    assert_eq!(bounds.clamp(9.0), 5.0);
    assert_eq!(bounds.clamp(2.0), 2.0);
}

#[test]
fn coverage_wins_over_ceiling() {
    let bounds = ScaleBounds { min: 6.0, max: 5.0 };
    assert_eq!(bounds.clamp(1.0), 6.0);
    assert_eq!(bounds.clamp(10.0), 6.0);
}

// =============================================================
// Edge attribution
// =============================================================

#[test]
fn scaling_vector_unrotated() {
    assert_eq!(scaling_vector(HandleCorner::TopRight, 0.0), Point::new(1.0, 1.0));
    assert_eq!(scaling_vector(HandleCorner::TopLeft, 0.0), Point::new(-1.0, 1.0));
    assert_eq!(scaling_vector(HandleCorner::BottomRight, 0.0), Point::new(1.0, -1.0));
    assert_eq!(scaling_vector(HandleCorner::BottomLeft, 0.0), Point::new(-1.0, -1.0));
}

#[test]
fn scaling_vector_flips_on_half_turn() {
    assert_eq!(scaling_vector(HandleCorner::TopRight, PI), Point::new(-1.0, -1.0));
}

#[test]
fn corners_dif_uses_only_moving_sides() {
    let sv = scaling_vector(HandleCorner::TopRight, 0.0);
    let d = corners_dif(Point::new(50.0, -30.0), HandleCorner::TopRight, sv);
    assert_eq!(d, SizeDelta { width: 50.0, height: -30.0 });

    let sv = scaling_vector(HandleCorner::BottomLeft, 0.0);
    let d = corners_dif(Point::new(-20.0, -10.0), HandleCorner::BottomLeft, sv);
    assert_eq!(d, SizeDelta { width: 20.0, height: 10.0 });
}

// =============================================================
// Rescale
// =============================================================

#[test]
fn rescale_averages_axis_ratios() {
    let bounds = ScaleBounds { min: 0.1, max: 5.0 };
    let out = calc_rescaled_dimensions(SizeDelta { width: 60.0, height: 0.0 }, dims(600.0, 400.0), dims(600.0, 400.0), bounds);
    assert!(approx_eq(out.scale, 1.05));
    assert!(approx_eq(out.dimensions.width, 630.0));
    assert!(approx_eq(out.dimensions.height, 420.0));
}

#[test]
fn rescale_starts_from_current_scale() {
    let bounds = ScaleBounds { min: 0.1, max: 5.0 };
    let out = calc_rescaled_dimensions(SizeDelta { width: 300.0, height: 200.0 }, dims(300.0, 200.0), dims(600.0, 400.0), bounds);
    assert!(approx_eq(out.scale, 1.0));
}

#[test]
fn rescale_is_clamped() {
    let bounds = ScaleBounds { min: 0.75, max: 5.0 };
    let shrink = calc_rescaled_dimensions(SizeDelta { width: -500.0, height: -300.0 }, dims(600.0, 400.0), dims(600.0, 400.0), bounds);
    assert_eq!(shrink.scale, 0.75);
    let grow = calc_rescaled_dimensions(SizeDelta { width: 9000.0, height: 9000.0 }, dims(600.0, 400.0), dims(600.0, 400.0), bounds);
    assert_eq!(grow.scale, 5.0);
}

#[test]
fn rescale_keeps_aspect_ratio() {
    let bounds = ScaleBounds { min: 0.1, max: 5.0 };
    let out = calc_rescaled_dimensions(SizeDelta { width: 37.0, height: -11.0 }, dims(600.0, 400.0), dims(600.0, 400.0), bounds);
    assert!(approx_eq(out.dimensions.width / out.dimensions.height, 1.5));
}

// =============================================================
// Image resize
// =============================================================

fn centred() -> Placement {
    // 600x400 at scale 1 centred in a 300x300 border.
    Placement { dimensions: dims(600.0, 400.0), offset: Point::new(-150.0, -50.0), rotation: 0.0 }
}

#[test]
fn top_right_drag_grows_and_keeps_bottom_left() {
    let start = centred();
    let (out, scale) = resize_image(
        &start,
        dims(300.0, 300.0),
        dims(600.0, 400.0),
        HandleCorner::TopRight,
        Point::new(50.0, 30.0),
        0.0,
        5.0,
    )
    .expect("still covers");
    let expected = (650.0 / 600.0 + 370.0 / 400.0) / 2.0;
    assert!(approx_eq(scale, expected));
    // Left side fixed, bottom side fixed.
    assert!(approx_eq(out.offset.x, -150.0));
    assert!(approx_eq(out.offset.y + out.dimensions.height, 350.0));
}

#[test]
fn top_left_drag_keeps_bottom_right() {
    let start = centred();
    let (out, _) = resize_image(
        &start,
        dims(300.0, 300.0),
        dims(600.0, 400.0),
        HandleCorner::TopLeft,
        Point::new(-60.0, -40.0),
        0.0,
        5.0,
    )
    .expect("still covers");
    assert!(approx_eq(out.offset.x + out.dimensions.width, 450.0));
    assert!(approx_eq(out.offset.y + out.dimensions.height, 350.0));
    assert!(out.dimensions.width > 600.0);
}

#[test]
fn uncovering_candidate_is_rejected() {
    let start = Placement { offset: Point::new(0.0, -50.0), ..centred() };
    let out = resize_image(
        &start,
        dims(300.0, 300.0),
        dims(600.0, 400.0),
        HandleCorner::TopLeft,
        Point::new(300.0, 0.0),
        0.0,
        5.0,
    );
    assert_eq!(out, None);
}

#[test]
fn shrink_stops_at_min_cover() {
    let start = Placement { offset: Point::new(-150.0, 0.0), ..centred() };
    let (out, scale) = resize_image(
        &start,
        dims(300.0, 300.0),
        dims(600.0, 400.0),
        HandleCorner::BottomRight,
        Point::new(-120.0, -80.0),
        0.0,
        5.0,
    )
    .expect("still covers");
    assert_eq!(scale, 0.75);
    assert_eq!(out.dimensions, dims(450.0, 300.0));
}
