//! Rescale solver: turns a corner-handle drag into an aspect-locked scale.
//!
//! A drag delta is first attributed to the sides the handle moves
//! ([`corners_dif`]), then both axis ratios are averaged into one scale
//! multiplier so diagonal drags blend the two axes instead of snapping to
//! the tighter one. The resulting scale is clamped to [`ScaleBounds`].

#[cfg(test)]
#[path = "rescale_test.rs"]
mod rescale_test;

use crate::fit::{Placement, covers};
use crate::geometry::{Dimensions, Point, clamp, rotate_vector};
use crate::hit::{HandleCorner, Side};

/// Signed width/height change attributed to a handle drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeDelta {
    pub width: f64,
    pub height: f64,
}

/// Allowed range for an image scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl ScaleBounds {
    /// Bounds for an image that must cover `border`: the minimum is the
    /// smallest scale at which the image is at least as large as the border.
    #[must_use]
    pub fn covering(border: Dimensions, original: Dimensions, scale_max: f64) -> Self {
        Self { min: min_cover_scale(border, original), max: scale_max }
    }

    /// Clamp `scale` into the bounds. Coverage wins when `min > max`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        clamp(self.min, self.max, scale)
    }
}

/// Result of a rescale: the new scale and the displayed size it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescaled {
    pub dimensions: Dimensions,
    pub scale: f64,
}

/// Smallest scale at which `original * scale` is no smaller than `border` on both axes.
#[must_use]
pub fn min_cover_scale(border: Dimensions, original: Dimensions) -> f64 {
    let axis = |b: f64, o: f64| if o > 0.0 { b / o } else { 0.0 };
    axis(border.width, original.width).max(axis(border.height, original.height))
}

/// Sign vector used to attribute a drag to the moving sides.
///
/// Top/right handles grow with positive deltas, bottom/left with negative.
/// The vector is rotated by `angle` and reduced back to signs, so a handle on
/// a rotated image keeps growing in the direction the user sees it face.
#[must_use]
pub fn scaling_vector(corner: HandleCorner, angle: f64) -> Point {
    let mut vector = Point::ORIGIN;
    for side in corner.sides() {
        match side {
            Side::Top => vector.y = 1.0,
            Side::Right => vector.x = 1.0,
            Side::Bottom => vector.y = -1.0,
            Side::Left => vector.x = -1.0,
        }
    }
    let rotated = rotate_vector(vector, angle);
    Point { x: if rotated.x >= 0.0 { 1.0 } else { -1.0 }, y: if rotated.y >= 0.0 { 1.0 } else { -1.0 } }
}

/// Attribute a drag delta (`dif`, y up) to the sides moved by `corner`.
#[must_use]
pub fn corners_dif(dif: Point, corner: HandleCorner, scaling_vector: Point) -> SizeDelta {
    let mut nw = Point::ORIGIN;
    let mut se = Point::ORIGIN;

    if corner.moves(Side::Top) {
        nw.y = scaling_vector.y * dif.y;
    }
    if corner.moves(Side::Right) {
        se.x = scaling_vector.x * dif.x;
    }
    if corner.moves(Side::Bottom) {
        se.y = scaling_vector.y * dif.y;
    }
    if corner.moves(Side::Left) {
        nw.x = scaling_vector.x * dif.x;
    }

    SizeDelta { width: nw.x + se.x, height: nw.y + se.y }
}

/// Rescale `current` by the averaged axis ratio of `delta`, clamped to `bounds`.
///
/// The current scale is derived from `current.width / original.width`; the
/// result is always `original * scale`, so the aspect ratio is exact.
#[must_use]
pub fn calc_rescaled_dimensions(
    delta: SizeDelta,
    current: Dimensions,
    original: Dimensions,
    bounds: ScaleBounds,
) -> Rescaled {
    let axis = |size: f64, d: f64| if size > 0.0 { (size + d) / size } else { 1.0 };
    let multiplier = (axis(current.width, delta.width) + axis(current.height, delta.height)) / 2.0;

    let current_scale = if original.width > 0.0 { current.width / original.width } else { 1.0 };
    let scale = bounds.clamp(current_scale * multiplier);

    Rescaled { dimensions: original.scaled(scale), scale }
}

/// Resize the image inside its border from a corner-handle drag.
///
/// `pointer_delta` is the wall-space pointer movement since the gesture
/// started (y down) and `start` the image placement at that moment. The side
/// opposite the handle stays put. Returns `None` when the candidate would
/// uncover part of the border; the caller keeps its previous state.
#[must_use]
pub fn resize_image(
    start: &Placement,
    border: Dimensions,
    original: Dimensions,
    corner: HandleCorner,
    pointer_delta: Point,
    view_rotation: f64,
    scale_max: f64,
) -> Option<(Placement, f64)> {
    let dif = Point { x: pointer_delta.x, y: -pointer_delta.y };
    let delta = corners_dif(dif, corner, scaling_vector(corner, -view_rotation));
    let bounds = ScaleBounds::covering(border, original, scale_max);
    let Rescaled { dimensions, scale } = calc_rescaled_dimensions(delta, start.dimensions, original, bounds);

    let sign_x = if corner.moves(Side::Left) { 1.0 } else { 0.0 };
    let sign_y = if corner.moves(Side::Top) { 1.0 } else { 0.0 };
    let offset = Point {
        x: start.offset.x + (start.dimensions.width - dimensions.width) * sign_x,
        y: start.offset.y + (start.dimensions.height - dimensions.height) * sign_y,
    };

    let candidate = Placement { dimensions, offset, rotation: start.rotation };
    if covers(&candidate, border) {
        Some((candidate, scale))
    } else {
        tracing::debug!(?corner, scale, "resize candidate uncovers border; rejected");
        None
    }
}
