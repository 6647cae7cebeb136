//! Border resize policy.
//!
//! Dragging a border corner resizes the frame within the configured limits
//! while the opposite corner stays put on the wall, even when the border is
//! rotated. The image is then rescaled to the smallest scale that covers
//! the new frame and re-fitted. Unlike an image resize, a border resize is
//! never rejected.

#[cfg(test)]
#[path = "border_test.rs"]
mod border_test;

use crate::config::FrameConfig;
use crate::fit::{Placement, fit};
use crate::geometry::{Dimensions, Point, rotate_point, rotate_vector};
use crate::hit::{HandleCorner, Side};
use crate::rescale::{Rescaled, ScaleBounds, calc_rescaled_dimensions, corners_dif, min_cover_scale, scaling_vector};

/// Border size, wall position (unrotated top-left) and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderFrame {
    pub dimensions: Dimensions,
    pub position: Point,
    pub rotation: f64,
}

/// Outcome of a border resize: the new frame and the re-fitted image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderResize {
    pub border: BorderFrame,
    pub image: Placement,
    pub scale: f64,
}

/// Re-place `start` at size `dimensions`, keeping the corner opposite
/// `corner` fixed on the wall.
#[must_use]
pub fn anchor_opposite(start: &BorderFrame, corner: HandleCorner, dimensions: Dimensions) -> Point {
    let moves_left = corner.moves(Side::Left);
    let moves_top = corner.moves(Side::Top);

    let old = start.dimensions;
    let anchor_local = start.position
        + Point { x: if moves_left { old.width } else { 0.0 }, y: if moves_top { old.height } else { 0.0 } };
    let anchor = rotate_point(start.position + old.half(), anchor_local, start.rotation);

    let to_center = Point {
        x: if moves_left { -dimensions.width / 2.0 } else { dimensions.width / 2.0 },
        y: if moves_top { -dimensions.height / 2.0 } else { dimensions.height / 2.0 },
    };
    let center = anchor + rotate_vector(to_center, start.rotation);
    center - dimensions.half()
}

/// Size the border would take for `pointer_delta` (wall space, y down), clamped.
#[must_use]
pub fn resized_border(start: &BorderFrame, corner: HandleCorner, pointer_delta: Point, config: &FrameConfig) -> BorderFrame {
    let local = rotate_vector(pointer_delta, -start.rotation);
    let delta = corners_dif(local, corner, Point { x: 1.0, y: 1.0 });

    let requested = Dimensions {
        width: start.dimensions.width + delta.width * if corner.moves(Side::Left) { -1.0 } else { 1.0 },
        height: start.dimensions.height + delta.height * if corner.moves(Side::Top) { -1.0 } else { 1.0 },
    };
    let dimensions = config.clamp_border(requested);

    BorderFrame { dimensions, position: anchor_opposite(start, corner, dimensions), rotation: start.rotation }
}

/// Resize the border of a photo and re-fit its image at the minimum covering scale.
#[must_use]
pub fn resize_border(
    start: &BorderFrame,
    image: &Placement,
    original: Dimensions,
    corner: HandleCorner,
    pointer_delta: Point,
    config: &FrameConfig,
) -> BorderResize {
    let border = resized_border(start, corner, pointer_delta, config);

    let scale = min_cover_scale(border.dimensions, original);
    let rescaled = Placement { dimensions: original.scaled(scale), ..*image };
    let fitted = fit(&rescaled, border.dimensions, original.ratio());

    let scale = if original.width > 0.0 { fitted.dimensions.width / original.width } else { scale };
    BorderResize { border, image: fitted, scale }
}

/// Resize a sticker from a border-handle drag. The border tracks the image
/// exactly, so there is no coverage to restore; only the size limits apply.
#[must_use]
pub fn resize_sticker(
    start: &BorderFrame,
    original: Dimensions,
    corner: HandleCorner,
    pointer_delta: Point,
    config: &FrameConfig,
) -> BorderResize {
    let dif = Point { x: pointer_delta.x, y: -pointer_delta.y };
    let delta = corners_dif(dif, corner, scaling_vector(corner, -start.rotation));

    let limit = |b: f64, o: f64| if o > 0.0 { b / o } else { config.scale_max };
    let bounds = ScaleBounds {
        min: min_cover_scale(config.min_border, original),
        max: config
            .scale_max
            .min(limit(config.max_border.width, original.width))
            .min(limit(config.max_border.height, original.height)),
    };
    let Rescaled { dimensions, scale } = calc_rescaled_dimensions(delta, start.dimensions, original, bounds);

    let border = BorderFrame { dimensions, position: anchor_opposite(start, corner, dimensions), rotation: start.rotation };
    let image = Placement { dimensions, offset: Point::ORIGIN, rotation: 0.0 };
    BorderResize { border, image, scale }
}
