//! Coverage corrector ("fit").
//!
//! Keeps a rotated image rectangle covering its border without changing the
//! image's aspect ratio. The image is described in border-local space by a
//! [`Placement`]: its displayed size, the top-left offset of its unrotated
//! rectangle, and its own rotation, pivoting on the border's center.
//!
//! The correction runs in stages and stops at the first one that restores
//! coverage:
//!
//! 1. Already covering: nothing changes (the corrector is a fixed point).
//! 2. Shift only: slide the image along its own axes onto any border corner
//!    that pokes out ([`settle_offset`]).
//! 3. Grow: sweep the border corners A..D against the image sides
//!    left, top, right, bottom, pushing each violated side out onto the
//!    corner. The swept rectangle is then widened or heightened back to the
//!    original aspect ratio around its own center, and a final shift pass
//!    absorbs rounding.

#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use crate::consts::{COVERAGE_EPSILON, EDGES};
use crate::doc::FramedImage;
use crate::geometry::{
    Corners, Dimensions, Line, Point, calc_corners_coords, find_perpendicular_point, negative_or_zero, rotate_point,
};

/// Image size, offset and rotation relative to its border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub dimensions: Dimensions,
    pub offset: Point,
    pub rotation: f64,
}

impl Placement {
    /// The committed placement of `image`.
    #[must_use]
    pub fn of(image: &FramedImage) -> Self {
        Self { dimensions: image.image_dimensions(), offset: image.image_offset(), rotation: image.image_rotation }
    }
}

/// Border corners in border-local space (top-left at the origin).
#[must_use]
pub fn border_corners(border: Dimensions) -> Corners {
    calc_corners_coords(border, Point::ORIGIN, 0.0, None)
}

/// Image corners in border-local space, rotated about the border center.
#[must_use]
pub fn image_corners(placement: &Placement, border: Dimensions) -> Corners {
    calc_corners_coords(placement.dimensions, placement.offset, placement.rotation, Some(border.half()))
}

/// Most negative signed distance from any border corner to any image side.
///
/// `0.0` means every border corner is inside (or on) the image rectangle.
#[must_use]
pub fn coverage_deficit(placement: &Placement, border: Dimensions) -> f64 {
    let corners = image_corners(placement, border);
    border_corners(border)
        .to_array()
        .into_iter()
        .flat_map(|corner| EDGES.iter().map(move |edge| negative_or_zero(edge.distance(&corners, corner))))
        .fold(0.0, f64::min)
}

/// Whether `placement` covers `border`, within [`COVERAGE_EPSILON`].
#[must_use]
pub fn covers(placement: &Placement, border: Dimensions) -> bool {
    coverage_deficit(placement, border) >= -COVERAGE_EPSILON
}

/// Slide the image along its own axes until no border corner lies outside a side.
///
/// Corners are visited A..D and sides left, top, right, bottom; each
/// violation moves the offset by exactly the violating distance. The size
/// never changes, so an image too small to cover stays uncovered on some side.
#[must_use]
pub fn settle_offset(placement: &Placement, border: Dimensions) -> Point {
    let mut offset = placement.offset;
    for corner in border_corners(border).to_array() {
        for edge in &EDGES {
            let current = Placement { offset, ..*placement };
            let distance = negative_or_zero(edge.distance(&image_corners(&current, border), corner));
            if distance != 0.0 {
                offset += edge.offset_shift(distance);
            }
        }
    }
    offset
}

/// Push each image side outward onto every border corner that lies beyond it.
fn sweep(placement: &Placement, border: Dimensions) -> Corners {
    let mut corners = image_corners(placement, border);
    for corner in border_corners(border).to_array() {
        for edge in &EDGES {
            let distance = negative_or_zero(edge.distance(&corners, corner));
            if distance == 0.0 {
                continue;
            }
            let foot = find_perpendicular_point(Line { point1: corners[edge.from], point2: corners[edge.to] }, corner);
            let push = corner - foot;
            corners[edge.from] += push;
            corners[edge.to] += push;
        }
    }
    corners
}

/// Re-impose `ratio` on a swept size by growing the short axis.
fn lock_aspect(width: f64, height: f64, ratio: f64) -> Dimensions {
    let height_derived_width = height * ratio;
    if width < height_derived_width {
        Dimensions::new(height_derived_width, height)
    } else {
        Dimensions::new(width, width / ratio)
    }
}

/// Restore coverage of `border` by shifting and, if needed, growing the image.
///
/// `ratio` is the intrinsic `width / height` of the image; the returned
/// dimensions always honor it.
#[must_use]
pub fn fit(placement: &Placement, border: Dimensions, ratio: f64) -> Placement {
    if covers(placement, border) {
        return *placement;
    }

    let shifted = Placement { offset: settle_offset(placement, border), ..*placement };
    if covers(&shifted, border) {
        return shifted;
    }

    let swept = sweep(placement, border);
    let dimensions = lock_aspect(swept.width(), swept.height(), ratio);

    let unrotated_center = rotate_point(border.half(), swept.center(), -placement.rotation);
    let grown = Placement { dimensions, offset: unrotated_center - dimensions.half(), rotation: placement.rotation };

    let settled = Placement { offset: settle_offset(&grown, border), ..grown };
    tracing::trace!(
        width = settled.dimensions.width,
        height = settled.dimensions.height,
        rotation = settled.rotation,
        "image grown to cover border"
    );
    settled
}
