//! Hit-testing the handles and body of a single framed image.
//!
//! Which object is under the pointer (z-order, selection) is decided by the
//! host. Once an object is the edit target, this module tells which of its
//! parts a wall point lands on. Handles are checked before the body so a
//! handle overlapping the image wins.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Camera;
use crate::consts::{HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::doc::{FramedImage, ImageKind};
use crate::fit::{Placement, image_corners};
use crate::geometry::{Corners, Point, calc_corners_coords, distance_between_points, rotate_point};

/// One side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Corner resize handle. Dragging one moves the two sides that meet there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl HandleCorner {
    pub const ALL: [HandleCorner; 4] =
        [HandleCorner::TopLeft, HandleCorner::TopRight, HandleCorner::BottomRight, HandleCorner::BottomLeft];

    /// The sides moved by this handle.
    #[must_use]
    pub fn sides(self) -> [Side; 2] {
        match self {
            Self::TopLeft => [Side::Top, Side::Left],
            Self::TopRight => [Side::Top, Side::Right],
            Self::BottomRight => [Side::Bottom, Side::Right],
            Self::BottomLeft => [Side::Bottom, Side::Left],
        }
    }

    #[must_use]
    pub fn moves(self, side: Side) -> bool {
        self.sides().contains(&side)
    }

    /// The rectangle corner this handle sits on.
    #[must_use]
    pub fn point(self, corners: &Corners) -> Point {
        match self {
            Self::TopLeft => corners.a,
            Self::TopRight => corners.b,
            Self::BottomRight => corners.c,
            Self::BottomLeft => corners.d,
        }
    }
}

/// Which part of a framed image was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The visible image; drags reposition it inside the border.
    Body,
    /// A corner of the border frame.
    BorderHandle(HandleCorner),
    /// A corner of the image itself (editing mode only).
    ImageHandle(HandleCorner),
    /// The image rotate handle (editing mode only).
    RotateHandle,
    /// The border rotate handle (editing mode only).
    BorderRotateHandle,
}

/// Border corners in wall space.
#[must_use]
pub fn border_wall_corners(image: &FramedImage) -> Corners {
    calc_corners_coords(image.border_dimensions(), image.border_position(), image.border.rotation, None)
}

/// Image corners in wall space: border-local corners carried through the
/// border's own rotation.
#[must_use]
pub fn image_wall_corners(image: &FramedImage) -> Corners {
    let border = image.border_dimensions();
    let local = image_corners(&Placement::of(image), border);
    let origin = image.border_position();
    let pivot = origin + border.half();
    let to_wall = |p: Point| rotate_point(pivot, origin + p, image.border.rotation);
    Corners { a: to_wall(local.a), b: to_wall(local.b), c: to_wall(local.c), d: to_wall(local.d) }
}

/// Position of the rotate handle sitting above the A→B side of `corners`.
fn rotate_handle_point(corners: &Corners, offset_world: f64) -> Point {
    let top_mid = corners.a.midpoint(corners.b);
    let outward = top_mid - corners.center();
    let len = outward.length();
    if len == 0.0 {
        return top_mid;
    }
    top_mid + outward * (offset_world / len)
}

/// Test which part of `image` (if any) is under `world_pt`.
#[must_use]
pub fn hit_test(world_pt: Point, image: &FramedImage, editing: bool, camera: &Camera) -> Option<HitPart> {
    let radius = camera.screen_dist_to_world(HANDLE_RADIUS_PX);
    let handle_offset = camera.screen_dist_to_world(ROTATE_HANDLE_OFFSET_PX);
    let near = |p: Point| distance_between_points(p, world_pt) <= radius;

    let border = border_wall_corners(image);
    // The whole image is grabbable while editing, overflow included.
    let grabbable_image = (editing && image.kind == ImageKind::Image).then(|| image_wall_corners(image));

    if editing {
        if near(rotate_handle_point(&border, handle_offset * 2.0)) {
            return Some(HitPart::BorderRotateHandle);
        }
        if let Some(img) = &grabbable_image {
            if near(rotate_handle_point(img, handle_offset)) {
                return Some(HitPart::RotateHandle);
            }
            if let Some(corner) = HandleCorner::ALL.into_iter().find(|c| near(c.point(img))) {
                return Some(HitPart::ImageHandle(corner));
            }
        }
    }

    if let Some(corner) = HandleCorner::ALL.into_iter().find(|c| near(c.point(&border))) {
        return Some(HitPart::BorderHandle(corner));
    }

    if contains(&border, world_pt) || grabbable_image.is_some_and(|img| contains(&img, world_pt)) {
        return Some(HitPart::Body);
    }
    None
}

fn contains(corners: &Corners, pt: Point) -> bool {
    crate::consts::EDGES.iter().all(|edge| edge.distance(corners, pt) >= 0.0)
}
