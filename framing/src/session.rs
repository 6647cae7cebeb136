//! Hot/committed value slots for in-progress gestures.
//!
//! During a drag every pointer-move writes only the *hot* copy of a value
//! and pushes it straight to the render target. The *committed* copy is the
//! persisted, authoritative value; it changes only when a gesture ends and
//! the hot copy is promoted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::doc::FramedImage;
use crate::geometry::{Dimensions, Point};

/// A committed value and its in-progress counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot<T: Copy> {
    committed: T,
    hot: T,
}

impl<T: Copy + PartialEq> Slot<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { committed: value, hot: value }
    }

    #[must_use]
    pub fn committed(&self) -> T {
        self.committed
    }

    #[must_use]
    pub fn hot(&self) -> T {
        self.hot
    }

    /// Update the in-progress value only.
    pub fn set_hot(&mut self, value: T) {
        self.hot = value;
    }

    /// Overwrite both copies (external updates, initial load).
    pub fn commit_value(&mut self, value: T) {
        self.committed = value;
        self.hot = value;
    }

    /// Copy the hot value into the committed one.
    pub fn promote(&mut self) {
        self.committed = self.hot;
    }

    /// Discard the hot value.
    pub fn revert(&mut self) {
        self.hot = self.committed;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.hot != self.committed
    }
}

/// Every transformable quantity of one framed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSession {
    pub image_offset: Slot<Point>,
    pub image_dimensions: Slot<Dimensions>,
    pub image_rotation: Slot<f64>,
    pub border_dimensions: Slot<Dimensions>,
    pub border_position: Slot<Point>,
    pub border_rotation: Slot<f64>,
}

impl TransformSession {
    /// A clean session holding the committed transform of `image`.
    #[must_use]
    pub fn from_image(image: &FramedImage) -> Self {
        Self {
            image_offset: Slot::new(image.image_offset()),
            image_dimensions: Slot::new(image.image_dimensions()),
            image_rotation: Slot::new(image.image_rotation),
            border_dimensions: Slot::new(image.border_dimensions()),
            border_position: Slot::new(image.border_position()),
            border_rotation: Slot::new(image.border.rotation),
        }
    }

    /// Promote every hot value.
    pub fn promote(&mut self) {
        self.image_offset.promote();
        self.image_dimensions.promote();
        self.image_rotation.promote();
        self.border_dimensions.promote();
        self.border_position.promote();
        self.border_rotation.promote();
    }

    /// Drop every hot value.
    pub fn revert(&mut self) {
        self.image_offset.revert();
        self.image_dimensions.revert();
        self.image_rotation.revert();
        self.border_dimensions.revert();
        self.border_position.revert();
        self.border_rotation.revert();
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.image_offset.is_dirty()
            || self.image_dimensions.is_dirty()
            || self.image_rotation.is_dirty()
            || self.border_dimensions.is_dirty()
            || self.border_position.is_dirty()
            || self.border_rotation.is_dirty()
    }

    /// Write the committed values back into `image`.
    pub fn write_committed(&self, image: &mut FramedImage) {
        let offset = self.image_offset.committed();
        let dims = self.image_dimensions.committed();
        let border = self.border_dimensions.committed();
        let position = self.border_position.committed();

        image.x_offset = offset.x;
        image.y_offset = offset.y;
        if image.original_width > 0.0 && dims.width > 0.0 {
            image.scale = dims.width / image.original_width;
        }
        image.image_rotation = self.image_rotation.committed();
        image.border.width = border.width;
        image.border.height = border.height;
        image.border.offset_x = position.x;
        image.border.offset_y = position.y;
        image.border.rotation = self.border_rotation.committed();
    }
}
