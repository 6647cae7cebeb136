//! Document model: framed images on a wall and the sparse patch type used to
//! persist and replay their transforms.
//!
//! Field names serialize in camelCase so a `TransformPatch` is exactly the
//! payload the persistence collaborator stores.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::FrameConfig;
use crate::geometry::{Dimensions, Point};
use crate::rescale::min_cover_scale;

/// Unique identifier for a framed image.
pub type ObjectId = Uuid;

/// Unique identifier for a wall.
pub type WallId = Uuid;

/// What kind of object sits on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// A photo cropped by a border it must always cover.
    #[default]
    Image,
    /// A cut-out sticker: the border is the image, nothing is cropped.
    Sticker,
}

/// Cosmetic frame variant. Render-only; no geometric effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    #[default]
    None,
    Border,
}

/// The border (frame) that crops an image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub width: f64,
    pub height: f64,
    /// Left edge of the unrotated border on the wall.
    pub offset_x: f64,
    /// Top edge of the unrotated border on the wall.
    pub offset_y: f64,
    /// Rotation about the border's own center, in radians.
    pub rotation: f64,
}

/// A photo or sticker placed on a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FramedImage {
    pub id: ObjectId,
    pub wall_id: WallId,
    #[serde(default)]
    pub kind: ImageKind,
    /// Intrinsic pixel width of the source asset.
    pub original_width: f64,
    /// Intrinsic pixel height of the source asset.
    pub original_height: f64,
    /// Displayed size is `original * scale`.
    pub scale: f64,
    /// Image top-left relative to the border origin.
    pub x_offset: f64,
    pub y_offset: f64,
    /// Rotation of the image about the border center, in radians.
    pub image_rotation: f64,
    pub border: Border,
    #[serde(default)]
    pub frame_style: FrameStyle,
    /// Stacking key; higher values draw on top.
    #[serde(default)]
    pub order: i64,
}

/// Sparse update for a framed image. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformPatch {
    /// Border left edge on the wall.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Border top edge on the wall.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_height: Option<f64>,
}

impl TransformPatch {
    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FramedImage {
    /// A freshly placed photo: default border with its top-left at `position`,
    /// no rotation, and the smallest scale that covers the border, centred.
    #[must_use]
    pub fn new_placed(
        wall_id: WallId,
        kind: ImageKind,
        original: Dimensions,
        position: Point,
        config: &FrameConfig,
    ) -> Self {
        let (border, scale) = match kind {
            ImageKind::Image => {
                let border = config.default_border;
                (border, min_cover_scale(border, original))
            }
            ImageKind::Sticker => (original, 1.0),
        };
        let displayed = original.scaled(scale);
        let offset = border.half() - displayed.half();

        Self {
            id: Uuid::new_v4(),
            wall_id,
            kind,
            original_width: original.width,
            original_height: original.height,
            scale,
            x_offset: offset.x,
            y_offset: offset.y,
            image_rotation: 0.0,
            border: Border {
                width: border.width,
                height: border.height,
                offset_x: position.x,
                offset_y: position.y,
                rotation: 0.0,
            },
            frame_style: FrameStyle::None,
            order: 0,
        }
    }

    #[must_use]
    pub fn original(&self) -> Dimensions {
        Dimensions::new(self.original_width, self.original_height)
    }

    /// Intrinsic `width / height`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.original().ratio()
    }

    /// Displayed image size (`original * scale`).
    #[must_use]
    pub fn image_dimensions(&self) -> Dimensions {
        self.original().scaled(self.scale)
    }

    #[must_use]
    pub fn image_offset(&self) -> Point {
        Point::new(self.x_offset, self.y_offset)
    }

    #[must_use]
    pub fn border_dimensions(&self) -> Dimensions {
        Dimensions::new(self.border.width, self.border.height)
    }

    #[must_use]
    pub fn border_position(&self) -> Point {
        Point::new(self.border.offset_x, self.border.offset_y)
    }

    /// Apply a partial update. Non-finite values are ignored.
    pub fn apply_patch(&mut self, patch: &TransformPatch) {
        let set = |slot: &mut f64, value: Option<f64>| {
            if let Some(v) = value.filter(|v| v.is_finite()) {
                *slot = v;
            }
        };
        set(&mut self.border.offset_x, patch.x);
        set(&mut self.border.offset_y, patch.y);
        set(&mut self.x_offset, patch.x_offset);
        set(&mut self.y_offset, patch.y_offset);
        set(&mut self.image_rotation, patch.image_rotation);
        set(&mut self.border.rotation, patch.border_rotation);
        set(&mut self.border.width, patch.border_width);
        set(&mut self.border.height, patch.border_height);
        if let Some(scale) = patch.scale.filter(|s| s.is_finite() && *s > 0.0) {
            self.scale = scale;
        }
    }
}
