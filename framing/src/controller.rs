//! Interaction controller for a single framed image.
//!
//! Drives the `Idle -> Dragging{kind} -> Idle` gesture machine. Pointer-moves
//! write hot values only and push them straight to the render sink; the
//! gesture's end (pointer-up or pointer-leave) promotes hot to committed and
//! calls the persistence collaborator exactly once with the fields that
//! gesture owns.
//!
//! Resize and rotate handles need editing mode, as does moving the image
//! inside its border. Border corner handles only need the object to be
//! selected.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::border::{BorderFrame, resize_border, resize_sticker};
use crate::config::FrameConfig;
use crate::doc::{FramedImage, ImageKind, ObjectId, TransformPatch, WallId};
use crate::fit::{Placement, fit, settle_offset};
use crate::geometry::{Point, find_rotation_angle, rotate_vector};
use crate::hit::HitPart;
use crate::input::{DragKind, InputState};
use crate::persist::Persistence;
use crate::render::{NullSink, RenderSink, paint_hot};
use crate::rescale::resize_image;
use crate::session::TransformSession;

const SCALE_TOLERANCE: f64 = 1e-9;

pub struct FrameController {
    image: FramedImage,
    session: TransformSession,
    input: InputState,
    editing: bool,
    selected: bool,
    config: FrameConfig,
    render: Box<dyn RenderSink>,
}

impl FrameController {
    #[must_use]
    pub fn new(image: FramedImage, config: FrameConfig) -> Self {
        let session = TransformSession::from_image(&image);
        Self {
            image,
            session,
            input: InputState::Idle,
            editing: false,
            selected: false,
            config,
            render: Box::new(NullSink),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.image.id
    }

    #[must_use]
    pub fn wall_id(&self) -> WallId {
        self.image.wall_id
    }

    /// The committed image, as last persisted or received.
    #[must_use]
    pub fn image(&self) -> &FramedImage {
        &self.image
    }

    #[must_use]
    pub fn session(&self) -> &TransformSession {
        &self.session
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    // --- Host wiring ---

    /// Replace the render sink and paint the current state to it.
    pub fn attach_render(&mut self, sink: Box<dyn RenderSink>) {
        self.render = sink;
        paint_hot(&self.session, self.render.as_mut());
    }

    /// Select or deselect. Deselecting also leaves editing mode.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if !selected {
            self.editing = false;
        }
    }

    /// Double-click: flip editing mode. Geometry is untouched. Returns the new mode.
    pub fn toggle_editing_mode(&mut self) -> bool {
        if !self.input.is_idle() {
            return self.editing;
        }
        self.editing = !self.editing;
        if self.editing {
            self.selected = true;
        }
        tracing::debug!(id = %self.image.id, editing = self.editing, "editing mode toggled");
        self.editing
    }

    /// Apply a patch that arrived from elsewhere. Ignored mid-gesture; returns
    /// whether it was applied.
    pub fn apply_remote(&mut self, patch: &TransformPatch) -> bool {
        if !self.input.is_idle() {
            tracing::debug!(id = %self.image.id, "remote update ignored during gesture");
            return false;
        }
        self.image.apply_patch(patch);
        self.session = TransformSession::from_image(&self.image);
        paint_hot(&self.session, self.render.as_mut());
        true
    }

    // --- Gestures ---

    /// Start a gesture on `part` at wall point `point`. Returns whether a drag began.
    pub fn on_pointer_down(&mut self, part: HitPart, point: Point) -> bool {
        if !self.input.is_idle() {
            return false;
        }
        let is_image = self.image.kind == ImageKind::Image;
        let pivot = self.wall_border_center();

        let next = match part {
            HitPart::Body if self.editing && is_image => InputState::DraggingImage { start: point },
            HitPart::BorderHandle(corner) if self.selected || self.editing => {
                InputState::ResizingBorder { corner, start: point }
            }
            HitPart::ImageHandle(corner) if self.editing && is_image => InputState::ResizingImage { corner, start: point },
            HitPart::RotateHandle if self.editing && is_image => InputState::RotatingImage { pivot, start: point },
            HitPart::BorderRotateHandle if self.editing => InputState::RotatingBorder { pivot, start: point },
            _ => return false,
        };

        self.input = next;
        tracing::debug!(id = %self.image.id, kind = ?next.kind(), "gesture started");
        true
    }

    /// Update the hot transform for the pointer at wall point `point`.
    /// Returns whether anything was repainted.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        match self.input {
            InputState::Idle => return false,
            InputState::DraggingImage { start } => self.drag_position(point - start),
            InputState::ResizingImage { corner, start } => {
                let s = &self.session;
                let view_rotation = s.image_rotation.committed() + s.border_rotation.committed();
                let resized = resize_image(
                    &self.committed_placement(),
                    s.border_dimensions.committed(),
                    self.image.original(),
                    corner,
                    point - start,
                    view_rotation,
                    self.config.scale_max,
                );
                if let Some((placement, _)) = resized {
                    self.set_hot_placement(&placement);
                }
            }
            InputState::RotatingImage { pivot, start } => {
                let rotation = self.session.image_rotation.committed() + find_rotation_angle(pivot, start, point);
                let candidate = Placement { rotation, ..self.committed_placement() };
                let fitted = fit(&candidate, self.session.border_dimensions.committed(), self.image.ratio());
                if self.exceeds_scale_max(&fitted) {
                    tracing::debug!(id = %self.image.id, rotation, "rotation rejected: scale above maximum");
                    return false;
                }
                self.set_hot_placement(&fitted);
            }
            InputState::RotatingBorder { pivot, start } => {
                let rotation = self.session.border_rotation.committed() + find_rotation_angle(pivot, start, point);
                self.session.border_rotation.set_hot(rotation);
            }
            InputState::ResizingBorder { corner, start } => {
                let frame = BorderFrame {
                    dimensions: self.session.border_dimensions.committed(),
                    position: self.session.border_position.committed(),
                    rotation: self.session.border_rotation.committed(),
                };
                let delta = point - start;
                let out = match self.image.kind {
                    ImageKind::Image => resize_border(
                        &frame,
                        &self.committed_placement(),
                        self.image.original(),
                        corner,
                        delta,
                        &self.config,
                    ),
                    ImageKind::Sticker => resize_sticker(&frame, self.image.original(), corner, delta, &self.config),
                };
                if self.exceeds_scale_max(&out.image) {
                    tracing::debug!(id = %self.image.id, "border resize rejected: scale above maximum");
                    return false;
                }
                self.session.border_dimensions.set_hot(out.border.dimensions);
                self.session.border_position.set_hot(out.border.position);
                self.set_hot_placement(&out.image);
            }
        }
        paint_hot(&self.session, self.render.as_mut());
        true
    }

    /// End the gesture: promote hot state and persist it once.
    pub fn on_pointer_up(&mut self, persistence: &mut dyn Persistence) -> Option<TransformPatch> {
        self.finish(persistence)
    }

    /// Pointer left the tracking surface mid-gesture. Commits exactly like
    /// pointer-up so no hot state is left behind.
    pub fn on_pointer_leave(&mut self, persistence: &mut dyn Persistence) -> Option<TransformPatch> {
        self.finish(persistence)
    }

    fn finish(&mut self, persistence: &mut dyn Persistence) -> Option<TransformPatch> {
        let kind = self.input.kind()?;
        self.input = InputState::Idle;

        self.session.promote();
        self.session.write_committed(&mut self.image);

        let patch = self.patch_for(kind);
        persistence.persist_transform(self.image.id, self.image.wall_id, &patch);
        tracing::debug!(id = %self.image.id, ?kind, "gesture committed");
        Some(patch)
    }

    // --- Helpers ---

    fn wall_border_center(&self) -> Point {
        self.session.border_position.committed() + self.session.border_dimensions.committed().half()
    }

    fn committed_placement(&self) -> Placement {
        Placement {
            dimensions: self.session.image_dimensions.committed(),
            offset: self.session.image_offset.committed(),
            rotation: self.session.image_rotation.committed(),
        }
    }

    fn set_hot_placement(&mut self, placement: &Placement) {
        self.session.image_dimensions.set_hot(placement.dimensions);
        self.session.image_offset.set_hot(placement.offset);
        self.session.image_rotation.set_hot(placement.rotation);
    }

    /// A fitted candidate whose scale grows past `scale_max` is rejected. A
    /// committed scale already above the ceiling (tiny originals) may stay
    /// there but not grow further.
    fn exceeds_scale_max(&self, placement: &Placement) -> bool {
        let original = self.image.original();
        if original.width <= 0.0 {
            return false;
        }
        let scale = placement.dimensions.width / original.width;
        let committed = self.session.image_dimensions.committed().width / original.width;
        scale > self.config.scale_max + SCALE_TOLERANCE && scale > committed + SCALE_TOLERANCE
    }

    /// Move the image by a wall-space delta, expressed in its own unrotated frame.
    fn drag_position(&mut self, delta: Point) {
        let start = self.committed_placement();
        let view_rotation = start.rotation + self.session.border_rotation.committed();
        let local = rotate_vector(delta, -view_rotation);

        let moved = Placement { offset: start.offset + local, ..start };
        let offset = settle_offset(&moved, self.session.border_dimensions.committed());
        self.session.image_offset.set_hot(offset);
    }

    /// The committed fields owned by a gesture of `kind`.
    fn patch_for(&self, kind: DragKind) -> TransformPatch {
        let img = &self.image;
        let offsets = TransformPatch { x_offset: Some(img.x_offset), y_offset: Some(img.y_offset), ..Default::default() };
        match kind {
            DragKind::Position => offsets,
            DragKind::ImageResize => TransformPatch { scale: Some(img.scale), ..offsets },
            DragKind::Rotation => {
                TransformPatch { image_rotation: Some(img.image_rotation), scale: Some(img.scale), ..offsets }
            }
            DragKind::BorderResize => {
                let border = TransformPatch {
                    x: Some(img.border.offset_x),
                    y: Some(img.border.offset_y),
                    scale: Some(img.scale),
                    border_width: Some(img.border.width),
                    border_height: Some(img.border.height),
                    ..Default::default()
                };
                match img.kind {
                    ImageKind::Image => TransformPatch { x_offset: offsets.x_offset, y_offset: offsets.y_offset, ..border },
                    ImageKind::Sticker => border,
                }
            }
            DragKind::BorderRotation => {
                TransformPatch { border_rotation: Some(img.border.rotation), ..Default::default() }
            }
        }
    }
}
