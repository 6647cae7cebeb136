use std::collections::HashMap;

use crate::camera::Camera;
use crate::config::FrameConfig;
use crate::controller::FrameController;
use crate::doc::{FramedImage, ObjectId, TransformPatch, WallId};
use crate::geometry::Point;
use crate::hit::{HandleCorner, HitPart, hit_test};
use crate::input::{Button, DragKind};
use crate::persist::Persistence;
use crate::render::RenderSink;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    SetCursor(String),
    EditingModeChanged { id: ObjectId, editing: bool },
    /// A gesture ended and its fields were handed to persistence.
    Persisted { id: ObjectId, fields: TransformPatch },
}

/// Wall-level routing: owns one controller per framed image and forwards
/// pointer events to the current edit target.
///
/// Which object is selected is decided by the host; the engine only
/// hit-tests the handles and body of that one object.
pub struct EngineCore {
    pub wall_id: WallId,
    pub camera: Camera,
    pub config: FrameConfig,
    objects: HashMap<ObjectId, FrameController>,
    selected: Option<ObjectId>,
    persistence: Box<dyn Persistence>,
}

impl EngineCore {
    #[must_use]
    pub fn new(wall_id: WallId, config: FrameConfig, persistence: Box<dyn Persistence>) -> Self {
        Self { wall_id, camera: Camera::default(), config, objects: HashMap::new(), selected: None, persistence }
    }

    // --- Data inputs ---

    /// Replace every object with a snapshot of the wall.
    pub fn load_snapshot(&mut self, images: Vec<FramedImage>) {
        self.objects.clear();
        self.selected = None;
        for image in images {
            self.apply_create(image);
        }
    }

    /// Add (or replace) an object. Objects from another wall are ignored.
    pub fn apply_create(&mut self, image: FramedImage) {
        if image.wall_id != self.wall_id {
            tracing::debug!(id = %image.id, wall = %image.wall_id, "image for another wall ignored");
            return;
        }
        self.objects.insert(image.id, FrameController::new(image, self.config));
    }

    /// Apply an external update. Returns whether it took effect.
    pub fn apply_update(&mut self, id: &ObjectId, fields: &TransformPatch) -> bool {
        match self.objects.get_mut(id) {
            Some(ctrl) => ctrl.apply_remote(fields),
            None => false,
        }
    }

    pub fn apply_delete(&mut self, id: &ObjectId) {
        self.objects.remove(id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
    }

    /// Hand a render sink to one object's controller.
    pub fn attach_render(&mut self, id: &ObjectId, sink: Box<dyn RenderSink>) -> bool {
        match self.objects.get_mut(id) {
            Some(ctrl) => {
                ctrl.attach_render(sink);
                true
            }
            None => false,
        }
    }

    // --- Selection ---

    /// Change the edit target. A gesture in progress on the old target is
    /// committed first.
    pub fn select(&mut self, id: Option<ObjectId>) -> Vec<Action> {
        if id == self.selected {
            return vec![];
        }
        let mut actions = self.finish_gesture();

        if let Some(prev) = self.selected.take().and_then(|prev| self.objects.get_mut(&prev)) {
            let was_editing = prev.is_editing();
            prev.set_selected(false);
            if was_editing {
                actions.push(Action::EditingModeChanged { id: prev.id(), editing: false });
            }
        }
        if let Some(ctrl) = id.and_then(|id| self.objects.get_mut(&id)) {
            ctrl.set_selected(true);
            self.selected = Some(ctrl.id());
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return vec![];
        }
        let world = self.camera.screen_to_world(screen_pt);
        let camera = self.camera;
        let Some(ctrl) = self.target_mut() else {
            return vec![];
        };
        let Some(part) = hit_test(world, ctrl.image(), ctrl.is_editing(), &camera) else {
            return vec![];
        };
        if !ctrl.on_pointer_down(part, world) {
            return vec![];
        }
        vec![Action::SetCursor(active_cursor(part).to_owned())]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let camera = self.camera;
        let Some(ctrl) = self.target_mut() else {
            return vec![];
        };
        if !ctrl.input().is_idle() {
            return if ctrl.on_pointer_move(world) { vec![Action::RenderNeeded] } else { vec![] };
        }
        let cursor = match hit_test(world, ctrl.image(), ctrl.is_editing(), &camera) {
            Some(part) => hover_cursor(part),
            None => "default",
        };
        vec![Action::SetCursor(cursor.to_owned())]
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return vec![];
        }
        self.finish_gesture()
    }

    /// The pointer left the wall. Any gesture in progress commits as on pointer-up.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.finish_gesture()
    }

    /// Toggle editing mode when the double-click lands on the selected object.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let camera = self.camera;
        let Some(ctrl) = self.target_mut() else {
            return vec![];
        };
        if hit_test(world, ctrl.image(), ctrl.is_editing(), &camera).is_none() {
            return vec![];
        }
        let editing = ctrl.toggle_editing_mode();
        vec![Action::EditingModeChanged { id: ctrl.id(), editing }, Action::RenderNeeded]
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.camera.zoom_in(self.config.zoom_step, self.config.min_zoom, self.config.max_zoom);
        vec![Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.camera.zoom_out(self.config.zoom_step, self.config.min_zoom, self.config.max_zoom);
        vec![Action::RenderNeeded]
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        self.camera.set_zoom(zoom, self.config.min_zoom, self.config.max_zoom);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.selected
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&FramedImage> {
        self.objects.get(id).map(FrameController::image)
    }

    #[must_use]
    pub fn controller(&self, id: &ObjectId) -> Option<&FrameController> {
        self.objects.get(id)
    }

    /// The active gesture on the edit target, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<DragKind> {
        self.selected.and_then(|id| self.objects.get(&id)).and_then(|ctrl| ctrl.input().kind())
    }

    /// Every committed image, bottom to top.
    #[must_use]
    pub fn images(&self) -> Vec<&FramedImage> {
        let mut images: Vec<&FramedImage> = self.objects.values().map(FrameController::image).collect();
        images.sort_by_key(|img| (img.order, img.id));
        images
    }

    // --- Internals ---

    fn target_mut(&mut self) -> Option<&mut FrameController> {
        self.selected.and_then(|id| self.objects.get_mut(&id))
    }

    fn finish_gesture(&mut self) -> Vec<Action> {
        let Some(ctrl) = self.selected.and_then(|id| self.objects.get_mut(&id)) else {
            return vec![];
        };
        match ctrl.on_pointer_up(self.persistence.as_mut()) {
            Some(fields) => vec![
                Action::Persisted { id: ctrl.id(), fields },
                Action::SetCursor("default".to_owned()),
                Action::RenderNeeded,
            ],
            None => vec![],
        }
    }
}

fn resize_cursor(corner: HandleCorner) -> &'static str {
    match corner {
        HandleCorner::TopLeft | HandleCorner::BottomRight => "nwse-resize",
        HandleCorner::TopRight | HandleCorner::BottomLeft => "nesw-resize",
    }
}

fn hover_cursor(part: HitPart) -> &'static str {
    match part {
        HitPart::Body => "move",
        HitPart::BorderHandle(corner) | HitPart::ImageHandle(corner) => resize_cursor(corner),
        HitPart::RotateHandle | HitPart::BorderRotateHandle => "grab",
    }
}

fn active_cursor(part: HitPart) -> &'static str {
    match part {
        HitPart::RotateHandle | HitPart::BorderRotateHandle => "grabbing",
        other => hover_cursor(other),
    }
}
