//! Replay scripts: a wall snapshot plus a list of pointer and data events,
//! driven through the engine as a host would drive it.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use framing::config::FrameConfig;
use framing::doc::{FramedImage, ImageKind, ObjectId, TransformPatch, WallId};
use framing::engine::{Action, EngineCore};
use framing::geometry::{Dimensions, Point};
use framing::input::Button;
use framing::persist::Persistence;
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub wall_id: WallId,
    #[serde(default)]
    pub images: Vec<FramedImage>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One host event. Pointer coordinates are screen pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    /// Place a new photo or sticker with default framing.
    Place {
        #[serde(default)]
        id: Option<ObjectId>,
        #[serde(default)]
        kind: ImageKind,
        original_width: f64,
        original_height: f64,
        x: f64,
        y: f64,
    },
    Select {
        #[serde(default)]
        id: Option<ObjectId>,
    },
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    PointerLeave,
    DoubleClick {
        x: f64,
        y: f64,
    },
    Zoom {
        value: f64,
    },
    RemoteUpdate {
        id: ObjectId,
        fields: TransformPatch,
    },
    Delete {
        id: ObjectId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub events: usize,
    pub persisted: usize,
}

/// Final committed images (bottom to top) and what happened on the way.
#[derive(Debug)]
pub struct Replayed {
    pub images: Vec<FramedImage>,
    pub summary: ReplaySummary,
}

/// Run every event of `script` through a fresh engine.
pub fn replay(script: Script, config: FrameConfig, persistence: Box<dyn Persistence>) -> Result<Replayed, CliError> {
    let mut engine = EngineCore::new(script.wall_id, config, persistence);
    engine.load_snapshot(script.images);

    let mut summary = ReplaySummary::default();
    for (index, event) in script.events.into_iter().enumerate() {
        let actions = apply(&mut engine, event, &config)?;
        tracing::trace!(index, ?actions, "event replayed");
        summary.events += 1;
        summary.persisted += actions.iter().filter(|a| matches!(a, Action::Persisted { .. })).count();
    }

    let images = engine.images().into_iter().cloned().collect();
    Ok(Replayed { images, summary })
}

fn apply(engine: &mut EngineCore, event: Event, config: &FrameConfig) -> Result<Vec<Action>, CliError> {
    let actions = match event {
        Event::Place { id, kind, original_width, original_height, x, y } => {
            let mut image = FramedImage::new_placed(
                engine.wall_id,
                kind,
                Dimensions::new(original_width, original_height),
                Point::new(x, y),
                config,
            );
            if let Some(id) = id {
                image.id = id;
            }
            engine.apply_create(image);
            vec![Action::RenderNeeded]
        }
        Event::Select { id } => {
            if let Some(id) = id {
                require(engine, id)?;
            }
            engine.select(id)
        }
        Event::PointerDown { x, y } => engine.on_pointer_down(Point::new(x, y), Button::Primary),
        Event::PointerMove { x, y } => engine.on_pointer_move(Point::new(x, y)),
        Event::PointerUp { x, y } => engine.on_pointer_up(Point::new(x, y), Button::Primary),
        Event::PointerLeave => engine.on_pointer_leave(),
        Event::DoubleClick { x, y } => engine.on_double_click(Point::new(x, y)),
        Event::Zoom { value } => engine.set_zoom(value),
        Event::RemoteUpdate { id, fields } => {
            require(engine, id)?;
            if engine.apply_update(&id, &fields) { vec![Action::RenderNeeded] } else { vec![] }
        }
        Event::Delete { id } => {
            require(engine, id)?;
            engine.apply_delete(&id);
            vec![Action::RenderNeeded]
        }
    };
    Ok(actions)
}

fn require(engine: &EngineCore, id: ObjectId) -> Result<(), CliError> {
    if engine.object(&id).is_some() { Ok(()) } else { Err(CliError::UnknownObject(id)) }
}
