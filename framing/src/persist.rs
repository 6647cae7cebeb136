//! Persistence boundary.
//!
//! The core calls [`Persistence::persist_transform`] exactly once per
//! finished gesture with the fields that gesture owns. Implementations must
//! be idempotent and last-write-wins; the core neither retries nor waits.

use crate::doc::{ObjectId, TransformPatch, WallId};

pub trait Persistence {
    fn persist_transform(&mut self, image_id: ObjectId, wall_id: WallId, fields: &TransformPatch);
}

/// One recorded persistence call.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistCall {
    pub image_id: ObjectId,
    pub wall_id: WallId,
    pub fields: TransformPatch,
}

/// In-memory persistence that keeps every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPersistence {
    pub calls: Vec<PersistCall>,
}

impl RecordingPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for RecordingPersistence {
    fn persist_transform(&mut self, image_id: ObjectId, wall_id: WallId, fields: &TransformPatch) {
        self.calls.push(PersistCall { image_id, wall_id, fields: fields.clone() });
    }
}
