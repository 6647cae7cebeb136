//! Persistence that appends one JSON object per line to a shared writer.

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;

use framing::doc::{FramedImage, ObjectId, TransformPatch, WallId};
use framing::persist::Persistence;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistRecord<'a> {
    image_id: ObjectId,
    wall_id: WallId,
    fields: &'a TransformPatch,
}

#[derive(Serialize)]
struct FinalImages<'a> {
    images: &'a [FramedImage],
}

/// Writes every persistence call as a JSON line. Write failures are logged
/// and counted; the engine never waits on them.
pub struct JsonLinesPersistence<W: Write> {
    out: Rc<RefCell<W>>,
    failures: Rc<Cell<usize>>,
}

impl<W: Write> JsonLinesPersistence<W> {
    pub fn new(out: Rc<RefCell<W>>) -> Self {
        Self { out, failures: Rc::new(Cell::new(0)) }
    }

    /// Shared counter of failed writes.
    pub fn failures(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.failures)
    }
}

impl<W: Write> Persistence for JsonLinesPersistence<W> {
    fn persist_transform(&mut self, image_id: ObjectId, wall_id: WallId, fields: &TransformPatch) {
        let record = PersistRecord { image_id, wall_id, fields };
        if let Err(e) = write_line(&mut *self.out.borrow_mut(), &record) {
            tracing::warn!(%image_id, error = %e, "failed to write persistence record");
            self.failures.set(self.failures.get() + 1);
        }
    }
}

/// Append the final image list as the last line.
pub fn write_images<W: Write>(out: &mut W, images: &[FramedImage]) -> Result<(), serde_json::Error> {
    write_line(out, &FinalImages { images })
}

fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), serde_json::Error> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n").map_err(serde_json::Error::io)
}
