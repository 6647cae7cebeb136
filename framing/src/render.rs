//! Render boundary: where hot and committed transforms are pushed for display.
//!
//! The core only computes numbers. A [`RenderSink`] receives them and mutates
//! whatever visual handles the host owns. Sinks must tolerate being called
//! before their visual elements exist (the corrector can run before first
//! paint); [`NullSink`] is the unmounted default.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::geometry::{Dimensions, Point};
use crate::session::TransformSession;

/// A visual element of a framed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The image, positioned inside the border.
    Image,
    /// The rotating, resizable border frame.
    Border,
    /// The outer container that places the border on the wall.
    Container,
}

/// Receiver for style mutations.
pub trait RenderSink {
    fn set_position(&mut self, layer: Layer, position: Point);
    fn set_dimensions(&mut self, layer: Layer, dimensions: Dimensions);
    fn set_rotation(&mut self, layer: Layer, angle: f64);
    /// Pivot for `layer`'s rotation, relative to its own top-left.
    fn set_transform_origin(&mut self, layer: Layer, origin: Point);
}

/// Sink with no visual target; every call is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn set_position(&mut self, _layer: Layer, _position: Point) {}
    fn set_dimensions(&mut self, _layer: Layer, _dimensions: Dimensions) {}
    fn set_rotation(&mut self, _layer: Layer, _angle: f64) {}
    fn set_transform_origin(&mut self, _layer: Layer, _origin: Point) {}
}

/// Push the hot values of `session` to `sink`.
///
/// The image pivots on the border center, so its transform origin is the
/// border's half-extent measured from the image's own top-left.
pub fn paint_hot(session: &TransformSession, sink: &mut dyn RenderSink) {
    let border = session.border_dimensions.hot();
    let offset = session.image_offset.hot();

    sink.set_position(Layer::Container, session.border_position.hot());
    sink.set_dimensions(Layer::Border, border);
    sink.set_rotation(Layer::Border, session.border_rotation.hot());

    sink.set_position(Layer::Image, offset);
    sink.set_dimensions(Layer::Image, session.image_dimensions.hot());
    sink.set_transform_origin(Layer::Image, border.half() - offset);
    sink.set_rotation(Layer::Image, session.image_rotation.hot());
}
