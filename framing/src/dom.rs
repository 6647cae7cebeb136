//! DOM render sink: writes transforms as inline CSS on `web-sys` elements.
//!
//! Elements are optional. Before the host mounts them (or after they are
//! detached) the corresponding writes are skipped.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::geometry::{Dimensions, Point};
use crate::render::{Layer, RenderSink};

/// Inline-style handles for the elements of one framed image.
#[derive(Debug, Clone, Default)]
pub struct ElementStyles {
    pub image: Option<HtmlElement>,
    /// Second copy of the image drawn inside the border clip.
    pub image_in_border: Option<HtmlElement>,
    pub border: Option<HtmlElement>,
    /// Decorative frame drawn over the border.
    pub styled_border: Option<HtmlElement>,
    pub container: Option<HtmlElement>,
}

impl ElementStyles {
    fn targets(&self, layer: Layer) -> [Option<&HtmlElement>; 2] {
        match layer {
            Layer::Image => [self.image.as_ref(), self.image_in_border.as_ref()],
            Layer::Border => [self.border.as_ref(), self.styled_border.as_ref()],
            Layer::Container => [self.container.as_ref(), None],
        }
    }

    fn set(&self, layer: Layer, property: &str, value: &str) {
        for element in self.targets(layer).into_iter().flatten() {
            report(property, element.style().set_property(property, value));
        }
    }
}

fn report(property: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::warn!(property, error = ?e, "style write failed");
    }
}

impl RenderSink for ElementStyles {
    fn set_position(&mut self, layer: Layer, position: Point) {
        self.set(layer, "left", &format!("{}px", position.x));
        self.set(layer, "top", &format!("{}px", position.y));
    }

    fn set_dimensions(&mut self, layer: Layer, dimensions: Dimensions) {
        self.set(layer, "width", &format!("{}px", dimensions.width));
        self.set(layer, "height", &format!("{}px", dimensions.height));
    }

    fn set_rotation(&mut self, layer: Layer, angle: f64) {
        self.set(layer, "transform", &format!("rotate({angle}rad)"));
    }

    fn set_transform_origin(&mut self, layer: Layer, origin: Point) {
        self.set(layer, "transform-origin", &format!("{}px {}px", origin.x, origin.y));
    }
}
