#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::geometry::{Point, clamp};

/// Camera state for the zoomable wall.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to wall coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a wall point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to wall distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Set the zoom factor, clamped to `[min, max]`.
    pub fn set_zoom(&mut self, zoom: f64, min: f64, max: f64) {
        self.zoom = clamp(min, max, zoom);
    }

    /// Zoom in by one `step`, clamped to `[min, max]`.
    pub fn zoom_in(&mut self, step: f64, min: f64, max: f64) {
        self.set_zoom(self.zoom + step, min, max);
    }

    /// Zoom out by one `step`, clamped to `[min, max]`.
    pub fn zoom_out(&mut self, step: f64, min: f64, max: f64) {
        self.set_zoom(self.zoom - step, min, max);
    }
}
