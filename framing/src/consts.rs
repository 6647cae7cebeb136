//! Shared numeric constants for the framing crate.

use crate::geometry::{Corner, Edge};

// ── Border ──────────────────────────────────────────────────────

/// Border width given to a freshly placed photo.
pub const DEFAULT_BORDER_WIDTH: f64 = 250.0;

/// Border height given to a freshly placed photo.
pub const DEFAULT_BORDER_HEIGHT: f64 = 250.0;

/// Smallest border extent on either axis, in wall pixels.
pub const MIN_BORDER_SIZE: f64 = 50.0;

/// Largest border extent on either axis, in wall pixels.
pub const MAX_BORDER_SIZE: f64 = 1000.0;

// ── Scale ───────────────────────────────────────────────────────

/// Ceiling for the image scale factor relative to its intrinsic size.
pub const MAX_SCALE: f64 = 5.0;

/// Signed distances above `-COVERAGE_EPSILON` count as "on the edge".
pub const COVERAGE_EPSILON: f64 = 1e-6;

// ── Zoom ────────────────────────────────────────────────────────

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;

/// Zoom increment applied by one zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 0.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for corner and rotate handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance from the top edge to a rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

// ── Edges ───────────────────────────────────────────────────────

/// Rectangle sides in sweep order: left, top, right, bottom.
///
/// Adding `distance * multiplier` to the image offset moves that side onto a
/// point lying `distance` (negative) outside it.
pub const EDGES: [Edge; 4] = [
    Edge { from: Corner::D, to: Corner::A, x_offset_multiplier: 1.0, y_offset_multiplier: 0.0 },
    Edge { from: Corner::A, to: Corner::B, x_offset_multiplier: 0.0, y_offset_multiplier: 1.0 },
    Edge { from: Corner::B, to: Corner::C, x_offset_multiplier: -1.0, y_offset_multiplier: 0.0 },
    Edge { from: Corner::C, to: Corner::D, x_offset_multiplier: 0.0, y_offset_multiplier: -1.0 },
];
