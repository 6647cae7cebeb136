//! Input model: mouse buttons, drag kinds, and the per-object gesture state machine.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up (or pointer-leave). Each dragging variant carries the context
//! needed to recompute the hot transform from the pointer's total travel
//! since the gesture began.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::hit::HandleCorner;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// What a drag gesture changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Moving the image inside its border.
    Position,
    BorderResize,
    ImageResize,
    /// Rotating the image about the border center.
    Rotation,
    BorderRotation,
}

/// Gesture state for one framed image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The image body is being dragged inside its border.
    DraggingImage {
        /// Wall-space pointer position at pointer-down.
        start: Point,
    },
    /// A border corner handle is being dragged.
    ResizingBorder {
        corner: HandleCorner,
        /// Wall-space pointer position at pointer-down.
        start: Point,
    },
    /// An image corner handle is being dragged.
    ResizingImage {
        corner: HandleCorner,
        /// Wall-space pointer position at pointer-down.
        start: Point,
    },
    /// The image rotate handle is being dragged.
    RotatingImage {
        /// Wall-space rotation pivot (the border center).
        pivot: Point,
        start: Point,
    },
    /// The border rotate handle is being dragged.
    RotatingBorder {
        /// Wall-space rotation pivot (the border center).
        pivot: Point,
        start: Point,
    },
}

impl InputState {
    /// The kind of the active drag, or `None` when idle.
    #[must_use]
    pub fn kind(&self) -> Option<DragKind> {
        match self {
            Self::Idle => None,
            Self::DraggingImage { .. } => Some(DragKind::Position),
            Self::ResizingBorder { .. } => Some(DragKind::BorderResize),
            Self::ResizingImage { .. } => Some(DragKind::ImageResize),
            Self::RotatingImage { .. } => Some(DragKind::Rotation),
            Self::RotatingBorder { .. } => Some(DragKind::BorderRotation),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
