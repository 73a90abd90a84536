//! Drag-to-resize gesture state

use super::position::{clamp_width, PanelPosition};
use crate::input::GestureGuard;

/// An in-progress resize drag
///
/// Holds the gesture's document listeners; dropping the session releases them.
#[derive(Debug)]
pub struct ResizeSession {
    /// Pointer x where the drag started (window coordinates)
    pub start_x: f64,
    /// Panel width when the drag started
    pub start_width: f32,
    _listeners: GestureGuard,
}

impl ResizeSession {
    pub fn new(start_x: f64, start_width: f32, listeners: GestureGuard) -> Self {
        Self {
            start_x,
            start_width,
            _listeners: listeners,
        }
    }

    /// Width the panel should have with the pointer at `x`.
    ///
    /// Left panels grow when the pointer moves right, right panels when it
    /// moves left.
    pub fn width_at(&self, position: PanelPosition, x: f64) -> f32 {
        let delta = (x - self.start_x) as f32;
        let raw = match position {
            PanelPosition::Left => self.start_width + delta,
            PanelPosition::Right => self.start_width - delta,
        };
        clamp_width(raw)
    }
}
