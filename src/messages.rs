//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::panel::{PanelId, PanelPosition};

/// Messages addressed to one panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Rail button pressed
    Toggle(PanelId),
    /// Lock button pressed
    ToggleLock,
    /// Close button pressed
    Close,
    /// Set the width programmatically (clamped, never persisted)
    SetWidth(f32),
    /// Pointer pressed on the resize handle
    StartResize { x: f64 },
    /// Pointer moved during a resize drag
    UpdateResize { x: f64 },
    /// Pointer released after a resize drag
    EndResize,
}

/// Document-level pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

/// Window / container changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportMsg {
    /// Viewport resized (logical pixels)
    Resized { width: f32, height: f32 },
    /// The main content region mounted or unmounted
    ContentMounted(bool),
}

/// Onboarding tour messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourMsg {
    /// Start (or resume) the tour at the first incomplete step
    Start,
    /// The user finished the content of a step
    CompleteStep(String),
}

/// Lifecycle messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Mount both panels (hydrates from the store)
    Mount,
    /// Unmount both panels, releasing every listener
    Unmount,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Panel messages (toggle, lock, resize)
    Panel(PanelPosition, PanelMsg),
    /// Pointer messages (outside click, drag)
    Pointer(PointerMsg),
    /// Viewport messages (breakpoints, content mount)
    Viewport(ViewportMsg),
    /// Tour messages
    Tour(TourMsg),
    /// App lifecycle messages
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn toggle(position: PanelPosition, panel_id: impl Into<PanelId>) -> Self {
        Msg::Panel(position, PanelMsg::Toggle(panel_id.into()))
    }

    pub fn toggle_lock(position: PanelPosition) -> Self {
        Msg::Panel(position, PanelMsg::ToggleLock)
    }

    pub fn pointer_down(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Down { x, y })
    }

    pub fn resize_viewport(width: f32, height: f32) -> Self {
        Msg::Viewport(ViewportMsg::Resized { width, height })
    }

    pub fn complete_step(id: impl Into<String>) -> Self {
        Msg::Tour(TourMsg::CompleteStep(id.into()))
    }
}
