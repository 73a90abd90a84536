//! Panel system - the two docked side panels of the dashboard
//!
//! Each screen edge (left, right) carries an always-visible icon rail and a
//! collapsible panel showing one sub-panel at a time. Panels can float above
//! the main content or be locked, in which case they reserve their width.
//!
//! ## Architecture
//!
//! - `PanelPosition`: Left or Right dock edge, also the persistence namespace
//! - `PanelId`: sub-panel identifier (instruments, settings, ...)
//! - `PanelRail`: the buttons a dock offers
//! - `PanelController`: state machine for one dock (open/lock/active/resize)
//! - `PanelSnapshot`: what a dock exposes to its sibling and the geometry resolver
//!
//! ## Integration
//!
//! - Persistence via `store::LayoutStore`
//! - Geometry via `layout::LayoutContext`
//! - Document listeners via `input::DocumentListeners`
//! - Tour overrides via `tour::TourGate`

mod controller;
mod outside_click;
mod position;
mod resize;
mod snapshot;

pub use controller::{PanelController, PanelMode, PanelTransition, TransientPanelState, ZLayer};
pub use outside_click::should_close_on_pointer_down;
pub use position::{
    clamp_width, PanelId, PanelPosition, PanelRail, RailButton, DEFAULT_PANEL_WIDTH,
    MAX_PANEL_WIDTH, MIN_PANEL_WIDTH, MOBILE_BREAKPOINT, RAIL_BUTTON_HEIGHT, RAIL_WIDTH,
};
pub use resize::ResizeSession;
pub use snapshot::PanelSnapshot;
