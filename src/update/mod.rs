//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod panel;
mod pointer;
mod tour;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::DashboardModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use panel::update_panel;
pub use pointer::update_pointer;
pub use tour::update_tour;
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut DashboardModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut DashboardModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(position, m) => panel::update_panel(model, position, m),
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Viewport(m) => viewport::update_viewport(model, m),
        Msg::Tour(m) => tour::update_tour(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Publish both panels to the layout context and build the resulting command
pub(crate) fn finish(model: &mut DashboardModel, changed: bool) -> Option<Cmd> {
    let geometry_changed = model.publish_layout();
    layout_cmd(model, changed, geometry_changed)
}

/// `ApplyContentGeometry` + `Redraw` when the geometry moved, `Redraw` for any
/// other visible change, nothing otherwise
pub(crate) fn layout_cmd(
    model: &DashboardModel,
    changed: bool,
    geometry_changed: bool,
) -> Option<Cmd> {
    match model.geometry() {
        Some(geometry) if geometry_changed => Some(Cmd::batch(vec![
            Cmd::ApplyContentGeometry(*geometry),
            Cmd::Redraw,
        ])),
        _ if changed || geometry_changed => Some(Cmd::Redraw),
        _ => None,
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel state and logs diffs for debugging.
/// Filters out pointer moves from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut DashboardModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::PointerMsg;

    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Panel::Left::Toggle(PanelId("instruments"))`
/// - `Viewport::Resized { width: 800.0, height: 600.0 }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(position, m) => format!("Panel::{:?}::{:?}", position, m),
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::Tour(m) => format!("Tour::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
