//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use fxdock::messages::{AppMsg, Msg, PanelMsg};
use fxdock::panel::{PanelId, PanelMode, PanelPosition};
use fxdock::store::LayoutStore;
use fxdock::{update, Cmd, DashboardConfig, DashboardModel};

pub const VIEWPORT: (f32, f32) = (1440.0, 900.0);

/// A mounted desktop model over in-memory storage
pub fn test_model() -> DashboardModel {
    mounted_with(LayoutStore::in_memory(), VIEWPORT)
}

/// A mounted model over the given store and viewport
pub fn mounted_with(store: LayoutStore, viewport: (f32, f32)) -> DashboardModel {
    let mut model = DashboardModel::new(DashboardConfig::default(), store, viewport);
    update(&mut model, Msg::App(AppMsg::Mount));
    model
}

pub fn toggle(model: &mut DashboardModel, position: PanelPosition, id: &str) -> Option<Cmd> {
    update(model, Msg::toggle(position, id))
}

pub fn toggle_lock(model: &mut DashboardModel, position: PanelPosition) -> Option<Cmd> {
    update(model, Msg::toggle_lock(position))
}

pub fn set_width(model: &mut DashboardModel, position: PanelPosition, width: f32) {
    update(model, Msg::Panel(position, PanelMsg::SetWidth(width)));
}

pub fn mode(model: &DashboardModel, position: PanelPosition) -> PanelMode {
    model.controller(position).mode()
}

pub fn active(model: &DashboardModel, position: PanelPosition) -> Option<&str> {
    model.controller(position).active_panel().map(PanelId::as_str)
}

/// Put one side into the given (locked, open) combination
pub fn arrange(model: &mut DashboardModel, position: PanelPosition, locked: bool, open: bool) {
    let first = model.controller(position).rail().buttons[0].id.clone();
    if open {
        update(model, Msg::toggle(position, first));
    }
    if locked {
        update(model, Msg::toggle_lock(position));
    }
}

/// A point in the middle of the main content
pub fn content_point() -> (f64, f64) {
    ((VIEWPORT.0 / 2.0) as f64, (VIEWPORT.1 / 2.0) as f64)
}
