//! Onboarding tour tests: the gate reveals a step's target, disables the
//! other rail buttons and never fights a manual close.

mod common;

use common::{active, content_point, mode, mounted_with, test_model, toggle, toggle_lock, VIEWPORT};
use fxdock::messages::{AppMsg, Msg, TourMsg};
use fxdock::panel::{PanelId, PanelMode, PanelPosition};
use fxdock::store::LayoutStore;
use fxdock::tour::TourOverlay;
use fxdock::update;

const LEFT: PanelPosition = PanelPosition::Left;
const RIGHT: PanelPosition = PanelPosition::Right;

fn start(model: &mut fxdock::DashboardModel) {
    update(model, Msg::Tour(TourMsg::Start));
}

#[test]
fn test_mount_does_not_start_tour() {
    let model = test_model();
    assert!(!model.tour.is_active());
    assert_eq!(model.gate(LEFT).overlay(), &TourOverlay::Normal);
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
}

#[test]
fn test_start_reveals_first_target() {
    let mut model = test_model();
    start(&mut model);

    assert_eq!(model.tour.current_step_id(), Some("pick-instrument"));
    assert_eq!(active(&model, LEFT), Some("instruments"));
    assert_eq!(
        model.gate(LEFT).overlay(),
        &TourOverlay::TourLocked(PanelId::from("instruments"))
    );
    assert_eq!(model.gate(RIGHT).overlay(), &TourOverlay::Normal);
}

#[test]
fn test_non_target_buttons_are_disabled() {
    let mut model = test_model();
    start(&mut model);

    assert!(!model.gate(LEFT).is_button_enabled(&PanelId::from("watchlist")));
    assert_eq!(toggle(&mut model, LEFT, "watchlist"), None);
    assert_eq!(active(&model, LEFT), Some("instruments"));

    // The other rail is unaffected
    toggle(&mut model, RIGHT, "alerts");
    assert_eq!(active(&model, RIGHT), Some("alerts"));
}

#[test]
fn test_target_button_does_not_close() {
    let mut model = test_model();
    start(&mut model);
    toggle(&mut model, LEFT, "instruments");
    assert_eq!(mode(&model, LEFT), PanelMode::OpenFloating);
    assert_eq!(active(&model, LEFT), Some("instruments"));
}

#[test]
fn test_completing_steps_walks_the_script() {
    let mut model = test_model();
    start(&mut model);

    update(&mut model, Msg::complete_step("pick-instrument"));
    assert_eq!(active(&model, LEFT), Some("watchlist"));

    update(&mut model, Msg::complete_step("build-watchlist"));
    assert_eq!(model.gate(LEFT).overlay(), &TourOverlay::Normal);
    assert_eq!(active(&model, RIGHT), Some("settings"));
    // The gate lifts its lock but does not close what the user is looking at
    assert_eq!(active(&model, LEFT), Some("watchlist"));

    update(&mut model, Msg::complete_step("chart-settings"));
    update(&mut model, Msg::complete_step("save-preset"));
    assert!(model.tour.is_finished());
    assert_eq!(model.gate(RIGHT).overlay(), &TourOverlay::Normal);
}

#[test]
fn test_completion_is_persisted() {
    let mut model = test_model();
    start(&mut model);
    update(&mut model, Msg::complete_step("pick-instrument"));
    assert!(model
        .store
        .onboarding()
        .completed_steps
        .contains("pick-instrument"));
}

#[test]
fn test_completing_twice_is_idempotent() {
    let mut model = test_model();
    start(&mut model);
    update(&mut model, Msg::complete_step("pick-instrument"));
    update(&mut model, Msg::Panel(LEFT, fxdock::messages::PanelMsg::Close));

    let cmd = update(&mut model, Msg::complete_step("pick-instrument"));
    assert_eq!(cmd, None);
    assert_eq!(model.tour.current_step_id(), Some("build-watchlist"));
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
}

#[test]
fn test_unknown_step_is_ignored() {
    let mut model = test_model();
    start(&mut model);
    assert_eq!(update(&mut model, Msg::complete_step("no-such-step")), None);
    assert_eq!(model.tour.current_step_id(), Some("pick-instrument"));
}

#[test]
fn test_manual_close_is_respected() {
    let mut model = test_model();
    start(&mut model);

    let (x, y) = content_point();
    update(&mut model, Msg::pointer_down(x, y));
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);

    // Restarting the same step does not force the panel back open
    start(&mut model);
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
}

#[test]
fn test_busy_panel_is_not_taken_over() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "layers");
    start(&mut model);

    assert_eq!(active(&model, LEFT), Some("layers"));
    assert_eq!(model.gate(LEFT).target(), Some(&PanelId::from("instruments")));

    // The target button still opens its sub-panel
    toggle(&mut model, LEFT, "instruments");
    assert_eq!(active(&model, LEFT), Some("instruments"));
}

#[test]
fn test_reveal_on_locked_panel_writes_through() {
    let mut model = test_model();
    toggle_lock(&mut model, LEFT);
    start(&mut model);

    assert_eq!(mode(&model, LEFT), PanelMode::OpenLocked);
    let saved = model.store.panel(LEFT);
    assert!(saved.is_open && saved.locked);
    assert_eq!(saved.active_panel, Some(PanelId::from("instruments")));
}

#[test]
fn test_progress_survives_remount() {
    let store = LayoutStore::in_memory();
    let mut model = mounted_with(store, VIEWPORT);
    start(&mut model);
    update(&mut model, Msg::complete_step("pick-instrument"));

    update(&mut model, Msg::App(AppMsg::Unmount));
    update(&mut model, Msg::App(AppMsg::Mount));
    assert!(!model.tour.is_active());
    assert!(model.tour.is_completed("pick-instrument"));

    start(&mut model);
    assert_eq!(active(&model, LEFT), Some("watchlist"));
}

#[test]
fn test_tour_started_on_mobile_reveals_after_widening() {
    let mut model = mounted_with(LayoutStore::in_memory(), (800.0, 900.0));
    start(&mut model);
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
    assert_eq!(model.gate(LEFT).overlay(), &TourOverlay::Normal);

    update(&mut model, Msg::resize_viewport(VIEWPORT.0, VIEWPORT.1));
    assert_eq!(active(&model, LEFT), Some("instruments"));
    assert_eq!(
        model.gate(LEFT).overlay(),
        &TourOverlay::TourLocked(PanelId::from("instruments"))
    );
}
