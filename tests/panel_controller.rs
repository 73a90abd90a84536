//! Panel state machine tests driven through `update`

mod common;

use common::{active, mode, test_model, toggle, toggle_lock};
use fxdock::messages::{Msg, PanelMsg, PointerMsg};
use fxdock::panel::{
    PanelId, PanelMode, PanelPosition, ZLayer, MAX_PANEL_WIDTH, MIN_PANEL_WIDTH,
};
use fxdock::store::PanelPersistedState;
use fxdock::{update, Cmd};

const LEFT: PanelPosition = PanelPosition::Left;
const RIGHT: PanelPosition = PanelPosition::Right;

// ============================================================================
// Open / switch / close
// ============================================================================

#[test]
fn test_first_session_starts_closed() {
    let model = test_model();
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
    assert_eq!(mode(&model, RIGHT), PanelMode::Closed);
    assert!(!model.controller(LEFT).is_locked());
    assert!(!model.controller(RIGHT).is_locked());
}

#[test]
fn test_first_session_toggle_opens_floating() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");

    assert_eq!(mode(&model, LEFT), PanelMode::OpenFloating);
    assert_eq!(active(&model, LEFT), Some("instruments"));

    let geometry = model.geometry().unwrap();
    assert_eq!(geometry.margin_left, 0.0);
    assert_eq!(geometry.padding_left, 64.0);
}

#[test]
fn test_sub_panel_exclusivity() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");
    toggle(&mut model, LEFT, "watchlist");
    assert_eq!(active(&model, LEFT), Some("watchlist"));
    assert_eq!(mode(&model, LEFT), PanelMode::OpenFloating);

    // Toggling the active one closes the panel
    toggle(&mut model, LEFT, "watchlist");
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
    assert_eq!(active(&model, LEFT), None);
}

#[test]
fn test_panels_are_independent() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "layers");
    toggle(&mut model, RIGHT, "alerts");
    assert_eq!(active(&model, LEFT), Some("layers"));
    assert_eq!(active(&model, RIGHT), Some("alerts"));
}

#[test]
fn test_unknown_panel_id_is_ignored() {
    let mut model = test_model();
    let cmd = toggle(&mut model, LEFT, "settings");
    assert_eq!(cmd, None);
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
}

#[test]
fn test_close_message() {
    let mut model = test_model();
    toggle(&mut model, RIGHT, "presets");
    update(&mut model, Msg::Panel(RIGHT, PanelMsg::Close));
    assert_eq!(mode(&model, RIGHT), PanelMode::Closed);
}

// ============================================================================
// Lock
// ============================================================================

#[test]
fn test_lock_while_open_persists_full_record() {
    let mut model = test_model();
    toggle(&mut model, RIGHT, "settings");
    toggle_lock(&mut model, RIGHT);

    assert_eq!(mode(&model, RIGHT), PanelMode::OpenLocked);
    assert_eq!(
        model.store.panel(RIGHT),
        PanelPersistedState {
            is_open: true,
            active_panel: Some(PanelId::from("settings")),
            locked: true,
        }
    );
    assert!(model.store.locks().right);
    assert!(!model.store.locks().left);
}

#[test]
fn test_lock_emits_content_geometry() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");
    let cmd = toggle_lock(&mut model, LEFT).unwrap();

    let geometry = cmd.content_geometry().expect("lock moves the content");
    assert_eq!(geometry.margin_left, 400.0);
    assert_eq!(geometry.padding_left, 0.0);
    assert!(cmd.needs_redraw());
}

#[test]
fn test_unlock_keeps_panel_open() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");
    toggle_lock(&mut model, LEFT);
    toggle_lock(&mut model, LEFT);

    assert_eq!(mode(&model, LEFT), PanelMode::OpenFloating);
    assert_eq!(active(&model, LEFT), Some("instruments"));
    assert!(!model.store.panel(LEFT).locked);
}

#[test]
fn test_closed_lock_keeps_lock_bit() {
    let mut model = test_model();
    toggle_lock(&mut model, LEFT);
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
    assert!(model.controller(LEFT).is_locked());

    // Opening a locked panel goes straight to OpenLocked
    toggle(&mut model, LEFT, "watchlist");
    assert_eq!(mode(&model, LEFT), PanelMode::OpenLocked);
}

#[test]
fn test_z_layers() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");
    toggle_lock(&mut model, LEFT);
    toggle(&mut model, RIGHT, "settings");

    // A floating panel renders above a locked sibling
    assert!(model.controller(RIGHT).z_layer() > model.controller(LEFT).z_layer());
    assert_eq!(model.controller(LEFT).z_layer(), ZLayer::Docked);
}

// ============================================================================
// Width
// ============================================================================

#[test]
fn test_set_width_clamps() {
    let mut model = test_model();
    update(&mut model, Msg::Panel(LEFT, PanelMsg::SetWidth(10.0)));
    assert_eq!(model.controller(LEFT).width(), MIN_PANEL_WIDTH);
    update(&mut model, Msg::Panel(LEFT, PanelMsg::SetWidth(9000.0)));
    assert_eq!(model.controller(LEFT).width(), MAX_PANEL_WIDTH);
    update(&mut model, Msg::Panel(LEFT, PanelMsg::SetWidth(f32::NAN)));
    assert_eq!(model.controller(LEFT).width(), MIN_PANEL_WIDTH);
}

#[test]
fn test_drag_sequence_stays_in_range() {
    let mut model = test_model();
    toggle(&mut model, RIGHT, "settings");
    update(&mut model, Msg::Panel(RIGHT, PanelMsg::StartResize { x: 1040.0 }));

    for x in [900.0, 2000.0, -500.0, 1100.0, 1040.0, 0.0, 1440.0] {
        update(&mut model, Msg::Pointer(PointerMsg::Move { x, y: 300.0 }));
        let width = model.controller(RIGHT).width();
        assert!(
            (MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH).contains(&width),
            "width {} out of range after move to {}",
            width,
            x
        );
    }
}

#[test]
fn test_right_drag_direction() {
    let mut model = test_model();
    toggle(&mut model, RIGHT, "settings");
    update(&mut model, Msg::Panel(RIGHT, PanelMsg::StartResize { x: 1040.0 }));

    // Moving the inner edge left widens a right panel
    update(&mut model, Msg::Pointer(PointerMsg::Move { x: 940.0, y: 300.0 }));
    assert_eq!(model.controller(RIGHT).width(), 500.0);
}

#[test]
fn test_locked_resize_moves_content() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");
    toggle_lock(&mut model, LEFT);
    update(&mut model, Msg::Panel(LEFT, PanelMsg::StartResize { x: 400.0 }));

    let cmd = update(&mut model, Msg::Pointer(PointerMsg::Move { x: 450.0, y: 10.0 }))
        .unwrap();
    assert_eq!(cmd.content_geometry().unwrap().margin_left, 450.0);
}

#[test]
fn test_width_is_not_persisted() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");
    toggle_lock(&mut model, LEFT);
    let before = model.store.get();
    update(&mut model, Msg::Panel(LEFT, PanelMsg::SetWidth(520.0)));
    assert_eq!(model.store.get(), before);
}

// ============================================================================
// Rail clicks
// ============================================================================

#[test]
fn test_rail_button_click_toggles() {
    let mut model = test_model();

    // Second button on the left rail
    let cmd = update(&mut model, Msg::pointer_down(30.0, 60.0));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(active(&model, LEFT), Some("watchlist"));

    update(&mut model, Msg::pointer_down(30.0, 60.0));
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
}

#[test]
fn test_right_rail_click_keeps_left_floating_open() {
    let mut model = test_model();
    toggle(&mut model, LEFT, "instruments");

    update(&mut model, Msg::pointer_down(1420.0, 10.0));
    assert_eq!(active(&model, RIGHT), Some("settings"));
    assert_eq!(mode(&model, LEFT), PanelMode::OpenFloating);
}

#[test]
fn test_empty_rail_space_does_nothing() {
    let mut model = test_model();
    let cmd = update(&mut model, Msg::pointer_down(30.0, 800.0));
    assert_eq!(cmd, None);
    assert_eq!(mode(&model, LEFT), PanelMode::Closed);
}
