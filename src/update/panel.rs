//! Panel message handlers (rail buttons, lock, resize)

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::DashboardModel;
use crate::panel::PanelPosition;

/// Update function for panel messages
pub fn update_panel(
    model: &mut DashboardModel,
    position: PanelPosition,
    msg: PanelMsg,
) -> Option<Cmd> {
    let changed = apply(model, position, msg);
    super::finish(model, changed)
}

/// Apply a panel message without publishing. Returns true if anything changed.
pub(super) fn apply(model: &mut DashboardModel, position: PanelPosition, msg: PanelMsg) -> bool {
    let parts = model.parts(position);
    match msg {
        PanelMsg::Toggle(panel_id) => {
            if !parts
                .gate
                .permits_toggle(&panel_id, parts.controller.active_panel())
            {
                tracing::debug!(%position, panel = %panel_id, "Toggle blocked by tour overlay");
                return false;
            }
            parts.controller.toggle(&panel_id, parts.store).is_change()
        }
        PanelMsg::ToggleLock => parts.controller.toggle_lock(parts.store).is_change(),
        PanelMsg::Close => parts.controller.close(parts.store).is_change(),
        PanelMsg::SetWidth(width) => parts.controller.set_width(width),
        PanelMsg::StartResize { x } => parts.controller.begin_resize(x, parts.listeners),
        PanelMsg::UpdateResize { x } => parts.controller.drag_to(x).is_some(),
        PanelMsg::EndResize => parts.controller.end_resize(),
    }
}
