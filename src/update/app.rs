//! App lifecycle handlers (mount, unmount)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::DashboardModel;

/// Handle app lifecycle messages
pub fn update_app(model: &mut DashboardModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Mount => {
            model.mount();
            // The host has no geometry before the first mount, so always send it
            super::layout_cmd(model, true, true)
        }
        AppMsg::Unmount => {
            model.unmount();
            Some(Cmd::Redraw)
        }
    }
}
