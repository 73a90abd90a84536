//! Viewport and content-region handlers

use crate::commands::Cmd;
use crate::messages::ViewportMsg;
use crate::model::DashboardModel;
use crate::panel::PanelPosition;

/// Update function for viewport messages
pub fn update_viewport(model: &mut DashboardModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::Resized { width, height } => {
            let size_changed = model.viewport != (width, height);
            model.viewport = (width, height);

            let before = [model.left.snapshot(), model.right.snapshot()];
            for position in PanelPosition::ALL {
                model.controller_mut(position).viewport_resized(width);
            }
            let after = [model.left.snapshot(), model.right.snapshot()];
            let tour_changed = model.evaluate_tour();

            super::finish(model, size_changed || before != after || tour_changed)
        }
        ViewportMsg::ContentMounted(mounted) => {
            let geometry_changed = model.layout.set_content_mounted(mounted);
            super::layout_cmd(model, false, geometry_changed)
        }
    }
}
