//! Document pointer handlers
//!
//! A pointer event is hit-tested once, then delivered to every panel that
//! currently holds a document listener of that kind.

use super::panel::apply;
use crate::commands::Cmd;
use crate::input::{ListenerKind, ListenerOwner};
use crate::layout::{HitTarget, Point};
use crate::messages::{PanelMsg, PointerMsg};
use crate::model::DashboardModel;

/// Update function for pointer messages
pub fn update_pointer(model: &mut DashboardModel, msg: PointerMsg) -> Option<Cmd> {
    let changed = match msg {
        PointerMsg::Down { x, y } => pointer_down(model, Point::new(x, y)),
        PointerMsg::Move { x, .. } => {
            let mut changed = false;
            for owner in model.listeners.owners(ListenerKind::PointerMove) {
                let ListenerOwner::Panel(position) = owner;
                changed |= apply(model, position, PanelMsg::UpdateResize { x });
            }
            changed
        }
        PointerMsg::Up { .. } => {
            let mut changed = false;
            for owner in model.listeners.owners(ListenerKind::PointerUp) {
                let ListenerOwner::Panel(position) = owner;
                changed |= apply(model, position, PanelMsg::EndResize);
            }
            changed
        }
    };
    super::finish(model, changed)
}

fn pointer_down(model: &mut DashboardModel, point: Point) -> bool {
    let target = model.hit_test(point);
    tracing::trace!(?target, x = point.x, y = point.y, "Pointer down");

    let mut changed = match &target {
        HitTarget::RailButton { position, panel_id } => {
            apply(model, *position, PanelMsg::Toggle(panel_id.clone()))
        }
        HitTarget::ResizeHandle(position) => {
            apply(model, *position, PanelMsg::StartResize { x: point.x })
        }
        _ => false,
    };

    for owner in model.listeners.owners(ListenerKind::PointerDown) {
        let ListenerOwner::Panel(position) = owner;
        let parts = model.parts(position);
        changed |= parts.controller.pointer_down(&target, parts.store).is_change();
    }
    changed
}
