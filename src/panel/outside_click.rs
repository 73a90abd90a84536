//! Click-outside dismissal

use super::controller::TransientPanelState;
use crate::layout::HitTarget;

/// Whether a document pointer-down on `target` should close the panel.
///
/// Only an open, rendered, unlocked panel is dismissible, and only by a press
/// landing outside every sidebar region: either panel's content, resize
/// handle or icon rail. Both docks share that marker, so pressing inside the
/// sibling panel does not close this one.
pub fn should_close_on_pointer_down(state: &TransientPanelState, target: &HitTarget) -> bool {
    if state.is_locked || !state.is_open || !state.is_rendered() {
        return false;
    }
    !target.is_sidebar_content()
}
