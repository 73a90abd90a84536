//! Tour gate: the onboarding overlay on top of one panel's state machine
//!
//! The gate never owns panel state. It watches the tour's current step and,
//! when that step changes to one aimed at its dock, reveals the target
//! sub-panel and disables every other button on the rail. The precedence rule
//! is simple: while `TourLocked`, only the target button is interactive.

use super::progress::TourProgress;
use crate::panel::{PanelController, PanelId, PanelPosition, PanelTransition};
use crate::store::LayoutStore;

/// Interaction overlay for one rail
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TourOverlay {
    #[default]
    Normal,
    /// A tour step targets this button; all others are disabled
    TourLocked(PanelId),
}

/// What an evaluation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    /// Current step did not change
    None,
    /// Overlay changed, panel left alone
    OverlayChanged,
    /// Overlay set and the panel was commanded open
    Revealed(PanelTransition),
}

#[derive(Debug, Clone)]
pub struct TourGate {
    position: PanelPosition,
    overlay: TourOverlay,
    /// Step id seen at the last evaluation; `None` before the tour starts
    last_step: Option<String>,
}

impl TourGate {
    pub fn new(position: PanelPosition) -> Self {
        Self {
            position,
            overlay: TourOverlay::Normal,
            last_step: None,
        }
    }

    pub fn position(&self) -> PanelPosition {
        self.position
    }

    pub fn overlay(&self) -> &TourOverlay {
        &self.overlay
    }

    /// The button currently highlighted as the tour target
    pub fn target(&self) -> Option<&PanelId> {
        match &self.overlay {
            TourOverlay::TourLocked(id) => Some(id),
            TourOverlay::Normal => None,
        }
    }

    /// Whether a rail button accepts input
    pub fn is_button_enabled(&self, panel_id: &PanelId) -> bool {
        match &self.overlay {
            TourOverlay::Normal => true,
            TourOverlay::TourLocked(target) => target == panel_id,
        }
    }

    /// Whether a user toggle of `panel_id` should reach the controller.
    ///
    /// Disabled buttons are dropped, and the target button cannot close the
    /// sub-panel the tour is showing.
    pub fn permits_toggle(&self, panel_id: &PanelId, active: Option<&PanelId>) -> bool {
        if !self.is_button_enabled(panel_id) {
            return false;
        }
        match &self.overlay {
            TourOverlay::TourLocked(target) => active != Some(target),
            TourOverlay::Normal => true,
        }
    }

    /// Forget what was seen so the next evaluation starts fresh (used on mount)
    pub fn reset(&mut self) {
        self.overlay = TourOverlay::Normal;
        self.last_step = None;
    }

    /// React to the tour's current step.
    ///
    /// Edge-triggered: nothing happens unless the current step id changed
    /// since the last call, so a panel the user closed mid-step stays closed.
    /// A hidden panel sees no steps; the current step fires again once the
    /// panel renders.
    pub fn evaluate(
        &mut self,
        progress: &TourProgress,
        controller: &mut PanelController,
        store: &mut LayoutStore,
    ) -> GateAction {
        if !controller.is_rendered() {
            let changed = self.overlay != TourOverlay::Normal;
            self.reset();
            return if changed {
                GateAction::OverlayChanged
            } else {
                GateAction::None
            };
        }

        let current = progress.current_step();
        let current_id = current.map(|s| s.id.clone());
        if current_id == self.last_step {
            return GateAction::None;
        }
        self.last_step = current_id;

        let owned = current.filter(|step| {
            step.position == self.position && controller.rail().contains(&step.target)
        });

        let Some(step) = owned else {
            let changed = self.overlay != TourOverlay::Normal;
            self.overlay = TourOverlay::Normal;
            return if changed {
                GateAction::OverlayChanged
            } else {
                GateAction::None
            };
        };

        self.overlay = TourOverlay::TourLocked(step.target.clone());

        let may_take_over = match controller.active_panel() {
            None => true,
            Some(active) => progress.is_completed_target(active),
        };
        if !may_take_over {
            tracing::debug!(
                position = %self.position,
                step = %step.id,
                "Tour step highlighted, panel busy with another sub-panel"
            );
            return GateAction::OverlayChanged;
        }

        let transition = controller.reveal(&step.target, store);
        tracing::debug!(
            position = %self.position,
            step = %step.id,
            ?transition,
            "Tour revealed panel"
        );
        GateAction::Revealed(transition)
    }
}
