//! Onboarding tour handlers

use crate::commands::Cmd;
use crate::messages::TourMsg;
use crate::model::DashboardModel;

/// Update function for tour messages
pub fn update_tour(model: &mut DashboardModel, msg: TourMsg) -> Option<Cmd> {
    let changed = match msg {
        TourMsg::Start => {
            model.tour.start();
            model.evaluate_tour()
        }
        TourMsg::CompleteStep(step_id) => {
            if !model.tour.complete_step(&step_id) {
                tracing::debug!(step = %step_id, "Ignoring unknown or completed tour step");
                return None;
            }
            model.store.set_onboarding(model.tour.to_record());
            model.evaluate_tour()
        }
    };
    super::finish(model, changed)
}
