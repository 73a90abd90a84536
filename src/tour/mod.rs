//! Onboarding tour
//!
//! The tour content itself lives elsewhere; this module only tracks which
//! step is current, which are done, and how a step aimed at a dock's rail
//! overrides that dock's interaction.

mod gate;
mod progress;

pub use gate::{GateAction, TourGate, TourOverlay};
pub use progress::{TourProgress, TourScript, TourStep};
