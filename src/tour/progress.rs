//! Onboarding tour script and progress

use std::collections::BTreeSet;

use crate::panel::{PanelId, PanelPosition};
use crate::store::OnboardingRecord;

/// One step of the onboarding tour, pointing at a rail button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStep {
    pub id: String,
    pub position: PanelPosition,
    pub target: PanelId,
}

impl TourStep {
    pub fn new(id: &str, position: PanelPosition, target: &str) -> Self {
        Self {
            id: id.to_string(),
            position,
            target: PanelId::from(target),
        }
    }
}

/// Ordered list of tour steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourScript {
    pub steps: Vec<TourStep>,
}

impl TourScript {
    pub fn new(steps: Vec<TourStep>) -> Self {
        Self { steps }
    }

    /// Stock tour of the dashboard's rails
    pub fn dashboard() -> Self {
        Self::new(vec![
            TourStep::new("pick-instrument", PanelPosition::Left, PanelId::INSTRUMENTS),
            TourStep::new("build-watchlist", PanelPosition::Left, PanelId::WATCHLIST),
            TourStep::new("chart-settings", PanelPosition::Right, PanelId::SETTINGS),
            TourStep::new("save-preset", PanelPosition::Right, PanelId::PRESETS),
        ])
    }

    pub fn step(&self, id: &str) -> Option<&TourStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Whether step `id` exists and belongs to the dock at `position`.
    /// Unknown ids are simply not owned by anyone.
    pub fn owns_step(&self, position: PanelPosition, id: &str) -> bool {
        self.step(id).is_some_and(|s| s.position == position)
    }

    pub fn is_left_sidebar_step(&self, id: &str) -> bool {
        self.owns_step(PanelPosition::Left, id)
    }

    pub fn is_right_sidebar_step(&self, id: &str) -> bool {
        self.owns_step(PanelPosition::Right, id)
    }
}

/// Where the user is in the tour
#[derive(Debug, Clone, Default)]
pub struct TourProgress {
    script: TourScript,
    active: bool,
    completed: BTreeSet<String>,
}

impl TourProgress {
    pub fn new(script: TourScript) -> Self {
        Self {
            script,
            active: false,
            completed: BTreeSet::new(),
        }
    }

    /// Restore completed steps from a persisted record. Ids the script does
    /// not know are dropped.
    pub fn with_record(mut self, record: &OnboardingRecord) -> Self {
        self.completed = record
            .completed_steps
            .iter()
            .filter(|id| self.script.step(id).is_some())
            .cloned()
            .collect();
        self
    }

    pub fn to_record(&self) -> OnboardingRecord {
        OnboardingRecord {
            completed_steps: self.completed.clone(),
        }
    }

    pub fn script(&self) -> &TourScript {
        &self.script
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn completed_steps(&self) -> &BTreeSet<String> {
        &self.completed
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Start (or resume) the tour at the first incomplete step
    pub fn start(&mut self) {
        self.active = true;
    }

    /// First incomplete step while the tour is running
    pub fn current_step(&self) -> Option<&TourStep> {
        if !self.active {
            return None;
        }
        self.script
            .steps
            .iter()
            .find(|s| !self.completed.contains(&s.id))
    }

    pub fn current_step_id(&self) -> Option<&str> {
        self.current_step().map(|s| s.id.as_str())
    }

    /// Mark a step done. Returns false, changing nothing, if the id is
    /// unknown or already completed.
    pub fn complete_step(&mut self, id: &str) -> bool {
        if self.script.step(id).is_none() {
            tracing::debug!(step = id, "Ignoring completion of unknown tour step");
            return false;
        }
        let inserted = self.completed.insert(id.to_string());
        if inserted {
            tracing::debug!(step = id, next = ?self.current_step_id(), "Tour step completed");
        }
        inserted
    }

    /// Whether every step is done
    pub fn is_finished(&self) -> bool {
        self.script
            .steps
            .iter()
            .all(|s| self.completed.contains(&s.id))
    }

    /// Whether `panel_id` is the target of a completed step
    pub fn is_completed_target(&self, panel_id: &PanelId) -> bool {
        self.script
            .steps
            .iter()
            .any(|s| &s.target == panel_id && self.completed.contains(&s.id))
    }
}
