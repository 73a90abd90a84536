//! Persisted record shapes
//!
//! These are the JSON blobs written under the storage keys. Every field has a
//! default so partial or older records still decode.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::panel::{PanelId, PanelPosition};

/// Key of the per-position panel record
pub const SIDEBAR_STATE_KEY: &str = "sidebar_state";
/// Key of the lock map kept for readers of the older layout
pub const SIDEBAR_LOCKS_KEY: &str = "sidebar_locks";
/// Key of the onboarding progress record
pub const ONBOARDING_KEY: &str = "onboarding";

/// Saved configuration of one panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelPersistedState {
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    #[serde(rename = "activePanelId", skip_serializing_if = "Option::is_none")]
    pub active_panel: Option<PanelId>,
    pub locked: bool,
}

/// Saved configuration of both panels (`sidebar_state`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarState {
    pub left: PanelPersistedState,
    pub right: PanelPersistedState,
}

impl SidebarState {
    pub fn panel(&self, position: PanelPosition) -> &PanelPersistedState {
        match position {
            PanelPosition::Left => &self.left,
            PanelPosition::Right => &self.right,
        }
    }

    pub fn panel_mut(&mut self, position: PanelPosition) -> &mut PanelPersistedState {
        match position {
            PanelPosition::Left => &mut self.left,
            PanelPosition::Right => &mut self.right,
        }
    }

    /// Lock map derived from the per-position records
    pub fn locks(&self) -> PanelLocksState {
        PanelLocksState {
            left: self.left.locked,
            right: self.right.locked,
        }
    }
}

/// Lock bit per position (`sidebar_locks`)
///
/// Always derived from [`SidebarState`]; it is written next to it but never
/// read back as a source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLocksState {
    pub left: bool,
    pub right: bool,
}

impl PanelLocksState {
    pub fn get(&self, position: PanelPosition) -> bool {
        match position {
            PanelPosition::Left => self.left,
            PanelPosition::Right => self.right,
        }
    }
}

/// Completed onboarding steps (`onboarding`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub completed_steps: BTreeSet<String>,
}
