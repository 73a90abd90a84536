//! The layout store shared by both panel controllers
//!
//! Constructed once at the model root and passed by `&mut` to whichever
//! controller is handling the current message. Reads are served from an
//! in-memory cache hydrated at construction; writes go through to the backend
//! synchronously so their order matches the order of the messages that caused
//! them.
//!
//! Backend failures never escape: they are logged and the store keeps working
//! against its cache, which turns persistence into an in-memory no-op.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::{MemoryStorage, StorageBackend, StorageError};
use super::records::{
    OnboardingRecord, PanelLocksState, PanelPersistedState, SidebarState, ONBOARDING_KEY,
    SIDEBAR_LOCKS_KEY, SIDEBAR_STATE_KEY,
};
use crate::panel::PanelPosition;

#[derive(Debug)]
pub struct LayoutStore {
    backend: Box<dyn StorageBackend>,
    sidebar: SidebarState,
    onboarding: OnboardingRecord,
    /// Set once any backend operation failed
    degraded: bool,
}

impl LayoutStore {
    /// Create a store over a backend and hydrate it
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        let mut store = Self {
            backend,
            sidebar: SidebarState::default(),
            onboarding: OnboardingRecord::default(),
            degraded: false,
        };
        store.reload();
        store
    }

    /// A store that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Re-read every record from the backend, falling back to defaults for
    /// anything absent or malformed
    pub fn reload(&mut self) {
        self.sidebar = self.read_record(SIDEBAR_STATE_KEY);
        self.onboarding = self.read_record(ONBOARDING_KEY);
        tracing::debug!(
            backend = %self.backend.describe(),
            left_locked = self.sidebar.left.locked,
            right_locked = self.sidebar.right.locked,
            "Hydrated layout store"
        );
    }

    /// Whether a backend failure has pushed the store into memory-only mode
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Both panel records
    pub fn get(&self) -> SidebarState {
        self.sidebar.clone()
    }

    /// Replace both panel records
    pub fn set(&mut self, state: SidebarState) {
        self.sidebar = state;
        self.flush_sidebar();
    }

    /// One position's record
    pub fn panel(&self, position: PanelPosition) -> PanelPersistedState {
        self.sidebar.panel(position).clone()
    }

    /// Replace one position's record, leaving the other namespace untouched
    pub fn set_panel(&mut self, position: PanelPosition, state: PanelPersistedState) {
        *self.sidebar.panel_mut(position) = state;
        self.flush_sidebar();
    }

    /// Lock bit per position, derived from the panel records
    pub fn locks(&self) -> PanelLocksState {
        self.sidebar.locks()
    }

    /// Update only the lock bits of both records
    pub fn set_locks(&mut self, locks: PanelLocksState) {
        self.sidebar.left.locked = locks.left;
        self.sidebar.right.locked = locks.right;
        self.flush_sidebar();
    }

    pub fn onboarding(&self) -> &OnboardingRecord {
        &self.onboarding
    }

    pub fn set_onboarding(&mut self, record: OnboardingRecord) {
        self.onboarding = record;
        let onboarding = self.onboarding.clone();
        self.write_record(ONBOARDING_KEY, &onboarding);
    }

    /// Forget everything, in the cache and in the backend
    pub fn clear(&mut self) {
        self.sidebar = SidebarState::default();
        self.onboarding = OnboardingRecord::default();
        for key in [SIDEBAR_STATE_KEY, SIDEBAR_LOCKS_KEY, ONBOARDING_KEY] {
            if let Err(e) = self.backend.remove(key) {
                self.record_failure(&e);
            }
        }
    }

    fn flush_sidebar(&mut self) {
        let sidebar = self.sidebar.clone();
        self.write_record(SIDEBAR_STATE_KEY, &sidebar);
        self.write_record(SIDEBAR_LOCKS_KEY, &sidebar.locks());
    }

    fn read_record<T: DeserializeOwned + Default>(&mut self, key: &str) -> T {
        match self.backend.read(key) {
            Ok(Some(contents)) => match serde_json::from_str(&contents) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Malformed layout record '{}', using defaults: {}", key, e);
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                self.record_failure(&e);
                T::default()
            }
        }
    }

    fn write_record<T: Serialize>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|source| StorageError::Serialize {
                key: key.to_string(),
                source,
            })
            .and_then(|contents| self.backend.write(key, &contents));

        if let Err(e) = result {
            self.record_failure(&e);
        }
    }

    fn record_failure(&mut self, error: &StorageError) {
        if self.degraded {
            tracing::debug!("Layout storage still failing: {}", error);
        } else {
            tracing::warn!(
                "Layout storage ({}) failed, keeping layout in memory only: {}",
                self.backend.describe(),
                error
            );
            self.degraded = true;
        }
    }
}
