//! Persisted layout store
//!
//! Key-value persistence of panel open/lock/active-panel state, namespaced per
//! position, plus onboarding progress. Records are opaque JSON blobs to the
//! backend; absent or malformed records read back as first-session defaults.

mod backend;
mod layout_store;
mod records;

pub use backend::{FileStorage, MemoryStorage, StorageBackend, StorageError, UnavailableStorage};
pub use layout_store::LayoutStore;
pub use records::{
    OnboardingRecord, PanelLocksState, PanelPersistedState, SidebarState, ONBOARDING_KEY,
    SIDEBAR_LOCKS_KEY, SIDEBAR_STATE_KEY,
};
