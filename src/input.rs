//! Document-level pointer listeners
//!
//! Panels listen to pointer events on the whole document only while they need
//! to: an outside-click listener for as long as the panel is mounted, and a
//! move/up pair for the duration of a resize drag. Every registration is a
//! [`Subscription`] that removes itself when dropped, so a gesture cannot leak
//! listeners no matter how it ends (pointer-up, viewport collapse, unmount).
//!
//! The registry is also the dispatch table: the update loop asks it who is
//! listening for a given event kind and forwards the event only to them.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::panel::PanelPosition;

/// Document event a listener is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    PointerDown,
    PointerMove,
    PointerUp,
}

/// Who owns a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerOwner {
    Panel(PanelPosition),
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: BTreeMap<u64, (ListenerKind, ListenerOwner)>,
}

/// Shared handle to the document listener registry
#[derive(Debug, Clone, Default)]
pub struct DocumentListeners {
    inner: Rc<RefCell<Registry>>,
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. It stays attached until the returned handle drops.
    pub fn subscribe(&self, kind: ListenerKind, owner: ListenerOwner) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.live.insert(id, (kind, owner));
        tracing::trace!(?kind, ?owner, id, "Attached document listener");

        Subscription {
            id,
            kind,
            owner,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Attach the move/up pair that drives a drag gesture
    pub fn acquire_gesture(&self, owner: ListenerOwner) -> GestureGuard {
        GestureGuard {
            _move: self.subscribe(ListenerKind::PointerMove, owner),
            _up: self.subscribe(ListenerKind::PointerUp, owner),
        }
    }

    /// Number of live listeners of a kind
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .live
            .values()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Total number of live listeners
    pub fn len(&self) -> usize {
        self.inner.borrow().live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owners listening for a kind, in registration order, without duplicates
    pub fn owners(&self, kind: ListenerKind) -> Vec<ListenerOwner> {
        let registry = self.inner.borrow();
        let mut owners: Vec<ListenerOwner> = Vec::new();
        for (k, owner) in registry.live.values() {
            if *k == kind && !owners.contains(owner) {
                owners.push(*owner);
            }
        }
        owners
    }

    /// Whether a specific owner currently listens for a kind
    pub fn is_listening(&self, kind: ListenerKind, owner: ListenerOwner) -> bool {
        self.inner
            .borrow()
            .live
            .values()
            .any(|(k, o)| *k == kind && *o == owner)
    }
}

/// A live listener registration; detaches on drop
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    kind: ListenerKind,
    owner: ListenerOwner,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    pub fn owner(&self) -> ListenerOwner {
        self.owner
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().live.remove(&self.id);
            tracing::trace!(kind = ?self.kind, owner = ?self.owner, id = self.id, "Detached document listener");
        }
    }
}

/// The pointer-move/pointer-up listeners of one drag gesture
#[derive(Debug)]
pub struct GestureGuard {
    _move: Subscription,
    _up: Subscription,
}
