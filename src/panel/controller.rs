//! Single panel controller
//!
//! Owns one docked panel's lifecycle: open/closed, locked/floating, which
//! sub-panel is active, and drag-to-resize.
//!
//! ```text
//!   Closed ──toggle(id)──▶ OpenFloating ──toggle_lock──▶ OpenLocked
//!     ▲                        │  ▲                          │
//!     └──toggle(active id)─────┘  └───────toggle_lock────────┘
//!     └──outside click (floating only) / mobile viewport──────┘
//! ```
//!
//! Persistence rule: the controller writes its record through the store on
//! every lock toggle, and on open/close/switch only while locked. Floating
//! interactions are never persisted.

use super::outside_click::should_close_on_pointer_down;
use super::position::{clamp_width, PanelId, PanelPosition, PanelRail, MOBILE_BREAKPOINT};
use super::resize::ResizeSession;
use super::snapshot::PanelSnapshot;
use crate::input::{DocumentListeners, ListenerKind, ListenerOwner, Subscription};
use crate::layout::HitTarget;
use crate::store::{LayoutStore, PanelPersistedState};

/// Visible mode of a panel, derived from its open and lock bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Closed,
    /// Open above the content, reserving no space
    OpenFloating,
    /// Open and pinned, reserving its width in the content area
    OpenLocked,
}

/// Stacking layer a panel renders on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ZLayer {
    /// Locked panels sit below floating UI and the tour overlay
    Docked = 10,
    /// Floating panels render above content and above a docked sibling
    Floating = 40,
}

/// Result of a controller operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelTransition {
    Unchanged,
    Opened(PanelId),
    Switched { from: PanelId, to: PanelId },
    Closed,
    LockChanged(bool),
}

impl PanelTransition {
    pub fn is_change(&self) -> bool {
        !matches!(self, PanelTransition::Unchanged)
    }
}

/// In-memory state of one mounted panel
#[derive(Debug, Clone, PartialEq)]
pub struct TransientPanelState {
    pub is_open: bool,
    pub is_locked: bool,
    pub active_panel: Option<PanelId>,
    pub is_mobile: bool,
    pub mounted: bool,
    width: f32,
}

impl TransientPanelState {
    pub fn new(width: f32) -> Self {
        Self {
            is_open: false,
            is_locked: false,
            active_panel: None,
            is_mobile: false,
            mounted: false,
            width: clamp_width(width),
        }
    }

    /// Current width, always within the clamp range
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the width, clamping it into range
    pub fn set_width(&mut self, width: f32) {
        self.width = clamp_width(width);
    }

    /// Whether anything is rendered at all
    pub fn is_rendered(&self) -> bool {
        self.mounted && !self.is_mobile
    }

    pub fn mode(&self) -> PanelMode {
        match (self.is_open, self.is_locked) {
            (false, _) => PanelMode::Closed,
            (true, false) => PanelMode::OpenFloating,
            (true, true) => PanelMode::OpenLocked,
        }
    }
}

/// State machine for one docked panel
#[derive(Debug)]
pub struct PanelController {
    position: PanelPosition,
    rail: PanelRail,
    state: TransientPanelState,
    default_width: f32,
    mobile_breakpoint: f32,
    resize: Option<ResizeSession>,
    outside_click: Option<Subscription>,
}

impl PanelController {
    /// Create an unmounted controller with the stock rail for its position
    pub fn new(position: PanelPosition) -> Self {
        Self::with_rail(PanelRail::default_for(position))
    }

    /// Create an unmounted controller for a custom rail
    pub fn with_rail(rail: PanelRail) -> Self {
        let default_width = super::position::DEFAULT_PANEL_WIDTH;
        Self {
            position: rail.position,
            rail,
            state: TransientPanelState::new(default_width),
            default_width,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            resize: None,
            outside_click: None,
        }
    }

    /// Set the width used on mount (clamped)
    pub fn with_default_width(mut self, width: f32) -> Self {
        self.default_width = clamp_width(width);
        self.state.set_width(self.default_width);
        self
    }

    /// Override the mobile breakpoint
    pub fn with_mobile_breakpoint(mut self, breakpoint: f32) -> Self {
        self.mobile_breakpoint = breakpoint;
        self
    }

    pub fn position(&self) -> PanelPosition {
        self.position
    }

    pub fn rail(&self) -> &PanelRail {
        &self.rail
    }

    pub fn state(&self) -> &TransientPanelState {
        &self.state
    }

    pub fn mode(&self) -> PanelMode {
        self.state.mode()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked
    }

    pub fn active_panel(&self) -> Option<&PanelId> {
        self.state.active_panel.as_ref()
    }

    pub fn width(&self) -> f32 {
        self.state.width()
    }

    pub fn is_rendered(&self) -> bool {
        self.state.is_rendered()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn z_layer(&self) -> ZLayer {
        if self.state.is_locked {
            ZLayer::Docked
        } else {
            ZLayer::Floating
        }
    }

    fn owner(&self) -> ListenerOwner {
        ListenerOwner::Panel(self.position)
    }

    /// What the sibling panel and the geometry resolver see
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            position: self.position,
            is_open: self.state.is_open,
            is_locked: self.state.is_locked,
            width: self.state.width(),
            rendered: self.state.is_rendered(),
        }
    }

    /// The record this controller would persist right now
    pub fn persisted(&self) -> PanelPersistedState {
        PanelPersistedState {
            is_open: self.state.is_open,
            active_panel: self.state.active_panel.clone(),
            locked: self.state.is_locked,
        }
    }

    fn write_through(&self, store: &mut LayoutStore) {
        store.set_panel(self.position, self.persisted());
    }

    /// Mount the panel: attach the outside-click listener and rehydrate.
    ///
    /// Only a locked prior session is restored. Floating panels are ephemeral
    /// and always start closed.
    pub fn mount(
        &mut self,
        store: &LayoutStore,
        viewport_width: f32,
        listeners: &DocumentListeners,
    ) {
        self.resize = None;
        self.state = TransientPanelState::new(self.default_width);
        self.state.mounted = true;
        self.state.is_mobile = viewport_width < self.mobile_breakpoint;
        self.outside_click = Some(listeners.subscribe(ListenerKind::PointerDown, self.owner()));

        let persisted = store.panel(self.position);
        if !persisted.locked || self.state.is_mobile {
            tracing::debug!(position = %self.position, "Mounted panel closed");
            return;
        }

        self.state.is_locked = true;
        let active = persisted.active_panel.filter(|id| {
            let known = self.rail.contains(id);
            if !known {
                tracing::debug!(position = %self.position, panel = %id, "Ignoring unknown persisted panel id");
            }
            known
        });
        if persisted.is_open && active.is_some() {
            self.state.is_open = true;
            self.state.active_panel = active;
        }
        tracing::debug!(
            position = %self.position,
            mode = ?self.state.mode(),
            active = ?self.state.active_panel,
            "Rehydrated locked panel"
        );
    }

    /// Tear down: release every listener and drop the transient state
    pub fn unmount(&mut self) {
        self.resize = None;
        self.outside_click = None;
        self.state = TransientPanelState::new(self.default_width);
    }

    /// Rail button press: open `panel_id`, switch to it, or close if it is
    /// already the active sub-panel. Unknown ids are ignored.
    pub fn toggle(&mut self, panel_id: &PanelId, store: &mut LayoutStore) -> PanelTransition {
        if !self.state.is_rendered() {
            return PanelTransition::Unchanged;
        }
        if !self.rail.contains(panel_id) {
            tracing::debug!(position = %self.position, panel = %panel_id, "Ignoring toggle of unknown panel");
            return PanelTransition::Unchanged;
        }

        let transition = if self.state.active_panel.as_ref() == Some(panel_id) {
            self.state.is_open = false;
            self.state.active_panel = None;
            PanelTransition::Closed
        } else {
            self.open_panel(panel_id.clone())
        };

        if self.state.is_locked {
            self.write_through(store);
        }
        tracing::debug!(position = %self.position, ?transition, mode = ?self.state.mode(), "Panel toggled");
        transition
    }

    /// Open `panel_id` without toggle semantics: if it is already active the
    /// panel simply stays open.
    pub fn reveal(&mut self, panel_id: &PanelId, store: &mut LayoutStore) -> PanelTransition {
        if !self.state.is_rendered() || !self.rail.contains(panel_id) {
            return PanelTransition::Unchanged;
        }
        if self.state.is_open && self.state.active_panel.as_ref() == Some(panel_id) {
            return PanelTransition::Unchanged;
        }

        let transition = self.open_panel(panel_id.clone());
        if self.state.is_locked {
            self.write_through(store);
        }
        transition
    }

    fn open_panel(&mut self, panel_id: PanelId) -> PanelTransition {
        let was_open = self.state.is_open;
        let previous = self.state.active_panel.replace(panel_id.clone());
        self.state.is_open = true;
        match previous {
            Some(from) if was_open => PanelTransition::Switched { from, to: panel_id },
            _ => PanelTransition::Opened(panel_id),
        }
    }

    /// Flip the lock bit. Always persisted; open state and active sub-panel
    /// are preserved.
    pub fn toggle_lock(&mut self, store: &mut LayoutStore) -> PanelTransition {
        if !self.state.is_rendered() {
            return PanelTransition::Unchanged;
        }
        self.state.is_locked = !self.state.is_locked;
        self.write_through(store);
        tracing::debug!(position = %self.position, locked = self.state.is_locked, "Panel lock toggled");
        PanelTransition::LockChanged(self.state.is_locked)
    }

    /// Close the panel. Persisted only while locked.
    pub fn close(&mut self, store: &mut LayoutStore) -> PanelTransition {
        if !self.state.is_open {
            return PanelTransition::Unchanged;
        }
        self.state.is_open = false;
        self.state.active_panel = None;
        if self.state.is_locked {
            self.write_through(store);
        }
        PanelTransition::Closed
    }

    /// Document pointer-down: closes a floating panel when the target lies
    /// outside every sidebar region. Locked panels are immune.
    pub fn pointer_down(&mut self, target: &HitTarget, store: &mut LayoutStore) -> PanelTransition {
        if !should_close_on_pointer_down(&self.state, target) {
            return PanelTransition::Unchanged;
        }
        tracing::debug!(position = %self.position, ?target, "Closing floating panel on outside click");
        self.close(store)
    }

    /// Viewport width changed. Dropping below the mobile breakpoint closes
    /// and hides the panel without touching the store; growing back does not
    /// reopen it (rehydration only happens on mount).
    pub fn viewport_resized(&mut self, viewport_width: f32) -> PanelTransition {
        let was_mobile = self.state.is_mobile;
        self.state.is_mobile = viewport_width < self.mobile_breakpoint;

        if self.state.is_mobile && !was_mobile {
            self.resize = None;
            let was_open = self.state.is_open;
            self.state.is_open = false;
            self.state.active_panel = None;
            tracing::debug!(position = %self.position, viewport_width, "Entered mobile layout");
            if was_open {
                return PanelTransition::Closed;
            }
        }
        PanelTransition::Unchanged
    }

    /// Set the width directly (clamped). Never persisted.
    pub fn set_width(&mut self, width: f32) -> bool {
        let before = self.state.width();
        self.state.set_width(width);
        before != self.state.width()
    }

    /// Start a resize drag at pointer `x`. Returns false if the panel is not
    /// showing anything to resize.
    pub fn begin_resize(&mut self, x: f64, listeners: &DocumentListeners) -> bool {
        if !self.state.is_rendered() || !self.state.is_open {
            return false;
        }
        let guard = listeners.acquire_gesture(self.owner());
        self.resize = Some(ResizeSession::new(x, self.state.width(), guard));
        true
    }

    /// Pointer moved during a drag. Returns the new width if one is active.
    pub fn drag_to(&mut self, x: f64) -> Option<f32> {
        let session = self.resize.as_ref()?;
        let width = session.width_at(self.position, x);
        self.state.set_width(width);
        Some(self.state.width())
    }

    /// Pointer released: end the drag and release its listeners
    pub fn end_resize(&mut self) -> bool {
        self.resize.take().is_some()
    }
}
