//! Application model - the complete state of the dashboard sidebars
//!
//! This module contains the root state type following the Elm Architecture
//! pattern. The store, the listener registry and the layout context are
//! created once here and lent to whichever panel is handling a message.

use crate::config::DashboardConfig;
use crate::input::DocumentListeners;
use crate::layout::{hit_test, HitTarget, LayoutContext, MainContentGeometry, Point};
use crate::panel::{
    PanelController, PanelPosition, PanelRail, MAX_PANEL_WIDTH, MIN_PANEL_WIDTH,
};
use crate::store::LayoutStore;
use crate::tour::{TourGate, TourProgress, TourScript};

/// Mutable borrows of everything one panel needs to handle a message
pub struct PanelParts<'a> {
    pub controller: &'a mut PanelController,
    pub gate: &'a mut TourGate,
    pub store: &'a mut LayoutStore,
    pub tour: &'a TourProgress,
    pub listeners: &'a DocumentListeners,
}

/// The complete application model
#[derive(Debug)]
pub struct DashboardModel {
    pub left: PanelController,
    pub right: PanelController,
    pub left_gate: TourGate,
    pub right_gate: TourGate,
    /// Persisted layout records, shared by both panels
    pub store: LayoutStore,
    /// Published panel snapshots and the derived content geometry
    pub layout: LayoutContext,
    /// Onboarding tour progress
    pub tour: TourProgress,
    /// Document-level pointer listeners
    pub listeners: DocumentListeners,
    /// Viewport size in logical pixels (width, height)
    pub viewport: (f32, f32),
    pub config: DashboardConfig,
}

impl DashboardModel {
    /// Create an unmounted model. Send `AppMsg::Mount` (or call `mount`) to
    /// hydrate and render the panels.
    pub fn new(config: DashboardConfig, store: LayoutStore, viewport: (f32, f32)) -> Self {
        Self::with_tour(config, store, viewport, TourScript::dashboard())
    }

    /// Create an unmounted model with a custom tour script
    pub fn with_tour(
        config: DashboardConfig,
        store: LayoutStore,
        viewport: (f32, f32),
        script: TourScript,
    ) -> Self {
        let config = config.sanitized();
        let controller = |position| {
            PanelController::with_rail(PanelRail::default_for(position))
                .with_default_width(config.default_panel_width)
                .with_mobile_breakpoint(config.mobile_breakpoint)
        };
        let left = controller(PanelPosition::Left);
        let right = controller(PanelPosition::Right);
        Self {
            left,
            right,
            left_gate: TourGate::new(PanelPosition::Left),
            right_gate: TourGate::new(PanelPosition::Right),
            store,
            layout: LayoutContext::new(config.rail_width),
            tour: TourProgress::new(script),
            listeners: DocumentListeners::new(),
            viewport,
            config,
        }
    }

    pub fn controller(&self, position: PanelPosition) -> &PanelController {
        match position {
            PanelPosition::Left => &self.left,
            PanelPosition::Right => &self.right,
        }
    }

    pub fn controller_mut(&mut self, position: PanelPosition) -> &mut PanelController {
        match position {
            PanelPosition::Left => &mut self.left,
            PanelPosition::Right => &mut self.right,
        }
    }

    pub fn gate(&self, position: PanelPosition) -> &TourGate {
        match position {
            PanelPosition::Left => &self.left_gate,
            PanelPosition::Right => &self.right_gate,
        }
    }

    /// Split borrows for one panel
    pub fn parts(&mut self, position: PanelPosition) -> PanelParts<'_> {
        let (controller, gate) = match position {
            PanelPosition::Left => (&mut self.left, &mut self.left_gate),
            PanelPosition::Right => (&mut self.right, &mut self.right_gate),
        };
        PanelParts {
            controller,
            gate,
            store: &mut self.store,
            tour: &self.tour,
            listeners: &self.listeners,
        }
    }

    /// Last resolved main content geometry
    pub fn geometry(&self) -> Option<&MainContentGeometry> {
        self.layout.geometry()
    }

    /// Mount both panels and the content region
    pub fn mount(&mut self) {
        let viewport_width = self.viewport.0;
        self.left.mount(&self.store, viewport_width, &self.listeners);
        self.right.mount(&self.store, viewport_width, &self.listeners);

        // Tour progress is re-read fresh on every mount
        let script = self.tour.script().clone();
        self.tour = TourProgress::new(script).with_record(self.store.onboarding());
        self.left_gate.reset();
        self.right_gate.reset();

        self.layout.set_content_mounted(true);
        self.publish_layout();
        tracing::debug!(
            left = ?self.left.mode(),
            right = ?self.right.mode(),
            "Dashboard mounted"
        );
    }

    /// Unmount both panels, releasing every document listener
    pub fn unmount(&mut self) {
        self.left.unmount();
        self.right.unmount();
        self.left_gate.reset();
        self.right_gate.reset();
        self.publish_layout();
        self.layout.set_content_mounted(false);
    }

    /// Publish both snapshots to the layout context. Returns true if the
    /// main content geometry changed.
    pub fn publish_layout(&mut self) -> bool {
        let left = self.layout.publish(self.left.snapshot());
        let right = self.layout.publish(self.right.snapshot());
        left || right
    }

    /// Let both tour gates react to the current step. Returns true if
    /// anything changed.
    pub fn evaluate_tour(&mut self) -> bool {
        let mut changed = false;
        for position in PanelPosition::ALL {
            let parts = self.parts(position);
            let action = parts.gate.evaluate(parts.tour, parts.controller, parts.store);
            changed |= action != crate::tour::GateAction::None;
        }
        changed
    }

    /// What lies under a window point
    pub fn hit_test(&self, point: Point) -> HitTarget {
        let (width, height) = self.viewport;
        hit_test(
            point,
            width,
            height,
            self.layout.rail_width(),
            [
                (self.layout.snapshot(PanelPosition::Left), self.left.rail()),
                (self.layout.snapshot(PanelPosition::Right), self.right.rail()),
            ],
        )
    }

    /// Check invariants after an update (debug builds)
    pub fn assert_invariants(&self, context: &str) {
        for position in PanelPosition::ALL {
            let c = self.controller(position);
            debug_assert!(
                (MIN_PANEL_WIDTH..=MAX_PANEL_WIDTH).contains(&c.width()),
                "{}: {} panel width {} out of range",
                context,
                position,
                c.width()
            );
            debug_assert!(
                c.is_open() || c.active_panel().is_none(),
                "{}: closed {} panel still has an active sub-panel",
                context,
                position
            );
            if !self.layout.is_content_mounted() {
                continue;
            }
            if let Some(geometry) = self.geometry() {
                let reserves = c.snapshot().reserves_space();
                debug_assert_eq!(
                    geometry.margin(position) != 0.0,
                    reserves,
                    "{}: {} margin disagrees with lock state",
                    context,
                    position
                );
            }
        }
    }
}
