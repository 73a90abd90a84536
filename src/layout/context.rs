//! Shared layout context
//!
//! Both panel controllers publish their snapshot here after every change, and
//! the main content geometry is recomputed from the two snapshots right away.
//! A panel reads its sibling's state from this context instead of querying
//! the other panel directly.

use super::geometry::{resolve, MainContentGeometry};
use crate::panel::{PanelPosition, PanelSnapshot, DEFAULT_PANEL_WIDTH, RAIL_WIDTH};

#[derive(Debug, Clone)]
pub struct LayoutContext {
    left: PanelSnapshot,
    right: PanelSnapshot,
    rail_width: f32,
    /// Whether the main content region exists yet
    content_mounted: bool,
    /// Last computed geometry; kept when a cycle is skipped
    geometry: Option<MainContentGeometry>,
    /// Number of recomputations performed
    revision: u64,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(RAIL_WIDTH)
    }
}

impl LayoutContext {
    pub fn new(rail_width: f32) -> Self {
        Self {
            left: PanelSnapshot::hidden(PanelPosition::Left, DEFAULT_PANEL_WIDTH),
            right: PanelSnapshot::hidden(PanelPosition::Right, DEFAULT_PANEL_WIDTH),
            rail_width,
            content_mounted: false,
            geometry: None,
            revision: 0,
        }
    }

    pub fn snapshot(&self, position: PanelPosition) -> &PanelSnapshot {
        match position {
            PanelPosition::Left => &self.left,
            PanelPosition::Right => &self.right,
        }
    }

    /// The other panel's snapshot, as seen from `position`
    pub fn sibling(&self, position: PanelPosition) -> &PanelSnapshot {
        self.snapshot(position.opposite())
    }

    pub fn rail_width(&self) -> f32 {
        self.rail_width
    }

    pub fn geometry(&self) -> Option<&MainContentGeometry> {
        self.geometry.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_content_mounted(&self) -> bool {
        self.content_mounted
    }

    /// Record one panel's current state and recompute.
    ///
    /// Returns true if the resulting geometry differs from the previous one.
    pub fn publish(&mut self, snapshot: PanelSnapshot) -> bool {
        match snapshot.position {
            PanelPosition::Left => self.left = snapshot,
            PanelPosition::Right => self.right = snapshot,
        }
        self.recompute()
    }

    /// The main content region appeared or went away
    pub fn set_content_mounted(&mut self, mounted: bool) -> bool {
        self.content_mounted = mounted;
        self.recompute()
    }

    /// Recompute from the current snapshots. Skipped (keeping the last known
    /// geometry) while the content region is not mounted.
    pub fn recompute(&mut self) -> bool {
        if !self.content_mounted {
            tracing::trace!("Main content not mounted, skipping geometry");
            return false;
        }
        let next = resolve(&self.left, &self.right, self.rail_width);
        self.revision += 1;
        let changed = self.geometry.as_ref() != Some(&next);
        if changed {
            tracing::debug!(
                margin_left = next.margin_left,
                margin_right = next.margin_right,
                width = %next.width,
                "Main content geometry changed"
            );
        }
        self.geometry = Some(next);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_open(position: PanelPosition, width: f32) -> PanelSnapshot {
        PanelSnapshot {
            position,
            is_open: true,
            is_locked: true,
            width,
            rendered: true,
        }
    }

    #[test]
    fn test_skips_until_content_mounted() {
        let mut ctx = LayoutContext::default();
        assert!(!ctx.publish(locked_open(PanelPosition::Left, 420.0)));
        assert!(ctx.geometry().is_none());

        assert!(ctx.set_content_mounted(true));
        assert_eq!(ctx.geometry().unwrap().margin_left, 420.0);
    }

    #[test]
    fn test_keeps_last_geometry_when_unmounted() {
        let mut ctx = LayoutContext::default();
        ctx.set_content_mounted(true);
        ctx.publish(locked_open(PanelPosition::Right, 500.0));
        ctx.set_content_mounted(false);
        ctx.publish(PanelSnapshot::hidden(PanelPosition::Right, 500.0));
        assert_eq!(ctx.geometry().unwrap().margin_right, 500.0);
    }

    #[test]
    fn test_redundant_recompute_is_harmless() {
        let mut ctx = LayoutContext::default();
        ctx.set_content_mounted(true);
        ctx.publish(locked_open(PanelPosition::Left, 400.0));
        let before = *ctx.geometry().unwrap();
        assert!(!ctx.recompute());
        assert!(!ctx.recompute());
        assert_eq!(*ctx.geometry().unwrap(), before);
        assert_eq!(ctx.revision(), 4);
    }

    #[test]
    fn test_sibling_lookup() {
        let mut ctx = LayoutContext::default();
        ctx.publish(locked_open(PanelPosition::Right, 380.0));
        assert_eq!(ctx.sibling(PanelPosition::Left).width, 380.0);
    }
}
