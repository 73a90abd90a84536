//! What a panel exposes to its sibling and to the geometry resolver

use super::position::{clamp_width, PanelPosition};

/// Observable state of one panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSnapshot {
    pub position: PanelPosition,
    pub is_open: bool,
    pub is_locked: bool,
    pub width: f32,
    /// False while the panel renders nothing (mobile viewport, unmounted)
    pub rendered: bool,
}

impl PanelSnapshot {
    /// A closed, unlocked, unrendered panel
    pub fn hidden(position: PanelPosition, width: f32) -> Self {
        Self {
            position,
            is_open: false,
            is_locked: false,
            width: clamp_width(width),
            rendered: false,
        }
    }

    /// Whether this panel reserves its width in the main content area
    pub fn reserves_space(&self) -> bool {
        self.rendered && self.is_open && self.is_locked
    }

    /// Width this panel takes away from the main content area
    pub fn reserved_width(&self) -> f32 {
        if self.reserves_space() {
            self.width
        } else {
            0.0
        }
    }

    /// The introspectable attribute contract: `data-position`, `data-locked`
    /// and `data-width`
    pub fn data_attributes(&self) -> [(&'static str, String); 3] {
        [
            ("data-position", self.position.as_str().to_string()),
            ("data-locked", self.is_locked.to_string()),
            ("data-width", format!("{}", self.width.round() as i64)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_open_locked_rendered_reserves() {
        let mut snap = PanelSnapshot::hidden(PanelPosition::Left, 420.0);
        assert_eq!(snap.reserved_width(), 0.0);

        snap.rendered = true;
        snap.is_open = true;
        assert_eq!(snap.reserved_width(), 0.0);

        snap.is_locked = true;
        assert_eq!(snap.reserved_width(), 420.0);

        snap.rendered = false;
        assert_eq!(snap.reserved_width(), 0.0);
    }

    #[test]
    fn test_data_attributes() {
        let snap = PanelSnapshot {
            position: PanelPosition::Right,
            is_open: true,
            is_locked: true,
            width: 512.4,
            rendered: true,
        };
        let attrs = snap.data_attributes();
        assert_eq!(attrs[0], ("data-position", "right".to_string()));
        assert_eq!(attrs[1], ("data-locked", "true".to_string()));
        assert_eq!(attrs[2], ("data-width", "512".to_string()));
    }
}
