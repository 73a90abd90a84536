//! Dock positions, sub-panel identifiers and rail definitions
//!
//! This module defines the core data structures shared by both side panels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum panel width in logical pixels
pub const MIN_PANEL_WIDTH: f32 = 350.0;
/// Maximum panel width in logical pixels
pub const MAX_PANEL_WIDTH: f32 = 600.0;
/// Width a panel starts with when nothing else is configured
pub const DEFAULT_PANEL_WIDTH: f32 = 400.0;
/// Width of the always-visible icon rail on each edge
pub const RAIL_WIDTH: f32 = 64.0;
/// Height of a single icon button in the rail
pub const RAIL_BUTTON_HEIGHT: f32 = 48.0;
/// Viewports narrower than this have no docked panels at all
pub const MOBILE_BREAKPOINT: f32 = 1024.0;

/// Clamp a width into `[MIN_PANEL_WIDTH, MAX_PANEL_WIDTH]`.
///
/// NaN collapses to the minimum so a bad pointer delta can never leak through.
#[inline]
pub fn clamp_width(width: f32) -> f32 {
    if width.is_nan() {
        return MIN_PANEL_WIDTH;
    }
    width.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH)
}

/// Screen edge a panel is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    Left,
    Right,
}

impl PanelPosition {
    /// All positions for iteration
    pub const ALL: [PanelPosition; 2] = [PanelPosition::Left, PanelPosition::Right];

    /// The panel docked to the other edge
    pub fn opposite(&self) -> PanelPosition {
        match self {
            PanelPosition::Left => PanelPosition::Right,
            PanelPosition::Right => PanelPosition::Left,
        }
    }

    /// Namespace key used for persistence and the `data-position` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelPosition::Left => "left",
            PanelPosition::Right => "right",
        }
    }

    /// Parse a namespace key (`"left"` / `"right"`, case-insensitive)
    pub fn parse(value: &str) -> Option<PanelPosition> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(PanelPosition::Left),
            "right" => Some(PanelPosition::Right),
            _ => None,
        }
    }
}

impl fmt::Display for PanelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a sub-panel shown inside a dock (e.g. `"instruments"`)
///
/// Stored as a plain string so ids written by older sessions, or ids a rail
/// no longer offers, survive a round-trip and can be ignored instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub const INSTRUMENTS: &'static str = "instruments";
    pub const WATCHLIST: &'static str = "watchlist";
    pub const LAYERS: &'static str = "layers";
    pub const SETTINGS: &'static str = "settings";
    pub const PRESETS: &'static str = "presets";
    pub const ALERTS: &'static str = "alerts";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A button in a panel's icon rail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailButton {
    pub id: PanelId,
    pub label: &'static str,
}

/// The fixed icon rail attached to one dock, listing the sub-panels it offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRail {
    pub position: PanelPosition,
    pub buttons: Vec<RailButton>,
}

impl PanelRail {
    /// Create an empty rail
    pub fn new(position: PanelPosition) -> Self {
        Self {
            position,
            buttons: Vec::new(),
        }
    }

    /// Register a button (builder pattern). Duplicate ids are ignored.
    pub fn with_button(mut self, id: &str, label: &'static str) -> Self {
        let id = PanelId::new(id);
        if !self.contains(&id) {
            self.buttons.push(RailButton { id, label });
        }
        self
    }

    /// The dashboard's stock rail for a position
    pub fn default_for(position: PanelPosition) -> Self {
        match position {
            PanelPosition::Left => PanelRail::new(position)
                .with_button(PanelId::INSTRUMENTS, "Instruments")
                .with_button(PanelId::WATCHLIST, "Watchlist")
                .with_button(PanelId::LAYERS, "Layers"),
            PanelPosition::Right => PanelRail::new(position)
                .with_button(PanelId::SETTINGS, "Settings")
                .with_button(PanelId::PRESETS, "Presets")
                .with_button(PanelId::ALERTS, "Alerts"),
        }
    }

    /// Whether this rail offers the given sub-panel
    pub fn contains(&self, id: &PanelId) -> bool {
        self.buttons.iter().any(|b| &b.id == id)
    }

    /// Button at a vertical offset from the top of the rail
    pub fn button_at(&self, y: f64) -> Option<&RailButton> {
        if y < 0.0 {
            return None;
        }
        let index = (y / RAIL_BUTTON_HEIGHT as f64).floor() as usize;
        self.buttons.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_opposite() {
        assert_eq!(PanelPosition::Left.opposite(), PanelPosition::Right);
        assert_eq!(PanelPosition::Right.opposite(), PanelPosition::Left);
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(PanelPosition::parse("LEFT"), Some(PanelPosition::Left));
        assert_eq!(PanelPosition::parse(" right "), Some(PanelPosition::Right));
        assert_eq!(PanelPosition::parse("bottom"), None);
    }

    #[test]
    fn test_position_serializes_lowercase() {
        let json = serde_json::to_string(&PanelPosition::Right).unwrap();
        assert_eq!(json, "\"right\"");
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(100.0), MIN_PANEL_WIDTH);
        assert_eq!(clamp_width(450.0), 450.0);
        assert_eq!(clamp_width(10_000.0), MAX_PANEL_WIDTH);
        assert_eq!(clamp_width(f32::NAN), MIN_PANEL_WIDTH);
        assert_eq!(clamp_width(f32::INFINITY), MAX_PANEL_WIDTH);
    }

    #[test]
    fn test_panel_id_is_transparent_string() {
        let id = PanelId::new("instruments");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"instruments\"");
        let parsed: PanelId = serde_json::from_str("\"settings\"").unwrap();
        assert_eq!(parsed.as_str(), "settings");
    }

    #[test]
    fn test_rail_registration_skips_duplicates() {
        let rail = PanelRail::new(PanelPosition::Left)
            .with_button("instruments", "Instruments")
            .with_button("instruments", "Again");
        assert_eq!(rail.buttons.len(), 1);
        assert!(rail.contains(&PanelId::from("instruments")));
        assert!(!rail.contains(&PanelId::from("settings")));
    }

    #[test]
    fn test_rail_button_at() {
        let rail = PanelRail::default_for(PanelPosition::Left);
        assert_eq!(rail.button_at(0.0).unwrap().id.as_str(), "instruments");
        assert_eq!(rail.button_at(50.0).unwrap().id.as_str(), "watchlist");
        assert!(rail.button_at(-1.0).is_none());
        assert!(rail.button_at(10_000.0).is_none());
    }
}
