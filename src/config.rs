//! Dashboard configuration persistence
//!
//! Stores user preferences in `~/.config/fxdock/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::panel::{clamp_width, DEFAULT_PANEL_WIDTH, MOBILE_BREAKPOINT, RAIL_WIDTH};

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Width panels open at (clamped to the allowed range on load)
    #[serde(default = "default_panel_width")]
    pub default_panel_width: f32,

    /// Viewport width below which panels are not rendered
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f32,

    /// Width of the icon rail the content is padded by
    #[serde(default = "default_rail_width")]
    pub rail_width: f32,

    /// Persist panel state to disk (otherwise memory only)
    #[serde(default = "default_persist_layout")]
    pub persist_layout: bool,
}

fn default_panel_width() -> f32 {
    DEFAULT_PANEL_WIDTH
}

fn default_mobile_breakpoint() -> f32 {
    MOBILE_BREAKPOINT
}

fn default_rail_width() -> f32 {
    RAIL_WIDTH
}

fn default_persist_layout() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_panel_width: default_panel_width(),
            mobile_breakpoint: default_mobile_breakpoint(),
            rail_width: default_rail_width(),
            persist_layout: default_persist_layout(),
        }
    }
}

impl DashboardConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<DashboardConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values a hand-edited file may have pushed out of range
    pub fn sanitized(mut self) -> Self {
        self.default_panel_width = clamp_width(self.default_panel_width);
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint < 0.0 {
            self.mobile_breakpoint = default_mobile_breakpoint();
        }
        if !self.rail_width.is_finite() || self.rail_width < 0.0 {
            self.rail_width = default_rail_width();
        }
        self
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: DashboardConfig = serde_yaml::from_str("persist_layout: false\n").unwrap();
        assert!(!config.persist_layout);
        assert_eq!(config.default_panel_width, DEFAULT_PANEL_WIDTH);
        assert_eq!(config.mobile_breakpoint, MOBILE_BREAKPOINT);
    }

    #[test]
    fn test_sanitize_clamps_width() {
        let config = DashboardConfig {
            default_panel_width: 2000.0,
            rail_width: -3.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.default_panel_width, 600.0);
        assert_eq!(config.rail_width, RAIL_WIDTH);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fxdock").join("config.yaml");
        let config = DashboardConfig {
            default_panel_width: 480.0,
            persist_layout: false,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(DashboardConfig::load_from(&path), config);
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "default_panel_width: [oops").unwrap();
        assert_eq!(DashboardConfig::load_from(&path), DashboardConfig::default());
    }
}
