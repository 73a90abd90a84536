//! Command-line argument parsing for the fxdock tool
//!
//! Supports:
//! - Inspecting and resetting the persisted layout records
//! - Resolving the main content geometry for a viewport
//! - Applying a toggle or lock against the persisted state

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::panel::PanelPosition;

/// Viewport used by commands that don't take one
pub const DESKTOP_VIEWPORT: (f32, f32) = (1440.0, 900.0);

/// Inspect and drive the dashboard's docked side panels
#[derive(Parser, Debug)]
#[command(name = "fxdock", version, about = "Dockable side panel layout manager")]
pub struct CliArgs {
    /// Directory holding the layout records (overrides the default)
    #[arg(long, value_name = "DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// Keep records in memory only (nothing is read or written)
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the persisted records as JSON
    Show,
    /// Mount both panels from persisted state and print the content geometry
    Geometry {
        /// Viewport width in logical pixels
        #[arg(long, value_name = "PX", default_value_t = DESKTOP_VIEWPORT.0)]
        viewport: f32,
        /// Viewport height in logical pixels
        #[arg(long, value_name = "PX", default_value_t = DESKTOP_VIEWPORT.1)]
        height: f32,
    },
    /// Press a rail button
    Toggle {
        #[arg(value_parser = parse_position)]
        position: PanelPosition,
        panel_id: String,
    },
    /// Press a panel's lock button
    Lock {
        #[arg(value_parser = parse_position)]
        position: PanelPosition,
    },
    /// Clear every persisted record
    Reset,
}

fn parse_position(value: &str) -> Result<PanelPosition, String> {
    PanelPosition::parse(value).ok_or_else(|| format!("expected left or right, got '{}'", value))
}

/// Where the layout records live
#[derive(Debug, Clone, PartialEq)]
pub enum StorageChoice {
    Memory,
    Directory(PathBuf),
    /// The platform state directory (`~/.config/fxdock/state`)
    Default,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub storage: StorageChoice,
    pub command: Command,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self, config: &DashboardConfig) -> Result<StartupConfig, String> {
        let storage = match (self.memory, self.state_dir) {
            (true, Some(_)) => {
                return Err("--memory and --state-dir cannot be combined".to_string())
            }
            (true, None) => StorageChoice::Memory,
            (false, Some(dir)) => StorageChoice::Directory(dir),
            (false, None) if !config.persist_layout => StorageChoice::Memory,
            (false, None) => StorageChoice::Default,
        };

        Ok(StartupConfig {
            storage,
            command: self.command.unwrap_or(Command::Show),
        })
    }
}
