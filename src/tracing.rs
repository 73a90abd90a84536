//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging panel
//! transitions and persistence.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=fxdock::panel=debug` - panel state machine only
//! - `RUST_LOG=fxdock::store=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/fxdock/logs/fxdock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::DashboardModel;
use crate::panel::{PanelMode, PanelPosition};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); file logging writes to
/// `~/.config/fxdock/logs/fxdock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so command output on stdout stays parseable
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "fxdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of both panels for diffing across an update
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub panels: Vec<PanelInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub position: PanelPosition,
    pub mode: PanelMode,
    pub active: Option<String>,
    pub width: f32,
    pub rendered: bool,
}

impl LayoutSnapshot {
    pub fn from_model(model: &DashboardModel) -> Self {
        Self {
            panels: PanelPosition::ALL
                .into_iter()
                .map(|position| {
                    let c = model.controller(position);
                    PanelInfo {
                        position,
                        mode: c.mode(),
                        active: c.active_panel().map(|id| id.to_string()),
                        width: c.width(),
                        rendered: c.is_rendered(),
                    }
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        for (before, after) in self.panels.iter().zip(&other.panels) {
            if before.mode != after.mode {
                changes.push(format!(
                    "{}: {:?} → {:?}",
                    after.position, before.mode, after.mode
                ));
            }
            if before.active != after.active {
                changes.push(format!(
                    "{}: active {} → {}",
                    after.position,
                    before.active.as_deref().unwrap_or("-"),
                    after.active.as_deref().unwrap_or("-")
                ));
            }
            if before.width != after.width {
                changes.push(format!(
                    "{}: width {} → {}",
                    after.position, before.width, after.width
                ));
            }
            if before.rendered != after.rendered {
                let status = if after.rendered { "shown" } else { "hidden" };
                changes.push(format!("{}: {}", after.position, status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
