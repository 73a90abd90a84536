//! fxdock - dockable side panels for a trading dashboard
//!
//! This crate provides the panel state machines, layout persistence and
//! main-content geometry for a dashboard with a collapsible panel on each
//! screen edge, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod store;
pub mod tour;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DashboardConfig;
pub use messages::Msg;
pub use model::DashboardModel;
pub use update::update;
