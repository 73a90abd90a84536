//! fxdock command-line entry point

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use fxdock::cli::{CliArgs, Command, StartupConfig, StorageChoice, DESKTOP_VIEWPORT};
use fxdock::messages::{AppMsg, Msg};
use fxdock::panel::{PanelId, PanelPosition};
use fxdock::store::{FileStorage, LayoutStore, MemoryStorage, StorageBackend};
use fxdock::{update, DashboardConfig, DashboardModel};

fn open_store(choice: &StorageChoice) -> Result<LayoutStore> {
    let backend: Box<dyn StorageBackend> = match choice {
        StorageChoice::Memory => Box::new(MemoryStorage::new()),
        StorageChoice::Directory(dir) => Box::new(FileStorage::new(dir.clone())),
        StorageChoice::Default => Box::new(
            FileStorage::default_location().context("No state directory available")?,
        ),
    };
    Ok(LayoutStore::new(backend))
}

fn mounted_model(config: DashboardConfig, store: LayoutStore, viewport: (f32, f32)) -> DashboardModel {
    let mut model = DashboardModel::new(config, store, viewport);
    update(&mut model, Msg::App(AppMsg::Mount));
    model
}

fn panel_json(model: &DashboardModel, position: PanelPosition) -> serde_json::Value {
    let controller = model.controller(position);
    json!({
        "position": position.as_str(),
        "mode": format!("{:?}", controller.mode()),
        "activePanelId": controller.active_panel().map(PanelId::as_str),
        "width": controller.width(),
        "persisted": model.store.panel(position),
    })
}

fn run(startup: StartupConfig, config: DashboardConfig) -> Result<()> {
    let mut store = open_store(&startup.storage)?;

    match startup.command {
        Command::Show => {
            let records = json!({
                "sidebar_state": store.get(),
                "sidebar_locks": store.locks(),
                "onboarding": store.onboarding(),
            });
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Geometry { viewport, height } => {
            let model = mounted_model(config, store, (viewport, height));
            let geometry = model
                .geometry()
                .copied()
                .context("Main content geometry was not resolved")?;
            for (property, value) in geometry.css_declarations() {
                println!("{}: {};", property, value);
            }
        }
        Command::Toggle { position, panel_id } => {
            let mut model = mounted_model(config, store, DESKTOP_VIEWPORT);
            update(&mut model, Msg::toggle(position, panel_id));
            println!("{}", serde_json::to_string_pretty(&panel_json(&model, position))?);
        }
        Command::Lock { position } => {
            let mut model = mounted_model(config, store, DESKTOP_VIEWPORT);
            update(&mut model, Msg::toggle_lock(position));
            println!("{}", serde_json::to_string_pretty(&panel_json(&model, position))?);
        }
        Command::Reset => {
            store.clear();
            if store.is_degraded() {
                anyhow::bail!("Could not clear layout records (storage unavailable)");
            }
            println!("Layout records cleared");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    fxdock::tracing::init();

    let config = DashboardConfig::load();
    let startup = CliArgs::parse()
        .into_config(&config)
        .map_err(anyhow::Error::msg)?;
    tracing::debug!(?startup, "Starting");

    run(startup, config)
}
