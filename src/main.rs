use anyhow::{bail, Context, Result};
use clap::Parser;

use panel_grid::cli::{CliArgs, GridCommand};
use panel_grid::geometry::column_measurements;
use panel_grid::messages::{DragMsg, Msg, PickupMsg, TitleMsg};
use panel_grid::model::{GridItem, GridModel, PanelId, PanelKey};
use panel_grid::page::PageSpec;
use panel_grid::runtime::Engine;
use panel_grid::store::{FileStore, PersistenceStore};
use panel_grid::GridConfig;

fn main() -> Result<()> {
    panel_grid::tracing::init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => GridConfig::load_from(path),
        None => GridConfig::load(),
    };
    if let Some(key) = &args.key {
        config.storage_key = key.clone();
    }

    let page = match &args.page {
        Some(path) => PageSpec::load(path)?,
        None => PageSpec::default(),
    };

    let store = match &args.state_dir {
        Some(dir) => FileStore::new(dir, &config.storage_key),
        None => FileStore::in_state_dir(&config.storage_key)
            .context("No state directory available; pass --state-dir")?,
    };
    tracing::info!("Using stored arrangement at {}", store.path().display());

    let gap = config.gap;
    let model = GridModel::new(page.build_registry(), config);
    let mut engine = Engine::new(model, store);

    // Reset writes the page defaults without restoring anything first
    if args.command != GridCommand::Reset {
        let report = engine.startup();
        tracing::debug!(?report, "startup reconciliation");
        engine.dispatch_all(column_measurements(&engine.model.registry, 0.0, gap));
    }

    match args.command {
        GridCommand::Show => print_arrangement(&engine.model),

        GridCommand::Move { id, to_y } => {
            let key = resolve(&engine.model, &id)?;
            engine.dispatch(Msg::drag_start(key));
            if !engine.model.drag.is_dragging() {
                bail!("Panel '{}' cannot be dragged right now", id);
            }
            engine.dispatch_all([
                Msg::drag_move(to_y),
                Msg::Drag(DragMsg::Drop),
                Msg::Drag(DragMsg::End),
            ]);
            print_arrangement(&engine.model);
        }

        GridCommand::Rename { id, title } => {
            let key = resolve(&engine.model, &id)?;
            engine.dispatch_all([
                Msg::Title(TitleMsg::BeginEdit(key)),
                Msg::Title(TitleMsg::Input { key, text: title }),
                Msg::Title(TitleMsg::EndEdit(key)),
            ]);
            print_arrangement(&engine.model);
        }

        GridCommand::Lift { id } => {
            let key = resolve(&engine.model, &id)?;
            engine.dispatch(Msg::Pickup(PickupMsg::HeaderClicked(key)));
            if engine.model.pickup.lifted() != Some(key) {
                bail!("Panel '{}' cannot be lifted right now", id);
            }
            print_arrangement(&engine.model);
            if let Some(blob) = engine.store().load() {
                println!("stored: {}", blob);
            }
            engine.dispatch(Msg::Pickup(PickupMsg::OverlayClicked));
        }

        GridCommand::Reset => {
            engine.model.registry.ensure_identifiers();
            engine.commit();
            println!("Stored arrangement reset");
            print_arrangement(&engine.model);
        }
    }

    Ok(())
}

fn resolve(model: &GridModel, id: &str) -> Result<PanelKey> {
    model
        .registry
        .by_id(&PanelId::from(id))
        .map(|p| p.key)
        .with_context(|| format!("No panel with id '{}'", id))
}

fn print_arrangement(model: &GridModel) {
    for (index, item) in model.registry.items().iter().enumerate() {
        match item {
            GridItem::Panel(panel) => println!(
                "{:>3}  {:<16} {}{}",
                index,
                panel.id.as_ref().map(|id| id.as_str()).unwrap_or("?"),
                panel.title,
                if panel.is_lifted() { "  (lifted)" } else { "" }
            ),
            GridItem::Placeholder(_) => println!("{:>3}  [slot]", index),
        }
    }
    if let Some(panel) = model.registry.surface() {
        println!(
            "  ^  {:<16} {}  (lifted)",
            panel.id.as_ref().map(|id| id.as_str()).unwrap_or("?"),
            panel.title
        );
    }
}
