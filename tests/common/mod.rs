//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use panel_grid::config::GridConfig;
use panel_grid::geometry::column_measurements;
use panel_grid::model::{Bounds, GridModel, PanelId, PanelKey, PanelRegistry, Presentation};
use panel_grid::runtime::Engine;
use panel_grid::store::{MemoryStore, PersistenceStore, DEFAULT_STORAGE_KEY};
use panel_grid::update::update;
use panel_grid::PersistedArrangement;

/// Height of every test panel; with no gap, panel `i` spans `[40i, 40i + 40)`
pub const PANEL_HEIGHT: f32 = 40.0;

fn registry(titles: &[&str]) -> PanelRegistry {
    let mut registry = PanelRegistry::with_panels(titles.iter().map(|t| (None, *t)));
    registry.ensure_identifiers();
    set_heights(&mut registry);
    registry
}

pub fn test_config(presentation: Presentation) -> GridConfig {
    GridConfig {
        presentation,
        gap: 0.0,
        ..GridConfig::default()
    }
}

/// Model with `section-{n}` ids, laid out in a gapless column
pub fn test_model(titles: &[&str]) -> GridModel {
    test_model_with(titles, Presentation::Surface)
}

pub fn test_model_with(titles: &[&str], presentation: Presentation) -> GridModel {
    let mut model = GridModel::new(registry(titles), test_config(presentation));
    relayout(&mut model);
    model
}

/// Re-measure the column, as a rendering surface would after a reflow
pub fn relayout(model: &mut GridModel) {
    for msg in column_measurements(&model.registry, 0.0, model.config.gap) {
        update(model, msg);
    }
}

/// Engine over a memory store, started up and laid out
pub fn test_engine(titles: &[&str], stored: Option<&str>) -> Engine<MemoryStore> {
    let store = match stored {
        Some(blob) => MemoryStore::with_blob(DEFAULT_STORAGE_KEY, blob),
        None => MemoryStore::new(DEFAULT_STORAGE_KEY),
    };
    engine_with_store(titles, store)
}

/// Engine over any store, as a fresh page load would build it
pub fn engine_with_store<S: PersistenceStore>(titles: &[&str], store: S) -> Engine<S> {
    let model = GridModel::new(
        PanelRegistry::with_panels(titles.iter().map(|t| (None, *t))),
        test_config(Presentation::Surface),
    );
    let mut engine = Engine::new(model, store);
    engine.startup();
    set_heights(&mut engine.model.registry);
    relayout(&mut engine.model);
    engine
}

fn set_heights(registry: &mut PanelRegistry) {
    let keys: Vec<_> = registry.all().map(|p| p.key).collect();
    for key in keys {
        if let Some(panel) = registry.get_mut(key) {
            panel.bounds = Some(Bounds::new(0.0, PANEL_HEIGHT));
        }
    }
}

/// Key of the panel with the given id
pub fn key(model: &GridModel, id: &str) -> PanelKey {
    model
        .registry
        .by_id(&PanelId::from(id))
        .unwrap_or_else(|| panic!("no panel with id {}", id))
        .key
}

pub fn titles(model: &GridModel) -> Vec<String> {
    model.registry.all().map(|p| p.title.clone()).collect()
}

/// Parse whatever the store currently holds
pub fn stored<S: PersistenceStore>(engine: &Engine<S>) -> Option<PersistedArrangement> {
    engine
        .store()
        .load()
        .and_then(|raw| PersistedArrangement::parse(&raw))
}

pub fn stored_order<S: PersistenceStore>(engine: &Engine<S>) -> Vec<String> {
    stored(engine)
        .map(|a| a.order.into_iter().map(|id| id.0).collect())
        .unwrap_or_default()
}
