//! Grid model - the complete state of the panel page
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drag;
pub mod panel;
pub mod pickup;
pub mod registry;

pub use drag::{drop_candidates, insertion_target, DragController, DragRefusal, DragState, InsertionPoint};
pub use panel::{Bounds, GridItem, LiftState, Panel, PanelId, PanelKey, Placeholder};
pub use pickup::{PickupController, PickupRefusal, Presentation, Toggled};
pub use registry::PanelRegistry;

use crate::config::GridConfig;

/// The complete grid model
#[derive(Debug, Clone)]
pub struct GridModel {
    /// All panels and the container order
    pub registry: PanelRegistry,
    /// In-progress drag gesture
    pub drag: DragController,
    /// Exclusive lift state; one per page
    pub pickup: PickupController,
    pub config: GridConfig,
}

impl GridModel {
    pub fn new(registry: PanelRegistry, config: GridConfig) -> Self {
        Self {
            registry,
            drag: DragController::new(),
            pickup: PickupController::new(config.presentation),
            config,
        }
    }

    /// Panel ids in container order (unassigned ids render as empty)
    pub fn order(&self) -> Vec<String> {
        self.registry
            .all()
            .map(|p| p.id.as_ref().map(|id| id.to_string()).unwrap_or_default())
            .collect()
    }

    /// Panel currently under a title edit, if any
    pub fn editing_panel(&self) -> Option<PanelKey> {
        self.registry.all().find(|p| p.editing_title).map(|p| p.key)
    }

    /// Check cross-controller invariants (debug builds)
    ///
    /// - at most one panel is LIFTED, and it is the pickup controller's panel
    /// - a placeholder exists exactly while a panel is lifted
    /// - the dragged panel, if any, is NORMAL
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let lifted: Vec<_> = self.registry.all().filter(|p| p.is_lifted()).map(|p| p.key).collect();
        debug_assert!(lifted.len() <= 1, "[{}] multiple lifted panels: {:?}", context, lifted);
        debug_assert_eq!(
            lifted.first().copied(),
            self.pickup.lifted(),
            "[{}] lifted panel out of sync with pickup controller",
            context
        );
        debug_assert_eq!(
            self.registry.placeholder().is_some(),
            self.pickup.is_active(),
            "[{}] placeholder without lift (or lift without placeholder)",
            context
        );
        if let Some(key) = self.drag.dragged() {
            debug_assert!(
                self.registry.get(key).is_some_and(|p| !p.is_lifted()),
                "[{}] dragged panel is lifted or missing",
                context
            );
        }
    }
}
