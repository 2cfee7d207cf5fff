//! Pickup (lift) state machine
//!
//! At most one panel is LIFTED at a time. Lifting leaves a placeholder in the
//! panel's slot so the grid keeps its shape, raises the dimming overlay, and
//! relocates the panel out of the grid flow. Lowering puts the panel back
//! exactly where its placeholder sits.
//!
//! There is one `PickupController` per page, owned by `GridModel`; the lifted
//! panel and overlay flag live here rather than in ambient state.

use serde::{Deserialize, Serialize};

use super::panel::{LiftState, PanelKey, Placeholder};
use super::registry::PanelRegistry;

/// Where a lifted panel is relocated while it floats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presentation {
    /// Moved to the end of the grid flow
    EndOfFlow,
    /// Detached from the grid onto the top-level surface
    #[default]
    Surface,
}

/// Result of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Lifted(PanelKey),
    Lowered(PanelKey),
}

/// Reason a toggle was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupRefusal {
    UnknownPanel,
    /// A different panel is already lifted
    AnotherLifted(PanelKey),
}

#[derive(Debug, Clone, Default)]
pub struct PickupController {
    lifted: Option<PanelKey>,
    overlay_active: bool,
    pub presentation: Presentation,
}

impl PickupController {
    pub fn new(presentation: Presentation) -> Self {
        Self {
            lifted: None,
            overlay_active: false,
            presentation,
        }
    }

    /// The currently lifted panel
    pub fn lifted(&self) -> Option<PanelKey> {
        self.lifted
    }

    pub fn is_active(&self) -> bool {
        self.lifted.is_some()
    }

    /// Whether the full-surface dimming overlay is shown
    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }

    /// Lift a NORMAL panel or lower the lifted one
    pub fn toggle(
        &mut self,
        registry: &mut PanelRegistry,
        key: PanelKey,
    ) -> Result<Toggled, PickupRefusal> {
        match self.lifted {
            Some(current) if current == key => {
                self.lower(registry);
                Ok(Toggled::Lowered(key))
            }
            Some(current) => Err(PickupRefusal::AnotherLifted(current)),
            None => self.lift(registry, key).map(|_| Toggled::Lifted(key)),
        }
    }

    fn lift(&mut self, registry: &mut PanelRegistry, key: PanelKey) -> Result<(), PickupRefusal> {
        let height = registry
            .get(key)
            .ok_or(PickupRefusal::UnknownPanel)?
            .height();

        // A panel already off the grid has no slot to hold
        if registry
            .insert_placeholder_after(Placeholder { holds: key, height })
            .is_none()
        {
            return Err(PickupRefusal::UnknownPanel);
        }

        if let Some(panel) = registry.get_mut(key) {
            panel.lift = LiftState::Lifted;
            panel.draggable = false;
            panel.dragging = false;
        }
        self.overlay_active = true;

        match self.presentation {
            Presentation::EndOfFlow => {
                registry.move_to_end(key);
            }
            Presentation::Surface => {
                registry.detach_to_surface(key);
            }
        }

        self.lifted = Some(key);
        tracing::debug!(?key, height, "panel lifted");
        Ok(())
    }

    /// Lower the lifted panel back into its placeholder's slot
    ///
    /// Returns the lowered panel, or `None` if nothing was lifted.
    pub fn lower(&mut self, registry: &mut PanelRegistry) -> Option<PanelKey> {
        let key = self.lifted.take()?;

        if registry.replace_placeholder(key).is_none() {
            tracing::warn!(?key, "lifted panel had no placeholder; leaving it in place");
        }
        if let Some(panel) = registry.get_mut(key) {
            panel.lift = LiftState::Normal;
            panel.draggable = true;
        }
        self.overlay_active = false;

        tracing::debug!(?key, "panel lowered");
        Some(key)
    }
}
