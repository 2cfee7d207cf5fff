//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them synchronously, before the next message.

use crate::arrangement::PersistedArrangement;
use crate::model::PanelRegistry;
use crate::reconcile;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Arrangement or panel state changed; re-render
    Redraw,
    /// Write the serialized arrangement to storage
    SaveArrangement { blob: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Redraw and persist the registry's current arrangement
    pub fn commit(registry: &PanelRegistry) -> Self {
        let arrangement: PersistedArrangement = reconcile::serialize(registry);
        Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::SaveArrangement {
                blob: arrangement.to_json(),
            },
        ])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Check if this command writes to storage
    pub fn saves(&self) -> bool {
        match self {
            Cmd::SaveArrangement { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.saves()),
            _ => false,
        }
    }
}
