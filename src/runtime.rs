//! Runtime - owns the model and the store, executes commands
//!
//! Events are handled one at a time: `dispatch` runs `update` and then every
//! resulting command, including the storage write, before returning. A
//! commit therefore always lands after the state change that caused it and
//! before the next event is looked at.

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GridModel;
use crate::reconcile::{self, ApplyReport};
use crate::store::PersistenceStore;
use crate::update::update;

pub struct Engine<S: PersistenceStore> {
    pub model: GridModel,
    store: S,
}

impl<S: PersistenceStore> Engine<S> {
    pub fn new(model: GridModel, store: S) -> Self {
        Self { model, store }
    }

    /// Assign ids and restore the stored arrangement
    ///
    /// Must run once, before any event is dispatched.
    pub fn startup(&mut self) -> ApplyReport {
        self.model.registry.ensure_identifiers();
        let raw = self.store.load();
        reconcile::apply(raw.as_deref(), &mut self.model.registry)
    }

    /// Handle one event to completion
    ///
    /// Returns `true` if the surface should redraw.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let cmd = update(&mut self.model, msg);
        let redraw = cmd.as_ref().is_some_and(Cmd::needs_redraw);
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
        redraw
    }

    /// Handle a sequence of events in order
    pub fn dispatch_all(&mut self, msgs: impl IntoIterator<Item = Msg>) -> bool {
        msgs.into_iter()
            .fold(false, |redraw, msg| self.dispatch(msg) || redraw)
    }

    /// Overwrite storage with the current arrangement
    pub fn commit(&mut self) {
        self.process_cmd(Cmd::commit(&self.model.registry));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            // Redraws are reported to the caller by `dispatch`
            Cmd::None | Cmd::Redraw => {}
            Cmd::SaveArrangement { blob } => {
                // Not fatal: the next commit overwrites whatever is stored
                if let Err(e) = self.store.save(&blob) {
                    tracing::warn!("Failed to save arrangement: {}", e);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
