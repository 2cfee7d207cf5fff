//! Title editing handlers
//!
//! Titles are edited in place; the arrangement is committed when the title
//! region loses focus.

use crate::commands::Cmd;
use crate::messages::TitleMsg;
use crate::model::GridModel;

/// Handle title editing messages
pub fn update_title(model: &mut GridModel, msg: TitleMsg) -> Option<Cmd> {
    match msg {
        TitleMsg::BeginEdit(key) => {
            model.registry.get(key)?;
            // Text focus is exclusive
            if let Some(previous) = model.editing_panel().filter(|k| *k != key) {
                if let Some(panel) = model.registry.get_mut(previous) {
                    panel.editing_title = false;
                }
            }
            let panel = model.registry.get_mut(key)?;
            panel.editing_title = true;
            Some(Cmd::Redraw)
        }

        TitleMsg::Input { key, text } => {
            let panel = model.registry.get_mut(key)?;
            panel.title = text;
            Some(Cmd::Redraw)
        }

        TitleMsg::EndEdit(key) => {
            let panel = model.registry.get_mut(key)?;
            panel.editing_title = false;
            tracing::debug!(?key, title = %panel.title, "title edit finished");
            Some(Cmd::commit(&model.registry))
        }
    }
}
