//! Pickup (lift) handlers

use crate::commands::Cmd;
use crate::messages::PickupMsg;
use crate::model::{GridModel, PanelKey};

/// Handle pickup messages
pub fn update_pickup(model: &mut GridModel, msg: PickupMsg) -> Option<Cmd> {
    match msg {
        PickupMsg::HeaderClicked(key) => {
            // Clicks inside a title being edited belong to the editor
            if model.registry.get(key).is_some_and(|p| p.editing_title) {
                return None;
            }
            toggle(model, key)
        }

        PickupMsg::Toggle(key) => toggle(model, key),

        PickupMsg::OverlayClicked => {
            model.pickup.lower(&mut model.registry)?;
            Some(Cmd::commit(&model.registry))
        }
    }
}

fn toggle(model: &mut GridModel, key: PanelKey) -> Option<Cmd> {
    if model.drag.is_dragging() {
        tracing::debug!(?key, "pickup ignored during drag");
        return None;
    }
    match model.pickup.toggle(&mut model.registry, key) {
        Ok(toggled) => {
            tracing::debug!(?toggled, "pickup toggled");
            Some(Cmd::commit(&model.registry))
        }
        Err(reason) => {
            tracing::debug!(?key, ?reason, "pickup refused");
            None
        }
    }
}
