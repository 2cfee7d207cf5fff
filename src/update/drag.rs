//! Drag-to-reorder handlers

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{drop_candidates, insertion_target, GridModel};

/// Handle drag gesture messages
pub fn update_drag(model: &mut GridModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start(key) => {
            let lift_active = model.pickup.is_active();
            if let Err(reason) = model.drag.check_start(&model.registry, key, lift_active) {
                tracing::debug!(?key, ?reason, "drag refused");
                return None;
            }
            model.drag.begin(key);
            if let Some(panel) = model.registry.get_mut(key) {
                panel.dragging = true;
            }
            Some(Cmd::Redraw)
        }

        DragMsg::Move { pointer_y } => {
            let dragged = model.drag.dragged()?;
            let target = insertion_target(pointer_y, drop_candidates(&model.registry, dragged));
            if model.registry.move_before(dragged, target.before_key()) {
                tracing::trace!(?dragged, ?target, pointer_y, "dragged panel moved");
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        // The live order is kept as last computed; an abandoned gesture is
        // committed the same way as a completed one.
        DragMsg::Drop | DragMsg::End | DragMsg::Abandon => {
            let dragged = model.drag.finish()?;
            if let Some(panel) = model.registry.get_mut(dragged) {
                panel.dragging = false;
            }
            tracing::debug!(?dragged, ?msg, "drag finished");
            Some(Cmd::commit(&model.registry))
        }
    }
}
