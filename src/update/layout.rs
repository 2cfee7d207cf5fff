//! Geometry handlers

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::GridModel;

/// Record geometry reported by the rendering surface
///
/// Measurements never change the arrangement, so no redraw is requested.
pub fn update_layout(model: &mut GridModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::Measured { key, bounds } => {
            if let Some(panel) = model.registry.get_mut(key) {
                panel.bounds = Some(bounds);
            }
            None
        }
    }
}
