//! Single-column layout for headless surfaces
//!
//! A real rendering surface measures panels itself and reports bounds through
//! `LayoutMsg::Measured`. Headless runs and tests use this stacking layout
//! instead: grid items are placed top to bottom, `gap` apart, each keeping
//! its current height. Placeholders occupy space like panels; a panel on the
//! top-level surface is not part of the column.

use crate::messages::Msg;
use crate::model::{Bounds, GridItem, PanelKey, PanelRegistry};

/// Compute stacked bounds for every grid panel, in flow order
pub fn layout_column(registry: &PanelRegistry, origin: f32, gap: f32) -> Vec<(PanelKey, Bounds)> {
    let mut top = origin;
    let mut placed = Vec::new();

    for item in registry.items() {
        let height = match item {
            GridItem::Panel(panel) => {
                let bounds = Bounds::new(top, panel.height());
                placed.push((panel.key, bounds));
                bounds.height
            }
            GridItem::Placeholder(placeholder) => placeholder.height,
        };
        top += height + gap;
    }

    placed
}

/// Measurement messages for `layout_column`
pub fn column_measurements(registry: &PanelRegistry, origin: f32, gap: f32) -> Vec<Msg> {
    layout_column(registry, origin, gap)
        .into_iter()
        .map(|(key, bounds)| Msg::measured(key, bounds.top, bounds.height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Placeholder;

    #[test]
    fn test_column_stacks_with_gap() {
        let mut registry = PanelRegistry::new();
        let a = registry.push(None, "a");
        let b = registry.push(None, "b");
        registry.get_mut(a).unwrap().bounds = Some(Bounds::new(0.0, 20.0));
        registry.get_mut(b).unwrap().bounds = Some(Bounds::new(0.0, 40.0));

        let placed = layout_column(&registry, 100.0, 10.0);
        assert_eq!(placed, vec![(a, Bounds::new(100.0, 20.0)), (b, Bounds::new(130.0, 40.0))]);
    }

    #[test]
    fn test_placeholder_takes_space() {
        let mut registry = PanelRegistry::new();
        let a = registry.push(None, "a");
        let b = registry.push(None, "b");
        registry.get_mut(b).unwrap().bounds = Some(Bounds::new(0.0, 10.0));
        registry.insert_placeholder_after(Placeholder { holds: a, height: 50.0 });
        registry.detach_to_surface(a);

        let placed = layout_column(&registry, 0.0, 0.0);
        assert_eq!(placed, vec![(b, Bounds::new(50.0, 10.0))]);
    }
}
