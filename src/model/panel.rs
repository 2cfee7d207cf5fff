//! Panel entities and the slot marker that stands in for a lifted panel

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-local handle for a panel
///
/// Keys are never persisted. They keep a panel addressable inside the engine
/// even when its string id is missing or shadowed by a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelKey(pub u64);

/// Stable, persisted panel identifier (e.g. `section-3`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier assigned to a panel first seen at `index` in the arrangement
    pub fn positional(index: usize) -> Self {
        Self(format!("section-{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Whether a panel sits in the grid or is lifted above it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiftState {
    #[default]
    Normal,
    Lifted,
}

/// Vertical extent of a rendered item, in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Vertical midpoint
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// A reorderable, user-titled unit of the grid
#[derive(Debug, Clone)]
pub struct Panel {
    pub key: PanelKey,
    /// Persisted identifier; `None` until `ensure_identifiers` runs
    pub id: Option<PanelId>,
    pub title: String,
    pub lift: LiftState,
    /// Drag affordance exposed to the rendering surface
    pub draggable: bool,
    /// Title region currently has text focus
    pub editing_title: bool,
    /// Flagged while this panel is the subject of a drag gesture
    pub dragging: bool,
    /// Last geometry reported by the rendering surface
    pub bounds: Option<Bounds>,
}

impl Panel {
    pub fn new(key: PanelKey, id: Option<PanelId>, title: impl Into<String>) -> Self {
        Self {
            key,
            id,
            title: title.into(),
            lift: LiftState::Normal,
            draggable: true,
            editing_title: false,
            dragging: false,
            bounds: None,
        }
    }

    pub fn is_lifted(&self) -> bool {
        self.lift == LiftState::Lifted
    }

    /// Rendered height, or zero if the panel has never been measured
    pub fn height(&self) -> f32 {
        self.bounds.map(|b| b.height).unwrap_or(0.0)
    }
}

/// Titleless slot marker holding a lifted panel's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder {
    /// The lifted panel whose slot this marks
    pub holds: PanelKey,
    pub height: f32,
}

/// One entry of the grid container
#[derive(Debug, Clone)]
pub enum GridItem {
    Panel(Panel),
    Placeholder(Placeholder),
}

impl GridItem {
    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            GridItem::Panel(panel) => Some(panel),
            GridItem::Placeholder(_) => None,
        }
    }

    pub fn as_panel_mut(&mut self) -> Option<&mut Panel> {
        match self {
            GridItem::Panel(panel) => Some(panel),
            GridItem::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, GridItem::Placeholder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_id_format() {
        assert_eq!(PanelId::positional(0).as_str(), "section-0");
        assert_eq!(PanelId::positional(12).to_string(), "section-12");
    }

    #[test]
    fn test_bounds_midpoint() {
        let b = Bounds::new(40.0, 20.0);
        assert_eq!(b.mid_y(), 50.0);
        assert_eq!(b.bottom(), 60.0);
    }

    #[test]
    fn test_new_panel_is_normal_and_draggable() {
        let panel = Panel::new(PanelKey(1), None, "Links");
        assert_eq!(panel.lift, LiftState::Normal);
        assert!(panel.draggable);
        assert!(!panel.editing_title);
        assert_eq!(panel.height(), 0.0);
    }

    #[test]
    fn test_panel_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PanelId::from("section-1")).unwrap();
        assert_eq!(json, "\"section-1\"");
    }
}
