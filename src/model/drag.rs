//! Drag-to-reorder state and insertion-point search
//!
//! A drag moves through `Idle -> Dragging -> Idle`. While dragging, every
//! pointer move recomputes where the dragged panel belongs among the other
//! NORMAL panels and moves it there immediately.

use super::panel::{Bounds, LiftState, PanelKey};
use super::registry::PanelRegistry;

/// Where the dragged panel should be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Immediately before this panel
    Before(PanelKey),
    /// After every remaining panel
    End,
}

impl InsertionPoint {
    pub fn before_key(self) -> Option<PanelKey> {
        match self {
            InsertionPoint::Before(key) => Some(key),
            InsertionPoint::End => None,
        }
    }
}

/// Find the insertion point for a pointer at `pointer_y`
///
/// For each candidate, `offset = pointer_y - midpoint`. The winner is the
/// candidate with the negative offset closest to zero, i.e. the first panel
/// whose midpoint lies below the pointer. Ties go to the first candidate
/// encountered. With no negative offset (including no candidates at all) the
/// result is `End`.
pub fn insertion_target<I>(pointer_y: f32, candidates: I) -> InsertionPoint
where
    I: IntoIterator<Item = (PanelKey, Bounds)>,
{
    candidates
        .into_iter()
        .fold(
            (f32::NEG_INFINITY, InsertionPoint::End),
            |(closest, best), (key, bounds)| {
                let offset = pointer_y - bounds.mid_y();
                if offset < 0.0 && offset > closest {
                    (offset, InsertionPoint::Before(key))
                } else {
                    (closest, best)
                }
            },
        )
        .1
}

/// Measured NORMAL grid panels other than `dragged`, in flow order
pub fn drop_candidates(
    registry: &PanelRegistry,
    dragged: PanelKey,
) -> impl Iterator<Item = (PanelKey, Bounds)> + '_ {
    registry
        .items()
        .iter()
        .filter_map(|item| item.as_panel())
        .filter(move |p| p.key != dragged && p.lift == LiftState::Normal)
        .filter_map(|p| p.bounds.map(|b| (p.key, b)))
}

/// Reason a drag could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRefusal {
    UnknownPanel,
    /// The panel is lifted; lifted panels never drag
    Lifted,
    /// Title edits take precedence over drags
    EditingTitle,
    NotDraggable,
    AlreadyDragging,
    /// Another panel is lifted and the overlay covers the grid
    LiftActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        panel: PanelKey,
    },
}

/// Tracks the single in-progress drag gesture
#[derive(Debug, Clone, Default)]
pub struct DragController {
    pub state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged(&self) -> Option<PanelKey> {
        match self.state {
            DragState::Dragging { panel } => Some(panel),
            DragState::Idle => None,
        }
    }

    /// Check whether `key` may start a drag right now
    pub fn check_start(
        &self,
        registry: &PanelRegistry,
        key: PanelKey,
        lift_active: bool,
    ) -> Result<(), DragRefusal> {
        let panel = registry.get(key).ok_or(DragRefusal::UnknownPanel)?;
        if panel.lift == LiftState::Lifted {
            return Err(DragRefusal::Lifted);
        }
        if panel.editing_title {
            return Err(DragRefusal::EditingTitle);
        }
        if self.is_dragging() {
            return Err(DragRefusal::AlreadyDragging);
        }
        if lift_active {
            return Err(DragRefusal::LiftActive);
        }
        if !panel.draggable {
            return Err(DragRefusal::NotDraggable);
        }
        Ok(())
    }

    pub fn begin(&mut self, key: PanelKey) {
        self.state = DragState::Dragging { panel: key };
    }

    /// Return to idle, yielding the panel that was being dragged
    pub fn finish(&mut self) -> Option<PanelKey> {
        let dragged = self.dragged();
        self.state = DragState::Idle;
        dragged
    }
}
