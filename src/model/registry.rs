//! Panel registry - the authoritative container of panels
//!
//! The registry owns every panel for the lifetime of the page and is the only
//! source of arrangement order. Nothing else caches order; readers derive it
//! from `all()` or `items()` on demand.
//!
//! ## Container model
//!
//! - `items`: the grid container in flow order (panels and at most one placeholder)
//! - `surface`: a lifted panel detached to the top-level surface, if any
//!
//! `all()` yields grid panels in flow order followed by the surface panel,
//! mirroring document order when a panel is re-parented to the page body.

use std::collections::{HashMap, HashSet};

use super::panel::{GridItem, LiftState, Panel, PanelId, PanelKey, Placeholder};

#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    items: Vec<GridItem>,
    surface: Option<Panel>,
    next_key: u64,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(id, title)` pairs in flow order
    pub fn with_panels<I, S>(panels: I) -> Self
    where
        I: IntoIterator<Item = (Option<PanelId>, S)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (id, title) in panels {
            registry.push(id, title);
        }
        registry
    }

    /// Append a panel at the end of the grid, returning its key
    pub fn push(&mut self, id: Option<PanelId>, title: impl Into<String>) -> PanelKey {
        let key = PanelKey(self.next_key);
        self.next_key += 1;
        self.items.push(GridItem::Panel(Panel::new(key, id, title)));
        key
    }

    /// Assign `section-{n}` to every panel without an id
    ///
    /// `n` is the panel's index in `all()` at call time. Panels that already
    /// carry an id are left alone, so repeated calls are no-ops. Returns the
    /// number of ids assigned.
    pub fn ensure_identifiers(&mut self) -> usize {
        let mut assigned = 0;
        let mut index = 0;
        for panel in self.panels_mut() {
            if panel.id.is_none() {
                panel.id = Some(PanelId::positional(index));
                assigned += 1;
            }
            index += 1;
        }

        let mut seen = HashSet::new();
        for id in self.all().filter_map(|p| p.id.as_ref()) {
            if !seen.insert(id) {
                tracing::warn!(%id, "duplicate panel id; lookups resolve to the last holder");
            }
        }

        if assigned > 0 {
            tracing::debug!("Assigned {} panel identifiers", assigned);
        }
        assigned
    }

    /// All panels in container order
    ///
    /// The returned iterator is cheap to clone; calling `all()` again always
    /// reflects the current order.
    pub fn all(&self) -> impl Iterator<Item = &Panel> + Clone + '_ {
        self.items
            .iter()
            .filter_map(GridItem::as_panel)
            .chain(self.surface.iter())
    }

    fn panels_mut(&mut self) -> impl Iterator<Item = &mut Panel> + '_ {
        self.items
            .iter_mut()
            .filter_map(GridItem::as_panel_mut)
            .chain(self.surface.iter_mut())
    }

    /// Number of panels (placeholders excluded)
    pub fn len(&self) -> usize {
        self.all().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid container in flow order, placeholders included
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Panel detached to the top-level surface
    pub fn surface(&self) -> Option<&Panel> {
        self.surface.as_ref()
    }

    /// Resolve a persisted id; with duplicate ids the last holder wins
    pub fn by_id(&self, id: &PanelId) -> Option<&Panel> {
        self.all()
            .filter(|p| p.id.as_ref() == Some(id))
            .last()
    }

    pub fn by_id_mut(&mut self, id: &PanelId) -> Option<&mut Panel> {
        self.panels_mut()
            .filter(|p| p.id.as_ref() == Some(id))
            .last()
    }

    pub fn get(&self, key: PanelKey) -> Option<&Panel> {
        self.all().find(|p| p.key == key)
    }

    pub fn get_mut(&mut self, key: PanelKey) -> Option<&mut Panel> {
        self.panels_mut().find(|p| p.key == key)
    }

    /// Position of a panel inside the grid container
    pub fn index_of(&self, key: PanelKey) -> Option<usize> {
        self.items
            .iter()
            .position(|item| matches!(item, GridItem::Panel(p) if p.key == key))
    }

    /// Position of the placeholder holding `key`'s slot
    pub fn placeholder_index(&self, key: PanelKey) -> Option<usize> {
        self.items
            .iter()
            .position(|item| matches!(item, GridItem::Placeholder(ph) if ph.holds == key))
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.items.iter().find_map(|item| match item {
            GridItem::Placeholder(ph) => Some(ph),
            GridItem::Panel(_) => None,
        })
    }

    /// Keys of NORMAL grid panels in flow order
    pub fn normal_keys(&self) -> Vec<PanelKey> {
        self.items
            .iter()
            .filter_map(GridItem::as_panel)
            .filter(|p| p.lift == LiftState::Normal)
            .map(|p| p.key)
            .collect()
    }

    /// Move a grid panel so it sits immediately before `before`, or at the end
    ///
    /// Returns `true` if the container order changed.
    pub fn move_before(&mut self, key: PanelKey, before: Option<PanelKey>) -> bool {
        if before == Some(key) {
            return false;
        }
        let Some(from) = self.index_of(key) else {
            return false;
        };
        let snapshot: Vec<_> = self.items.iter().map(item_tag).collect();

        let item = self.items.remove(from);
        let to = match before {
            Some(target) => match self.index_of(target) {
                Some(idx) => idx,
                None => {
                    self.items.insert(from, item);
                    return false;
                }
            },
            None => self.items.len(),
        };
        self.items.insert(to, item);

        self.items.iter().map(item_tag).ne(snapshot)
    }

    /// Insert a placeholder directly after the panel it holds
    pub fn insert_placeholder_after(&mut self, placeholder: Placeholder) -> Option<usize> {
        let idx = self.index_of(placeholder.holds)? + 1;
        self.items.insert(idx, GridItem::Placeholder(placeholder));
        Some(idx)
    }

    /// Move a grid panel to the end of the flow
    pub fn move_to_end(&mut self, key: PanelKey) -> bool {
        self.move_before(key, None)
    }

    /// Detach a grid panel onto the top-level surface
    ///
    /// Only one panel can occupy the surface; returns `false` if it is taken.
    pub fn detach_to_surface(&mut self, key: PanelKey) -> bool {
        if self.surface.is_some() {
            return false;
        }
        let Some(idx) = self.index_of(key) else {
            return false;
        };
        if let GridItem::Panel(panel) = self.items.remove(idx) {
            self.surface = Some(panel);
        }
        self.surface.is_some()
    }

    /// Put a lifted panel back into the slot held by its placeholder
    ///
    /// The placeholder is consumed. Returns the panel's new grid index.
    pub fn replace_placeholder(&mut self, key: PanelKey) -> Option<usize> {
        let slot = self.placeholder_index(key)?;

        let panel = if self.surface.as_ref().is_some_and(|p| p.key == key) {
            self.surface.take()?
        } else {
            let from = self.index_of(key)?;
            let GridItem::Panel(panel) = self.items.remove(from) else {
                return None;
            };
            panel
        };

        // Re-resolve: removing the panel from the grid may shift the slot
        let slot = self.placeholder_index(key).unwrap_or(slot);
        self.items[slot] = GridItem::Panel(panel);
        Some(slot)
    }

    /// Rearrange NORMAL grid panels into `order` in a single replace
    ///
    /// NORMAL panels are permuted within the slots they already occupy;
    /// lifted panels, placeholders and `pinned` panels keep their positions.
    /// Keys in `order` that are not movable grid panels are ignored, and
    /// movable panels missing from `order` are appended after it in their
    /// current relative order.
    pub fn commit_order(&mut self, order: &[PanelKey], pinned: &HashSet<PanelKey>) {
        let current: Vec<PanelKey> = self
            .normal_keys()
            .into_iter()
            .filter(|k| !pinned.contains(k))
            .collect();
        let live: HashSet<PanelKey> = current.iter().copied().collect();

        let mut placed = HashSet::new();
        let mut target: Vec<PanelKey> = order
            .iter()
            .copied()
            .filter(|k| live.contains(k) && placed.insert(*k))
            .collect();
        target.extend(current.iter().copied().filter(|k| !placed.contains(k)));

        let mut moving: HashMap<PanelKey, GridItem> = HashMap::new();
        let mut slots: Vec<Option<GridItem>> = Vec::with_capacity(self.items.len());
        for item in std::mem::take(&mut self.items) {
            match item {
                GridItem::Panel(panel)
                    if panel.lift == LiftState::Normal && !pinned.contains(&panel.key) =>
                {
                    moving.insert(panel.key, GridItem::Panel(panel));
                    slots.push(None);
                }
                fixed => slots.push(Some(fixed)),
            }
        }

        let mut next = target.into_iter();
        let rebuilt = slots
            .into_iter()
            .filter_map(|slot| match slot {
                Some(fixed) => Some(fixed),
                None => next.next().and_then(|key| moving.remove(&key)),
            })
            .collect();

        self.items = rebuilt;
    }
}

fn item_tag(item: &GridItem) -> Option<PanelKey> {
    match item {
        GridItem::Panel(p) => Some(p.key),
        GridItem::Placeholder(_) => None,
    }
}
