//! Reconciliation between the live registry and the persisted arrangement
//!
//! `serialize` derives a fresh record from the registry; `apply` restores a
//! stored record onto the registry, tolerating stale or damaged storage:
//!
//! - absent or malformed blob: nothing is restored
//! - ids that no longer exist: silently skipped
//! - live panels missing from the stored order: appended in their current
//!   relative order, so no panel ever disappears

use std::collections::{HashMap, HashSet};

use crate::arrangement::PersistedArrangement;
use crate::model::{GridItem, LiftState, Panel, PanelId, PanelKey, PanelRegistry};

/// What `apply` did with the stored blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No stored arrangement (first run)
    FirstRun,
    /// Stored blob could not be parsed; treated like first run
    Malformed,
    Applied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcome: ApplyOutcome,
    /// Titles overwritten from storage
    pub titles_restored: usize,
    /// Stored ids (titles or order) with no live panel
    pub unknown_ids: usize,
    /// Live panels absent from the stored order, appended at the end
    pub appended: usize,
}

impl ApplyReport {
    fn skipped(outcome: ApplyOutcome) -> Self {
        Self {
            outcome,
            titles_restored: 0,
            unknown_ids: 0,
            appended: 0,
        }
    }
}

/// Derive the persisted arrangement from live state
///
/// NORMAL panels are recorded in flow order. A lifted panel is recorded at
/// the position of its placeholder, so its slot survives a reload. The
/// resulting `order` has no duplicates and `titles` covers exactly its ids.
///
/// A shared id is recorded for the panel `by_id` resolves to, at that
/// panel's position and with its title; shadowed holders are left out.
pub fn serialize(registry: &PanelRegistry) -> PersistedArrangement {
    let owners = id_owners(registry);
    let mut arrangement = PersistedArrangement::default();
    let mut seen = HashSet::new();

    let mut record = |panel: &Panel| {
        let Some(id) = panel.id.as_ref() else {
            tracing::debug!(key = ?panel.key, "skipping panel without id");
            return;
        };
        if owners.get(id) != Some(&panel.key) {
            tracing::debug!(key = ?panel.key, %id, "skipping shadowed panel");
            return;
        }
        if seen.insert(id.clone()) {
            arrangement.order.push(id.clone());
            arrangement.titles.insert(id.clone(), panel.title.clone());
        }
    };

    let mut held = HashSet::new();
    for item in registry.items() {
        match item {
            GridItem::Panel(panel) if panel.lift == LiftState::Normal => record(panel),
            GridItem::Panel(_) => {}
            GridItem::Placeholder(placeholder) => {
                if let Some(panel) = registry.get(placeholder.holds) {
                    held.insert(panel.key);
                    record(panel);
                }
            }
        }
    }

    // A lifted panel whose placeholder went missing is still recorded
    for panel in registry.all().filter(|p| p.is_lifted() && !held.contains(&p.key)) {
        record(panel);
    }

    arrangement
}

/// Restore a stored blob onto the registry
///
/// Titles are restored first, then the order is rebuilt and committed as a
/// single replace of the container.
pub fn apply(raw: Option<&str>, registry: &mut PanelRegistry) -> ApplyReport {
    let Some(raw) = raw else {
        tracing::info!("No stored arrangement; keeping default layout");
        return ApplyReport::skipped(ApplyOutcome::FirstRun);
    };
    let Some(stored) = PersistedArrangement::parse(raw) else {
        return ApplyReport::skipped(ApplyOutcome::Malformed);
    };

    let mut report = ApplyReport::skipped(ApplyOutcome::Applied);

    for (id, title) in &stored.titles {
        match registry.by_id_mut(id) {
            Some(panel) => {
                panel.title.clone_from(title);
                report.titles_restored += 1;
            }
            None => report.unknown_ids += 1,
        }
    }

    let live = id_owners(registry);
    // Storage cannot address a shadowed holder, so it keeps its slot
    let shadowed: HashSet<PanelKey> = registry
        .all()
        .filter(|p| {
            p.id.as_ref()
                .is_some_and(|id| live.get(id) != Some(&p.key))
        })
        .map(|p| p.key)
        .collect();

    let mut resolved = Vec::with_capacity(stored.order.len());
    let mut placed = HashSet::new();
    for id in &stored.order {
        match live.get(id) {
            Some(&key) => {
                if placed.insert(key) {
                    resolved.push(key);
                }
            }
            None => {
                if !stored.titles.contains_key(id) {
                    report.unknown_ids += 1;
                }
            }
        }
    }

    report.appended = registry
        .normal_keys()
        .iter()
        .filter(|k| !placed.contains(k) && !shadowed.contains(k))
        .count();

    registry.commit_order(&resolved, &shadowed);

    tracing::info!(
        titles = report.titles_restored,
        unknown = report.unknown_ids,
        appended = report.appended,
        "Restored stored arrangement"
    );
    report
}

/// Panel each id resolves to; later holders of a shared id win, like `by_id`
fn id_owners(registry: &PanelRegistry) -> HashMap<PanelId, PanelKey> {
    registry
        .all()
        .filter_map(|p| p.id.clone().map(|id| (id, p.key)))
        .collect()
}
