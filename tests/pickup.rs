//! Pickup (lift) tests

mod common;

use common::{key, stored_order, test_engine, test_model, test_model_with, PANEL_HEIGHT};

use panel_grid::messages::{Msg, PickupMsg, TitleMsg};
use panel_grid::model::{GridItem, LiftState, Presentation};
use panel_grid::reconcile::{apply, serialize};
use panel_grid::update::update;

fn flow(model: &panel_grid::GridModel) -> Vec<String> {
    model
        .registry
        .items()
        .iter()
        .map(|item| match item {
            GridItem::Panel(p) => p.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            GridItem::Placeholder(_) => "_".to_string(),
        })
        .collect()
}

// ========================================================================
// Lift and lower
// ========================================================================

#[test]
fn test_lift_detaches_to_surface_and_leaves_placeholder() {
    let mut model = test_model(&["a", "b", "c"]);
    let b = key(&model, "section-1");

    assert!(update(&mut model, Msg::toggle(b)).is_some());

    assert_eq!(model.pickup.lifted(), Some(b));
    assert!(model.pickup.overlay_active());
    assert_eq!(flow(&model), vec!["section-0", "_", "section-2"]);
    assert_eq!(model.registry.surface().map(|p| p.key), Some(b));

    let placeholder = model.registry.placeholder().unwrap();
    assert_eq!(placeholder.holds, b);
    assert_eq!(placeholder.height, PANEL_HEIGHT);

    let panel = model.registry.get(b).unwrap();
    assert_eq!(panel.lift, LiftState::Lifted);
    assert!(!panel.draggable);
}

#[test]
fn test_lift_end_of_flow_moves_panel_last() {
    let mut model = test_model_with(&["a", "b", "c"], Presentation::EndOfFlow);
    let a = key(&model, "section-0");

    update(&mut model, Msg::toggle(a));

    assert_eq!(flow(&model), vec!["_", "section-1", "section-2", "section-0"]);
    assert!(model.registry.surface().is_none());
}

#[test]
fn test_lower_restores_slot() {
    for presentation in [Presentation::Surface, Presentation::EndOfFlow] {
        let mut model = test_model_with(&["a", "b", "c"], presentation);
        let b = key(&model, "section-1");

        update(&mut model, Msg::toggle(b));
        update(&mut model, Msg::toggle(b));

        assert_eq!(flow(&model), vec!["section-0", "section-1", "section-2"]);
        assert!(model.registry.placeholder().is_none());
        assert!(model.registry.surface().is_none());
        assert!(!model.pickup.overlay_active());

        let panel = model.registry.get(b).unwrap();
        assert_eq!(panel.lift, LiftState::Normal);
        assert!(panel.draggable);
    }
}

#[test]
fn test_overlay_click_lowers() {
    let mut model = test_model(&["a", "b"]);
    let a = key(&model, "section-0");
    update(&mut model, Msg::toggle(a));

    assert!(update(&mut model, Msg::Pickup(PickupMsg::OverlayClicked)).is_some());
    assert!(model.pickup.lifted().is_none());
    assert_eq!(model.order(), vec!["section-0", "section-1"]);
}

#[test]
fn test_overlay_click_without_lift_is_ignored() {
    let mut engine = test_engine(&["a", "b"], None);
    assert!(!engine.dispatch(Msg::Pickup(PickupMsg::OverlayClicked)));
    assert_eq!(engine.store().saves, 0);
}

// ========================================================================
// Exclusivity
// ========================================================================

#[test]
fn test_only_one_panel_lifted() {
    let mut model = test_model(&["a", "b", "c"]);
    let a = key(&model, "section-0");
    let c = key(&model, "section-2");

    update(&mut model, Msg::toggle(a));
    assert!(update(&mut model, Msg::toggle(c)).is_none());

    let lifted: Vec<_> = model.registry.all().filter(|p| p.is_lifted()).map(|p| p.key).collect();
    assert_eq!(lifted, vec![a]);
    assert_eq!(model.pickup.lifted(), Some(a));
}

#[test]
fn test_header_click_ignored_while_editing_title() {
    let mut model = test_model(&["a", "b"]);
    let a = key(&model, "section-0");
    update(&mut model, Msg::Title(TitleMsg::BeginEdit(a)));

    assert!(update(&mut model, Msg::Pickup(PickupMsg::HeaderClicked(a))).is_none());
    assert!(model.pickup.lifted().is_none());
}

#[test]
fn test_header_click_toggles() {
    let mut model = test_model(&["a", "b"]);
    let b = key(&model, "section-1");

    update(&mut model, Msg::Pickup(PickupMsg::HeaderClicked(b)));
    assert_eq!(model.pickup.lifted(), Some(b));
    update(&mut model, Msg::Pickup(PickupMsg::HeaderClicked(b)));
    assert!(model.pickup.lifted().is_none());
}

// ========================================================================
// Persistence while lifted
// ========================================================================

#[test]
fn test_lifted_panel_persists_at_placeholder_position() {
    let mut engine = test_engine(&["a", "b", "c"], None);
    let a = key(&engine.model, "section-0");

    engine.dispatch(Msg::toggle(a));

    assert_eq!(engine.store().saves, 1);
    assert_eq!(stored_order(&engine), vec!["section-0", "section-1", "section-2"]);
}

#[test]
fn test_serialize_apply_roundtrip_while_lifted() {
    let mut model = test_model_with(&["a", "b", "c"], Presentation::EndOfFlow);
    let b = key(&model, "section-1");
    update(&mut model, Msg::toggle(b));

    let before = flow(&model);
    let blob = serialize(&model.registry).to_json();
    apply(Some(&blob), &mut model.registry);

    assert_eq!(flow(&model), before);
}

#[test]
fn test_lift_lower_preserves_order_and_commits_each_toggle() {
    let mut engine = test_engine(&["a", "b", "c", "d"], None);
    let before = engine.model.order();
    let c = key(&engine.model, "section-2");

    engine.dispatch_all([Msg::toggle(c), Msg::toggle(c)]);

    assert_eq!(engine.model.order(), before);
    assert_eq!(engine.store().saves, 2);
    assert_eq!(stored_order(&engine), before);
}
