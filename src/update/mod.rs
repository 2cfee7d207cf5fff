//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each handler is
//! a function of (model, message) that mutates the model and returns the
//! side effects to perform as a `Cmd`; nothing here touches storage.

mod drag;
mod layout;
mod pickup;
mod title;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GridModel;

#[cfg(debug_assertions)]
use crate::tracing::ArrangementSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use drag::update_drag;
pub use layout::update_layout;
pub use pickup::update_pickup;
pub use title::update_title;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Pickup(m) => pickup::update_pickup(model, m),
        Msg::Title(m) => title::update_title(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{DragMsg, LayoutMsg};

    // Pointer moves and measurements arrive at frame rate
    let is_noisy = matches!(
        &msg,
        Msg::Drag(DragMsg::Move { .. }) | Msg::Layout(LayoutMsg::Measured { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ArrangementSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = ArrangementSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "arrangement", %diff, "state changed");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Drag::Start(PanelKey(2))`
/// - `Pickup::OverlayClicked`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Pickup(m) => format!("Pickup::{:?}", m),
        Msg::Title(m) => format!("Title::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
    }
}
