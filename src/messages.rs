//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The rendering surface
//! translates its input events (pointer, click, focus loss) into these.

use crate::model::{Bounds, PanelKey};

/// Drag gesture messages
#[derive(Debug, Clone, PartialEq)]
pub enum DragMsg {
    /// Pointer pressed and moved on a panel's header
    Start(PanelKey),
    /// Pointer moved over the grid container
    Move { pointer_y: f32 },
    /// Pointer released over the grid
    Drop,
    /// Gesture ended (after or without a drop)
    End,
    /// Gesture interrupted externally with no terminating event
    Abandon,
}

/// Pickup (lift) messages
#[derive(Debug, Clone, PartialEq)]
pub enum PickupMsg {
    /// Click on a panel's header region
    HeaderClicked(PanelKey),
    /// Toggle a panel directly
    Toggle(PanelKey),
    /// Click on the dimming overlay
    OverlayClicked,
}

/// Title editing messages
#[derive(Debug, Clone, PartialEq)]
pub enum TitleMsg {
    /// Title region gained text focus
    BeginEdit(PanelKey),
    /// Title text changed while editing
    Input { key: PanelKey, text: String },
    /// Title region lost focus
    EndEdit(PanelKey),
}

/// Geometry reported by the rendering surface
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    Measured { key: PanelKey, bounds: Bounds },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Drag(DragMsg),
    Pickup(PickupMsg),
    Title(TitleMsg),
    Layout(LayoutMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn drag_start(key: PanelKey) -> Self {
        Msg::Drag(DragMsg::Start(key))
    }

    pub fn drag_move(pointer_y: f32) -> Self {
        Msg::Drag(DragMsg::Move { pointer_y })
    }

    pub fn toggle(key: PanelKey) -> Self {
        Msg::Pickup(PickupMsg::Toggle(key))
    }

    pub fn measured(key: PanelKey, top: f32, height: f32) -> Self {
        Msg::Layout(LayoutMsg::Measured {
            key,
            bounds: Bounds::new(top, height),
        })
    }
}
