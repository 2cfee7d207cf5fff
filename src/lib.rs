//! Panel Grid - Elm-style arrangement and persistence engine
//!
//! This crate provides the core types and logic for a grid of reorderable,
//! user-titled panels: drag-to-reorder, an exclusive "lift" mode for one
//! panel at a time, and reconciliation of the layout against durable storage.

pub mod arrangement;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod page;
pub mod reconcile;
pub mod runtime;
pub mod store;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use arrangement::PersistedArrangement;
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::GridModel;
pub use runtime::Engine;
