//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag, pickup, and persistence transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=arrangement=debug,message=debug` - scoped filtering
//! - `RUST_LOG=panel_grid::reconcile=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/panel-grid/logs/panel-grid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{GridItem, GridModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/panel-grid/logs/panel-grid.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stderr keeps stdout clean for CLI output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "panel-grid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the arrangement for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementSnapshot {
    /// Grid flow; placeholders render as `_`
    pub flow: Vec<String>,
    pub lifted: Option<String>,
    pub dragging: Option<String>,
}

impl ArrangementSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        let label = |key| {
            model
                .registry
                .get(key)
                .and_then(|p| p.id.as_ref())
                .map(|id| id.to_string())
                .unwrap_or_else(|| "?".to_string())
        };

        Self {
            flow: model
                .registry
                .items()
                .iter()
                .map(|item| match item {
                    GridItem::Panel(p) => label(p.key),
                    GridItem::Placeholder(_) => "_".to_string(),
                })
                .collect(),
            lifted: model.pickup.lifted().map(label),
            dragging: model.drag.dragged().map(label),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ArrangementSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.flow != other.flow {
            changes.push(format!(
                "flow: [{}] → [{}]",
                self.flow.join(","),
                other.flow.join(",")
            ));
        }
        if self.lifted != other.lifted {
            changes.push(format!(
                "lifted: {} → {}",
                self.lifted.as_deref().unwrap_or("-"),
                other.lifted.as_deref().unwrap_or("-")
            ));
        }
        if self.dragging != other.dragging {
            changes.push(format!(
                "dragging: {} → {}",
                self.dragging.as_deref().unwrap_or("-"),
                other.dragging.as_deref().unwrap_or("-")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
