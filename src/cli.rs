//! Command-line argument parsing for the headless grid driver
//!
//! Supports:
//! - Showing the reconciled arrangement
//! - Simulated drag, rename, and lift gestures
//! - Resetting stored state to the page defaults

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reorderable panel grid with a persisted layout
#[derive(Parser, Debug)]
#[command(name = "panel-grid", version, about = "Reorderable panel grid with a persisted layout")]
pub struct CliArgs {
    /// Page description (YAML); a built-in sample page is used if omitted
    #[arg(long, value_name = "FILE")]
    pub page: Option<PathBuf>,

    /// Config file (defaults to ~/.config/panel-grid/config.yaml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding stored arrangements
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Storage key (overrides the configured key)
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: GridCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GridCommand {
    /// Print the arrangement after restoring stored state
    Show,
    /// Drag a panel and drop it with the pointer at Y
    Move {
        /// Panel id
        id: String,
        /// Pointer position in surface pixels
        #[arg(long, value_name = "Y", allow_negative_numbers = true)]
        to_y: f32,
    },
    /// Edit a panel's title
    Rename {
        /// Panel id
        id: String,
        title: String,
    },
    /// Lift a panel, print the arrangement, then put it back
    Lift {
        /// Panel id
        id: String,
    },
    /// Overwrite stored state with the page's default arrangement
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_without_options() {
        let args = CliArgs::try_parse_from(["panel-grid", "show"]).unwrap();
        assert_eq!(args.command, GridCommand::Show);
        assert!(args.page.is_none());
        assert!(args.key.is_none());
    }

    #[test]
    fn test_move_parses_pointer() {
        let args =
            CliArgs::try_parse_from(["panel-grid", "move", "section-2", "--to-y", "-5"]).unwrap();
        assert_eq!(
            args.command,
            GridCommand::Move {
                id: "section-2".to_string(),
                to_y: -5.0
            }
        );
    }

    #[test]
    fn test_global_options() {
        let args = CliArgs::try_parse_from([
            "panel-grid",
            "--page",
            "page.yaml",
            "--state-dir",
            "/tmp/state",
            "--key",
            "alt",
            "rename",
            "links",
            "Bookmarks",
        ])
        .unwrap();
        assert_eq!(args.page, Some(PathBuf::from("page.yaml")));
        assert_eq!(args.state_dir, Some(PathBuf::from("/tmp/state")));
        assert_eq!(args.key.as_deref(), Some("alt"));
        assert_eq!(
            args.command,
            GridCommand::Rename {
                id: "links".to_string(),
                title: "Bookmarks".to_string()
            }
        );
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(CliArgs::try_parse_from(["panel-grid"]).is_err());
    }
}
