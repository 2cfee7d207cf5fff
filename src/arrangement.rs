//! Persisted arrangement record
//!
//! Stored as a single JSON blob:
//!
//! ```json
//! { "order": ["section-1", "section-0"], "titles": { "section-0": "Links" } }
//! ```
//!
//! The record is rebuilt from live state on every commit and never patched
//! in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::PanelId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedArrangement {
    /// Panel ids in arrangement order
    #[serde(default)]
    pub order: Vec<PanelId>,
    /// Title text per panel id
    #[serde(default)]
    pub titles: BTreeMap<PanelId, String>,
}

impl PersistedArrangement {
    /// Parse a stored blob; malformed input yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(arrangement) => Some(arrangement),
            Err(e) => {
                tracing::warn!("Ignoring malformed stored arrangement: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Map keys are strings and values are plain data; this cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty() && self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let raw = r#"{"order":["b","a"],"titles":{"a":"Alpha","b":"Beta"}}"#;
        let parsed = PersistedArrangement::parse(raw).unwrap();
        assert_eq!(parsed.order, vec![PanelId::from("b"), PanelId::from("a")]);
        assert_eq!(parsed.titles[&PanelId::from("a")], "Alpha");
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let parsed = PersistedArrangement::parse(r#"{"order":["b"]}"#).unwrap();
        assert!(parsed.titles.is_empty());

        let parsed = PersistedArrangement::parse("{}").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(PersistedArrangement::parse("not json").is_none());
        assert!(PersistedArrangement::parse(r#"{"order":"b"}"#).is_none());
        assert!(PersistedArrangement::parse(r#"{"titles":{"a":1}}"#).is_none());
    }

    #[test]
    fn test_json_shape() {
        let mut arrangement = PersistedArrangement::default();
        arrangement.order.push(PanelId::from("section-0"));
        arrangement
            .titles
            .insert(PanelId::from("section-0"), "Links".to_string());

        assert_eq!(
            arrangement.to_json(),
            r#"{"order":["section-0"],"titles":{"section-0":"Links"}}"#
        );
    }
}
