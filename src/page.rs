//! Page description - the panels a surface starts with
//!
//! ```yaml
//! panels:
//!   - title: Announcements
//!     height: 120
//!   - id: links
//!     title: Quick links
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{Bounds, PanelId, PanelRegistry};

const DEFAULT_HEIGHT: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub panels: Vec<PanelSpec>,
}

impl Default for PageSpec {
    fn default() -> Self {
        let panel = |title: &str| PanelSpec {
            id: None,
            title: title.to_string(),
            height: None,
        };
        Self {
            panels: vec![
                panel("Announcements"),
                panel("Quick links"),
                panel("Schedule"),
                panel("Documents"),
            ],
        }
    }
}

impl PageSpec {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse page file {}", path.display()))
    }

    /// Build a registry in page order, with each panel's height recorded
    pub fn build_registry(&self) -> PanelRegistry {
        let mut registry = PanelRegistry::new();
        for spec in &self.panels {
            let key = registry.push(spec.id.as_deref().map(PanelId::from), spec.title.clone());
            if let Some(panel) = registry.get_mut(key) {
                panel.bounds = Some(Bounds::new(0.0, spec.height.unwrap_or(DEFAULT_HEIGHT)));
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        let page = PageSpec::from_yaml(
            "panels:\n  - title: News\n    height: 40\n  - id: links\n    title: Links\n",
        )
        .unwrap();
        assert_eq!(page.panels.len(), 2);
        assert_eq!(page.panels[0].height, Some(40.0));
        assert_eq!(page.panels[1].id.as_deref(), Some("links"));
    }

    #[test]
    fn test_build_registry_keeps_order_and_heights() {
        let page = PageSpec::from_yaml(
            "panels:\n  - title: News\n    height: 40\n  - id: links\n    title: Links\n",
        )
        .unwrap();
        let registry = page.build_registry();
        let panels: Vec<_> = registry.all().collect();

        assert_eq!(panels[0].title, "News");
        assert!(panels[0].id.is_none());
        assert_eq!(panels[0].height(), 40.0);
        assert_eq!(panels[1].id, Some(PanelId::from("links")));
        assert_eq!(panels[1].height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_default_page_has_panels() {
        assert_eq!(PageSpec::default().build_registry().len(), 4);
    }
}
