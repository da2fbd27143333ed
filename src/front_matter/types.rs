use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::TocConfig;

/// Page front matter, as far as table of contents generation cares
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Page layout, forwarded to templates
    #[serde(default)]
    pub layout: Option<String>,

    /// Per-page table of contents overrides
    #[serde(default)]
    pub toc: Option<TocConfig>,

    /// Everything else, forwarded to templates
    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// The page's override layer, empty when the page sets none
    pub fn toc_overrides(&self) -> TocConfig {
        self.toc.clone().unwrap_or_default()
    }
}
