//! Hook system for plugins

use std::collections::HashMap;

use crate::config::TocConfig;
use crate::front_matter::FrontMatter;

/// Points in a page's lifecycle a plugin can listen to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Site configuration has been loaded
    ConfigLoaded,
    /// Page content has been rendered to HTML
    ContentParsed,
    /// Page template is about to be rendered
    PageRendering,
    /// Custom hook
    Custom(String),
}

impl Hook {
    /// Get the name of the hook
    pub fn name(&self) -> &str {
        match self {
            Hook::ConfigLoaded => "config_loaded",
            Hook::ContentParsed => "content_parsed",
            Hook::PageRendering => "page_rendering",
            Hook::Custom(name) => name,
        }
    }

    /// Create a hook from its name
    pub fn from_name(name: &str) -> Self {
        match name {
            "config_loaded" => Hook::ConfigLoaded,
            "content_parsed" => Hook::ContentParsed,
            "page_rendering" => Hook::PageRendering,
            _ => Hook::Custom(name.to_string()),
        }
    }
}

/// Context passed to hook handlers
#[derive(Debug, Default)]
pub struct HookContext {
    /// Site-wide table of contents settings
    pub site_config: TocConfig,
    /// Front matter of the current page
    pub front_matter: FrontMatter,
    /// HTML content of the current page
    pub content: String,
    /// Pre-rendered markup exposed to the page template
    pub variables: HashMap<String, String>,
    /// Current page being processed (if applicable)
    pub current_page: Option<String>,
}

impl HookContext {
    /// Context for the configuration hook
    pub fn for_config(site_config: TocConfig) -> Self {
        Self {
            site_config,
            ..Default::default()
        }
    }

    /// Context for one page
    pub fn for_page(page: impl Into<String>, front_matter: FrontMatter, content: String) -> Self {
        Self {
            front_matter,
            content,
            current_page: Some(page.into()),
            ..Default::default()
        }
    }

    /// Set a template variable
    pub fn set_variable(&mut self, key: &str, value: String) {
        self.variables.insert(key.to_string(), value);
    }

    /// Get a template variable
    pub fn variable(&self, key: &str) -> Option<&String> {
        self.variables.get(key)
    }
}

/// Result of a hook execution
#[derive(Debug, PartialEq)]
pub enum HookResult {
    /// Continue with the next hook
    Continue,
    /// Stop propagation to other hooks
    StopPropagation,
    /// Error occurred
    Error(String),
}

impl From<String> for HookResult {
    fn from(error: String) -> Self {
        HookResult::Error(error)
    }
}
