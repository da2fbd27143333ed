use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::config::validation;
use crate::utils::error::{TocError, TocResult};

/// One layer of table of contents settings.
///
/// Every field is optional so that the site configuration, the page front
/// matter and a `<toc>` marker can each override only the keys they name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Minimum number of headers required to render anything
    #[serde(default)]
    pub min_headers: Option<usize>,

    /// Shallowest heading level included
    #[serde(default)]
    pub min_level: Option<u8>,

    /// Deepest heading level included
    #[serde(default)]
    pub max_level: Option<u8>,

    /// List element: ordered or unordered
    #[serde(default)]
    pub tag: Option<String>,

    /// List marker style
    #[serde(default)]
    pub style: Option<String>,

    /// Heading text above the list
    #[serde(default)]
    pub heading: Option<String>,

    /// Id of the element that restricts which headers are collected
    #[serde(default)]
    pub container: Option<String>,

    /// Whether a toggle control is rendered
    #[serde(default)]
    pub toggle: Option<bool>,

    /// Whether the list starts hidden when a toggle is present
    #[serde(default)]
    pub initially_hide: Option<bool>,

    /// Toggle label while the list is shown
    #[serde(default)]
    pub hide_text: Option<String>,

    /// Toggle label while the list is hidden
    #[serde(default)]
    pub show_text: Option<String>,
}

impl TocConfig {
    /// Overlay `other` on top of `self`, key by key. Keys set in `other` win.
    pub fn layer(&self, other: &TocConfig) -> TocConfig {
        TocConfig {
            min_headers: other.min_headers.or(self.min_headers),
            min_level: other.min_level.or(self.min_level),
            max_level: other.max_level.or(self.max_level),
            tag: other.tag.clone().or_else(|| self.tag.clone()),
            style: other.style.clone().or_else(|| self.style.clone()),
            heading: other.heading.clone().or_else(|| self.heading.clone()),
            container: other.container.clone().or_else(|| self.container.clone()),
            toggle: other.toggle.or(self.toggle),
            initially_hide: other.initially_hide.or(self.initially_hide),
            hide_text: other.hide_text.clone().or_else(|| self.hide_text.clone()),
            show_text: other.show_text.clone().or_else(|| self.show_text.clone()),
        }
    }

    /// Resolve this layer into immutable options, filling defaults and
    /// rejecting invalid `tag` and `style` values.
    pub fn resolve(&self) -> TocResult<TocOptions> {
        let tag = match &self.tag {
            Some(value) => value.parse()?,
            None => ListTag::default(),
        };
        let style = match &self.style {
            Some(value) => value.parse()?,
            None => ListStyle::default(),
        };

        Ok(TocOptions {
            min_headers: self.min_headers.unwrap_or_else(defaults::default_min_headers),
            min_level: validation::clamp_level(
                "min_level",
                self.min_level.unwrap_or_else(defaults::default_min_level),
            ),
            max_level: validation::clamp_level(
                "max_level",
                self.max_level.unwrap_or_else(defaults::default_max_level),
            ),
            tag,
            style,
            heading: non_empty(&self.heading),
            container: non_empty(&self.container),
            toggle: self.toggle.unwrap_or(false),
            initially_hide: self.initially_hide.unwrap_or(false),
            hide_text: self.hide_text.clone().unwrap_or_else(defaults::default_hide_text),
            show_text: self.show_text.clone().unwrap_or_else(defaults::default_show_text),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Resolved options for a single render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    pub min_headers: usize,
    pub min_level: u8,
    pub max_level: u8,
    pub tag: ListTag,
    pub style: ListStyle,
    pub heading: Option<String>,
    pub container: Option<String>,
    pub toggle: bool,
    pub initially_hide: bool,
    pub hide_text: String,
    pub show_text: String,
}

impl TocOptions {
    /// Whether the level range can contain any heading at all
    pub fn has_level_range(&self) -> bool {
        self.min_level <= self.max_level
    }

    /// Whether a heading level falls inside the configured range
    pub fn includes_level(&self, level: u8) -> bool {
        level >= self.min_level && level <= self.max_level
    }
}

impl Default for TocOptions {
    fn default() -> Self {
        TocOptions {
            min_headers: defaults::default_min_headers(),
            min_level: defaults::default_min_level(),
            max_level: defaults::default_max_level(),
            tag: ListTag::default(),
            style: ListStyle::default(),
            heading: None,
            container: None,
            toggle: false,
            initially_hide: false,
            hide_text: defaults::default_hide_text(),
            show_text: defaults::default_show_text(),
        }
    }
}

/// List element used for the table of contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListTag {
    #[default]
    Ordered,
    Unordered,
}

impl ListTag {
    pub const ALLOWED: [&'static str; 4] = ["ordered", "unordered", "ol", "ul"];

    /// HTML element name of the list
    pub fn element_name(&self) -> &'static str {
        match self {
            ListTag::Ordered => "ol",
            ListTag::Unordered => "ul",
        }
    }
}

impl FromStr for ListTag {
    type Err = TocError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "ordered" | "ol" => Ok(ListTag::Ordered),
            "unordered" | "ul" => Ok(ListTag::Unordered),
            _ => Err(TocError::invalid_option("tag", value, &ListTag::ALLOWED)),
        }
    }
}

impl fmt::Display for ListTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListTag::Ordered => write!(f, "ordered"),
            ListTag::Unordered => write!(f, "unordered"),
        }
    }
}

/// Marker style of the list items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStyle {
    Numbers,
    Bullets,
    None,
    #[default]
    Default,
}

impl ListStyle {
    pub const ALLOWED: [&'static str; 4] = ["numbers", "bullets", "none", "default"];

    /// CSS class carried by every list, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            ListStyle::Numbers => Some("toc-numbers"),
            ListStyle::Bullets => Some("toc-bullets"),
            ListStyle::None => Some("toc-none"),
            ListStyle::Default => None,
        }
    }
}

impl FromStr for ListStyle {
    type Err = TocError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "numbers" => Ok(ListStyle::Numbers),
            "bullets" => Ok(ListStyle::Bullets),
            "none" => Ok(ListStyle::None),
            "default" => Ok(ListStyle::Default),
            _ => Err(TocError::invalid_option("style", value, &ListStyle::ALLOWED)),
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListStyle::Numbers => "numbers",
            ListStyle::Bullets => "bullets",
            ListStyle::None => "none",
            ListStyle::Default => "default",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let options = TocConfig::default().resolve().unwrap();
        assert_eq!(options, TocOptions::default());
        assert_eq!(options.min_headers, 2);
        assert_eq!(options.min_level, 1);
        assert_eq!(options.max_level, 5);
        assert_eq!(options.tag, ListTag::Ordered);
        assert_eq!(options.heading, None);
    }

    #[test]
    fn test_invalid_tag_is_rejected() {
        let config = TocConfig {
            tag: Some("table".to_string()),
            ..Default::default()
        };

        match config.resolve() {
            Err(TocError::InvalidOption { key, value, allowed }) => {
                assert_eq!(key, "tag");
                assert_eq!(value, "table");
                assert!(allowed.contains("ordered"));
                assert!(allowed.contains("unordered"));
            }
            other => panic!("expected invalid option, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let config = TocConfig {
            style: Some("roman".to_string()),
            ..Default::default()
        };
        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("roman"));
        assert!(err.to_string().contains("numbers, bullets, none, default"));
    }

    #[test]
    fn test_tag_aliases() {
        assert_eq!("ol".parse::<ListTag>().unwrap(), ListTag::Ordered);
        assert_eq!("Unordered".parse::<ListTag>().unwrap(), ListTag::Unordered);
        assert_eq!(ListTag::Unordered.element_name(), "ul");
    }

    #[test]
    fn test_layer_overrides_key_by_key() {
        let global = TocConfig {
            min_headers: Some(3),
            heading: Some("Contents".to_string()),
            tag: Some("ul".to_string()),
            ..Default::default()
        };
        let page = TocConfig {
            heading: Some("On this page".to_string()),
            max_level: Some(3),
            ..Default::default()
        };

        let merged = global.layer(&page);
        assert_eq!(merged.min_headers, Some(3));
        assert_eq!(merged.heading.as_deref(), Some("On this page"));
        assert_eq!(merged.max_level, Some(3));
        assert_eq!(merged.tag.as_deref(), Some("ul"));
    }

    #[test]
    fn test_empty_heading_disables_heading() {
        let config = TocConfig {
            heading: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve().unwrap().heading, None);
    }

    #[test]
    fn test_levels_are_clamped() {
        let config = TocConfig {
            min_level: Some(0),
            max_level: Some(9),
            ..Default::default()
        };
        let options = config.resolve().unwrap();
        assert_eq!(options.min_level, 1);
        assert_eq!(options.max_level, 6);
    }

    #[test]
    fn test_inverted_range() {
        let config = TocConfig {
            min_level: Some(4),
            max_level: Some(2),
            ..Default::default()
        };
        let options = config.resolve().unwrap();
        assert!(!options.has_level_range());
        assert!(!options.includes_level(3));
    }
}
