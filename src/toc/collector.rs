use std::collections::HashSet;

use log::{debug, warn};
use markup5ever_rcdom::Handle;

use crate::config::defaults::EXCLUDE_CLASS;
use crate::config::TocOptions;
use crate::toc::dom::{self, HtmlDocument};

/// A heading element found in the document
#[derive(Debug, Clone)]
pub struct HeadingNode {
    /// The element in the document tree
    pub handle: Handle,
    /// Level 1-6 from the tag name
    pub level: u8,
    /// Id attribute, if the element already has one
    pub id: Option<String>,
    /// Rendered text content, whitespace collapsed
    pub text: String,
    /// Class tokens of the element
    pub css_classes: Vec<String>,
}

impl HeadingNode {
    /// Read a heading element. Returns `None` for anything that isn't h1-h6.
    pub fn from_handle(handle: &Handle) -> Option<Self> {
        let level = heading_level(&dom::tag_name(handle)?)?;
        Some(HeadingNode {
            handle: handle.clone(),
            level,
            id: dom::attribute(handle, "id").filter(|id| !id.is_empty()),
            text: dom::normalized_text(handle),
            css_classes: dom::classes(handle),
        })
    }

    /// Whether the heading carries the exclusion class
    pub fn is_excluded(&self) -> bool {
        self.css_classes.iter().any(|class| class == EXCLUDE_CLASS)
    }
}

/// Heading level of a tag name, `h1` through `h6`
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag.to_ascii_lowercase().as_str() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Headers eligible for the table of contents, in document order
pub type HeaderSequence = Vec<HeadingNode>;

/// Collect the headings inside the level range, skipping excluded ones and
/// anything outside the scope container.
pub fn collect_headers(document: &HtmlDocument, options: &TocOptions) -> HeaderSequence {
    if !options.has_level_range() {
        debug!(
            "Empty level range {}..={}, no headers collected",
            options.min_level, options.max_level
        );
        return Vec::new();
    }

    let scope = match &options.container {
        Some(id) => match document.element_by_id(id) {
            Some(container) => container,
            None => {
                warn!("TOC container #{} not found in page, no headers collected", id);
                return Vec::new();
            }
        },
        None => document.root(),
    };

    let mut headers = Vec::new();
    dom::walk(&scope, &mut |node| {
        let Some(heading) = HeadingNode::from_handle(node) else {
            return;
        };
        if !options.includes_level(heading.level) {
            return;
        }
        if heading.is_excluded() {
            debug!("Skipping excluded heading \"{}\"", heading.text);
            return;
        }
        headers.push(heading);
    });

    debug!("Collected {} headers", headers.len());
    headers
}

/// Every id already used anywhere in the document
pub fn existing_ids(document: &HtmlDocument) -> HashSet<String> {
    let mut ids = HashSet::new();
    dom::walk(&document.root(), &mut |node| {
        if let Some(id) = dom::attribute(node, "id") {
            if !id.is_empty() {
                ids.insert(id);
            }
        }
    });
    ids
}
