//! Table of contents generation for rendered HTML pages.
//!
//! Headings are collected in document order, headings without an id get a
//! slug, and the flat sequence is rebuilt into nested lists wrapped in a
//! `div#toc`. The container replaces the first `[toc]` paragraph or `<toc>`
//! element in the page and is also handed back as a string for templates.

pub mod builder;
pub mod collector;
pub mod container;
pub mod dom;
pub mod marker;
pub mod slug;

use log::{debug, warn};

use crate::config::defaults::{CONTAINER_ID, TOGGLE_ID};
use crate::config::{TocConfig, TocOptions};
use crate::utils::error::TocResult;

pub use builder::{build_list, TocEntry, TocItem, TocList};
pub use collector::{collect_headers, HeaderSequence, HeadingNode};
pub use dom::HtmlDocument;
pub use marker::{find_markers, Marker, MarkerKind};
pub use slug::{apply_ids, assign_ids, slugify, IdAssignment};

/// Outcome of a render
#[derive(Debug, Clone, PartialEq)]
pub struct TocRender {
    /// Page content, with ids assigned and the marker replaced
    pub content: String,
    /// Serialized `div#toc`, when a table of contents was built
    pub toc: Option<String>,
    /// The nested list behind `toc`
    pub list: Option<TocList>,
    /// Options the render used, after marker overrides
    pub options: TocOptions,
}

impl TocRender {
    fn unchanged(content: &str, options: TocOptions) -> Self {
        TocRender {
            content: content.to_string(),
            toc: None,
            list: None,
            options,
        }
    }
}

/// Generates the table of contents for one page at a time.
///
/// Holds the layered configuration (site defaults overlaid with page front
/// matter). Options are resolved once per render and never mutated.
#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    config: TocConfig,
}

impl TableOfContents {
    /// Create a generator, validating the configuration up front
    pub fn new(config: TocConfig) -> TocResult<Self> {
        config.resolve()?;
        Ok(Self { config })
    }

    /// Same generator with a page's overrides layered on top
    pub fn for_page(&self, page: &TocConfig) -> TocResult<Self> {
        Self::new(self.config.layer(page))
    }

    pub fn config(&self) -> &TocConfig {
        &self.config
    }

    /// Transform page content.
    ///
    /// Only configuration errors are returned, and they are raised before the
    /// document is touched. Empty or unreadable content, an empty level range
    /// and too few headers all leave the content as it was, apart from
    /// removing any marker.
    pub fn render(&self, content: &str) -> TocResult<TocRender> {
        let options = self.config.resolve()?;

        if content.trim().is_empty() {
            debug!("Empty content, skipping table of contents");
            return Ok(TocRender::unchanged(content, options));
        }

        let document = match HtmlDocument::parse(content) {
            Ok(document) => document,
            Err(e) => {
                warn!("Could not parse page content, skipping table of contents: {}", e);
                return Ok(TocRender::unchanged(content, options));
            }
        };

        let markers = find_markers(&document);
        let options = match markers.first() {
            Some(marker) => self.config.layer(&marker.overrides()?).resolve()?,
            None => options,
        };

        let mut headers = collect_headers(&document, &options);
        if headers.is_empty() || headers.len() < options.min_headers {
            debug!(
                "{} headers found, {} required, no table of contents",
                headers.len(),
                options.min_headers
            );
            if markers.is_empty() {
                return Ok(TocRender::unchanged(content, options));
            }
            for marker in &markers {
                marker.remove();
            }
            return Ok(finish(content, &document, None, None, options));
        }

        let mut taken = collector::existing_ids(&document);
        taken.insert(CONTAINER_ID.to_string());
        taken.insert(TOGGLE_ID.to_string());
        let assignments = assign_ids(&headers, &taken);
        apply_ids(&mut headers, &assignments);

        let entries: Vec<TocEntry> = headers.iter().filter_map(to_entry).collect();
        let list = build_list(&entries);
        let container = container::build_container(&list, &options);
        let toc = match dom::outer_html(&container) {
            Ok(toc) => toc,
            Err(e) => {
                warn!("Could not serialize table of contents: {}", e);
                return Ok(TocRender::unchanged(content, options));
            }
        };

        let modified = !assignments.is_empty() || !markers.is_empty();
        let mut markers = markers.iter();
        if let Some(first) = markers.next() {
            first.replace_with(container);
        }
        for extra in markers {
            extra.remove();
        }

        // Nothing in the tree changed, so the original bytes are still right
        if !modified {
            return Ok(TocRender {
                toc: Some(toc),
                list: Some(list),
                ..TocRender::unchanged(content, options)
            });
        }

        Ok(finish(content, &document, Some(toc), Some(list), options))
    }
}

fn to_entry(header: &HeadingNode) -> Option<TocEntry> {
    let id = header.id.clone()?;
    Some(TocEntry::new(header.level, id, header.text.clone()))
}

fn finish(
    content: &str,
    document: &HtmlDocument,
    toc: Option<String>,
    list: Option<TocList>,
    options: TocOptions,
) -> TocRender {
    match document.to_html() {
        Ok(html) => TocRender {
            content: html,
            toc,
            list,
            options,
        },
        Err(e) => {
            warn!("Could not serialize page content, leaving it unchanged: {}", e);
            TocRender::unchanged(content, options)
        }
    }
}
