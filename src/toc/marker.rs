use log::{debug, warn};
use markup5ever_rcdom::Handle;

use crate::config::defaults::{MARKER_TAG, MARKER_TEXT};
use crate::config::TocConfig;
use crate::toc::dom::{self, HtmlDocument};
use crate::utils::error::{TocError, TocResult};

/// Kind of placeholder found in the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `<p>[toc]</p>`
    Paragraph,
    /// `<toc heading="..." max-level="..."></toc>`
    Element,
}

/// A placeholder marking where the table of contents goes
#[derive(Debug, Clone)]
pub struct Marker {
    pub handle: Handle,
    pub kind: MarkerKind,
}

impl Marker {
    /// Settings carried by the marker's own attributes
    pub fn overrides(&self) -> TocResult<TocConfig> {
        match self.kind {
            MarkerKind::Paragraph => Ok(TocConfig::default()),
            MarkerKind::Element => element_overrides(&self.handle),
        }
    }

    /// Put the container where the marker is
    pub fn replace_with(&self, container: Handle) -> bool {
        let mut replacements = vec![container];
        replacements.extend(self.orphaned_children());
        dom::splice_node(&self.handle, replacements)
    }

    /// Drop the marker from the page
    pub fn remove(&self) -> bool {
        dom::splice_node(&self.handle, self.orphaned_children())
    }

    // An unclosed `<toc>` swallows the content after it; that content must
    // stay in the page.
    fn orphaned_children(&self) -> Vec<Handle> {
        match self.kind {
            MarkerKind::Paragraph => Vec::new(),
            MarkerKind::Element => dom::take_children(&self.handle),
        }
    }
}

/// Every marker in the page, in document order
pub fn find_markers(document: &HtmlDocument) -> Vec<Marker> {
    let mut markers = Vec::new();
    dom::walk(&document.root(), &mut |node| {
        if dom::is_element(node, MARKER_TAG) {
            markers.push(Marker {
                handle: node.clone(),
                kind: MarkerKind::Element,
            });
        } else if dom::is_element(node, "p") && dom::text_content(node).trim() == MARKER_TEXT {
            markers.push(Marker {
                handle: node.clone(),
                kind: MarkerKind::Paragraph,
            });
        }
    });

    if markers.len() > 1 {
        warn!(
            "Found {} table of contents markers, only the first one is used",
            markers.len()
        );
    }
    debug!("Found {} markers", markers.len());
    markers
}

fn element_overrides(handle: &Handle) -> TocResult<TocConfig> {
    Ok(TocConfig {
        min_headers: parse_number(handle, "min-headers")?,
        min_level: parse_level(handle, "min-level")?,
        max_level: parse_level(handle, "max-level")?,
        tag: marker_attribute(handle, "tag"),
        style: marker_attribute(handle, "style"),
        heading: marker_attribute(handle, "heading"),
        ..Default::default()
    })
}

fn marker_attribute(handle: &Handle, attr: &str) -> Option<String> {
    dom::attribute(handle, attr)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_number(handle: &Handle, attr: &str) -> TocResult<Option<usize>> {
    match marker_attribute(handle, attr) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| TocError::invalid_option(&attr.replace('-', "_"), &value, &["a non-negative integer"])),
        None => Ok(None),
    }
}

fn parse_level(handle: &Handle, attr: &str) -> TocResult<Option<u8>> {
    match marker_attribute(handle, attr) {
        Some(value) => match value.parse::<u8>() {
            Ok(level) if (1..=6).contains(&level) => Ok(Some(level)),
            _ => Err(TocError::invalid_option(
                &attr.replace('-', "_"),
                &value,
                &["1", "2", "3", "4", "5", "6"],
            )),
        },
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_paragraph_marker() {
        let doc = HtmlDocument::parse("<p>intro</p><p> [toc] </p><p>[toc] and more</p>").unwrap();
        let markers = find_markers(&doc);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].kind, MarkerKind::Paragraph);
        assert_eq!(markers[0].overrides().unwrap(), TocConfig::default());
    }

    #[test]
    fn test_element_marker_overrides() {
        let doc = HtmlDocument::parse(
            "<toc max-level=\"3\" heading=\"Contents\" tag=\"ul\"></toc><h1>A</h1>",
        )
        .unwrap();
        let markers = find_markers(&doc);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].kind, MarkerKind::Element);
        let overrides = markers[0].overrides().unwrap();
        assert_eq!(overrides.max_level, Some(3));
        assert_eq!(overrides.heading.as_deref(), Some("Contents"));
        assert_eq!(overrides.tag.as_deref(), Some("ul"));
        assert_eq!(overrides.min_level, None);
    }

    #[test]
    fn test_empty_attributes_are_unset() {
        let doc = HtmlDocument::parse("<toc heading=\"\" max-level=\" \"></toc>").unwrap();
        let overrides = find_markers(&doc)[0].overrides().unwrap();
        assert_eq!(overrides, TocConfig::default());
    }

    #[test]
    fn test_element_marker_bad_level() {
        let doc = HtmlDocument::parse("<toc max-level=\"nine\"></toc>").unwrap();
        let markers = find_markers(&doc);
        let err = markers[0].overrides().unwrap_err();
        assert!(err.to_string().contains("\"nine\""));
        assert!(err.to_string().contains("max_level"));
    }

    #[test]
    fn test_unclosed_element_marker_keeps_content() {
        let doc = HtmlDocument::parse("<toc><p>after</p>").unwrap();
        let markers = find_markers(&doc);

        assert!(markers[0].remove());
        assert_eq!(doc.to_html().unwrap(), "<p>after</p>");
    }

    #[test]
    fn test_replace_marker() {
        let doc = HtmlDocument::parse("<p>[toc]</p><h1>A</h1>").unwrap();
        let markers = find_markers(&doc);

        assert!(markers[0].replace_with(dom::create_element("div", &[("id", "toc")])));
        assert_eq!(doc.to_html().unwrap(), "<div id=\"toc\"></div><h1>A</h1>");
    }
}
