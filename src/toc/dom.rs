//! Small helpers over the html5ever reference-counted DOM.
//!
//! The table of contents code only needs a handful of tree operations:
//! parsing, serializing, reading attributes and text, creating elements,
//! and replacing or removing a node in its parent.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{parse_document, parse_fragment, Attribute, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::error::{TocError, TocResult};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

static DOCUMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(!doctype|html[\s>])").expect("valid document regex"));

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// A parsed page together with the way it has to be written back
pub struct HtmlDocument {
    dom: RcDom,
    /// Input was a full document rather than a body fragment
    full_document: bool,
}

impl HtmlDocument {
    /// Parse page content into a tree.
    ///
    /// A full document goes through the document parser. Anything else is
    /// parsed as children of `<body>`, so leading `<style>`, `<script>` or
    /// comments stay where they are instead of moving into `<head>`.
    pub fn parse(content: &str) -> TocResult<Self> {
        let full_document = DOCUMENT_REGEX.is_match(content);
        let dom = if full_document {
            parse_document(RcDom::default(), ParseOpts::default())
                .from_utf8()
                .read_from(&mut content.as_bytes())
        } else {
            parse_fragment(RcDom::default(), ParseOpts::default(), html_name("body"), Vec::new())
                .from_utf8()
                .read_from(&mut content.as_bytes())
        }
        .map_err(|e| TocError::MalformedInput(e.to_string()))?;

        Ok(HtmlDocument { dom, full_document })
    }

    /// Root node of the tree
    pub fn root(&self) -> Handle {
        self.dom.document.clone()
    }

    /// Node whose children are the page content: the document itself, or
    /// the `<html>` element the fragment parser puts the fragment under
    pub fn content_root(&self) -> Handle {
        if self.full_document {
            return self.dom.document.clone();
        }
        self.dom
            .document
            .children
            .borrow()
            .iter()
            .find(|child| is_element(child, "html"))
            .cloned()
            .unwrap_or_else(|| self.dom.document.clone())
    }

    /// Element carrying the given id
    pub fn element_by_id(&self, id: &str) -> Option<Handle> {
        find_first(&self.dom.document, &|node| {
            matches!(&node.data, NodeData::Element { .. }) && attribute(node, "id").as_deref() == Some(id)
        })
    }

    /// Serialize back into the shape the content came in: a full document
    /// when it had `<html>`/doctype, otherwise only the fragment.
    pub fn to_html(&self) -> TocResult<String> {
        serialize_node(&self.content_root(), TraversalScope::ChildrenOnly(None))
    }
}

/// Serialize a node, including itself
pub fn outer_html(node: &Handle) -> TocResult<String> {
    serialize_node(node, TraversalScope::IncludeNode)
}

fn serialize_node(node: &Handle, traversal_scope: TraversalScope) -> TocResult<String> {
    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    serialize(&mut bytes, &SerializableHandle::from(node.clone()), opts)?;
    String::from_utf8(bytes).map_err(|e| TocError::MalformedInput(e.to_string()))
}

/// Local tag name of an element node
pub fn tag_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

/// Whether the node is an element with the given local name
pub fn is_element(node: &Handle, tag: &str) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => name.local.as_ref().eq_ignore_ascii_case(tag),
        _ => false,
    }
}

/// Value of an attribute, if present
pub fn attribute(node: &Handle, attr: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Set an attribute, replacing an existing value
pub fn set_attribute(node: &Handle, attr: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|a| a.name.local.as_ref() == attr) {
            Some(existing) => existing.value = StrTendril::from(value),
            None => attrs.push(new_attribute(attr, value)),
        }
    }
}

/// Whitespace separated class tokens of an element
pub fn classes(node: &Handle) -> Vec<String> {
    attribute(node, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Concatenated text of all descendant text nodes
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, text: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        text.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, text);
    }
}

/// Text content with whitespace runs collapsed and ends trimmed
pub fn normalized_text(node: &Handle) -> String {
    WHITESPACE_REGEX
        .replace_all(text_content(node).trim(), " ")
        .into_owned()
}

/// Create a detached HTML element
pub fn create_element(tag: &str, attrs: &[(&str, &str)]) -> Handle {
    Node::new(NodeData::Element {
        name: html_name(tag),
        attrs: RefCell::new(
            attrs
                .iter()
                .map(|(name, value)| new_attribute(name, value))
                .collect(),
        ),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

/// Create a detached text node
pub fn create_text(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from(text)),
    })
}

/// Append a detached node to a parent
pub fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Put `replacement` where `node` is. Returns false if `node` has no parent.
pub fn replace_node(node: &Handle, replacement: Handle) -> bool {
    splice_node(node, vec![replacement])
}

/// Detach a node from its parent. Returns false if it had none.
pub fn remove_node(node: &Handle) -> bool {
    splice_node(node, Vec::new())
}

/// Detach a node's children, leaving it empty
pub fn take_children(node: &Handle) -> Vec<Handle> {
    let children: Vec<Handle> = node.children.borrow_mut().drain(..).collect();
    for child in &children {
        child.parent.set(None);
    }
    children
}

/// Replace `node` in its parent with `replacements`, in order.
///
/// The node keeps its parent link unless the splice happens.
pub fn splice_node(node: &Handle, replacements: Vec<Handle>) -> bool {
    let link = node.parent.take();
    let Some(parent) = link.as_ref().and_then(Weak::upgrade) else {
        node.parent.set(link);
        return false;
    };

    let mut children = parent.children.borrow_mut();
    let Some(index) = children.iter().position(|child| Rc::ptr_eq(child, node)) else {
        node.parent.set(link);
        return false;
    };
    for replacement in &replacements {
        replacement.parent.set(Some(Rc::downgrade(&parent)));
    }
    children.splice(index..=index, replacements);
    true
}

/// Pre-order walk over a subtree, visiting every node in document order
pub fn walk<F>(node: &Handle, visit: &mut F)
where
    F: FnMut(&Handle),
{
    visit(node);
    let children: Vec<Handle> = node.children.borrow().iter().cloned().collect();
    for child in &children {
        walk(child, visit);
    }
}

/// First node in document order matching a predicate
pub fn find_first(node: &Handle, predicate: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    if predicate(node) {
        return Some(node.clone());
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_first(child, predicate))
}

fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}

fn new_attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
        value: StrTendril::from(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_round_trip() {
        let html = "<h1 id=\"a\">Title</h1><p>Body</p>";
        let doc = HtmlDocument::parse(html).unwrap();
        assert_eq!(doc.to_html().unwrap(), html);
    }

    #[test]
    fn test_full_document_keeps_wrappers() {
        let html = "<!DOCTYPE html><html><head></head><body><h1>T</h1></body></html>";
        let doc = HtmlDocument::parse(html).unwrap();
        let out = doc.to_html().unwrap();
        assert!(out.contains("<html>"));
        assert!(out.contains("<body><h1>T</h1></body>"));
    }

    #[test]
    fn test_attributes_and_text() {
        let doc = HtmlDocument::parse("<h2 class=\"a  b\">Hello <em>big</em>\n world</h2>").unwrap();
        let h2 = find_first(&doc.root(), &|n| is_element(n, "h2")).unwrap();

        assert_eq!(classes(&h2), vec!["a", "b"]);
        assert_eq!(attribute(&h2, "id"), None);
        assert_eq!(normalized_text(&h2), "Hello big world");

        set_attribute(&h2, "id", "hello");
        assert_eq!(attribute(&h2, "id").as_deref(), Some("hello"));
        set_attribute(&h2, "id", "again");
        assert_eq!(attribute(&h2, "id").as_deref(), Some("again"));
    }

    #[test]
    fn test_replace_and_remove() {
        let doc = HtmlDocument::parse("<p>one</p><p>two</p>").unwrap();
        let body = doc.content_root();
        let first = body.children.borrow()[0].clone();
        let second = body.children.borrow()[1].clone();

        let div = create_element("div", &[("id", "x")]);
        append_child(&div, create_text("new"));
        assert!(replace_node(&first, div));
        assert!(remove_node(&second));

        assert_eq!(doc.to_html().unwrap(), "<div id=\"x\">new</div>");
    }

    #[test]
    fn test_fragment_keeps_head_content() {
        let html = "<!-- note --><style>h1 { color: red }</style><title>T</title><h1>A</h1>";
        let doc = HtmlDocument::parse(html).unwrap();
        assert_eq!(doc.to_html().unwrap(), html);
    }

    #[test]
    fn test_splice_keeps_parent_link_when_not_a_child() {
        let parent = create_element("div", &[]);
        let stray = create_element("p", &[]);
        stray.parent.set(Some(Rc::downgrade(&parent)));

        assert!(!splice_node(&stray, Vec::new()));
        let link = stray.parent.take();
        assert!(link.and_then(|weak| weak.upgrade()).is_some());
        assert!(parent.children.borrow().is_empty());
    }

    #[test]
    fn test_element_by_id() {
        let doc = HtmlDocument::parse("<div id=\"main\"><h1>In</h1></div>").unwrap();
        let main = doc.element_by_id("main").unwrap();
        assert_eq!(tag_name(&main).as_deref(), Some("div"));
        assert!(doc.element_by_id("missing").is_none());
    }
}
