//! Rebuilds a flat, level-tagged header sequence into nested lists.
//!
//! A header deeper than its predecessor opens a sublist under the
//! predecessor's item; the sublist ends at the first header that is not
//! deeper than the item that owns it. Level jumps of more than one step
//! nest a single level, so `h2, h4, h3` puts both `h4` and `h3` under `h2`.

use serde::Serialize;

/// A header ready to be listed: it has its final id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub id: String,
    pub text: String,
}

impl TocEntry {
    pub fn new(level: u8, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One list item: a link to a header and the headers nested below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub entry: TocEntry,
    pub children: Option<TocList>,
}

/// A list of items at one nesting depth
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TocList {
    pub items: Vec<TocItem>,
}

impl TocList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in this list and every nested list
    pub fn total_items(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.children.as_ref().map_or(0, TocList::total_items))
            .sum()
    }

    /// Deepest nesting, 1 for a flat list, 0 when empty
    pub fn depth(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.children.as_ref().map_or(0, TocList::depth))
            .max()
            .unwrap_or(0)
    }

    /// Render as a nested markdown list of links
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        self.append_markdown(&mut md, 0);
        md
    }

    fn append_markdown(&self, md: &mut String, indent_level: usize) {
        let indent = "  ".repeat(indent_level);
        for item in &self.items {
            md.push_str(&format!("{}* [{}](#{})\n", indent, item.entry.text, item.entry.id));
            if let Some(children) = &item.children {
                children.append_markdown(md, indent_level + 1);
            }
        }
    }
}

/// Build the nested list for a whole header sequence
pub fn build_list(entries: &[TocEntry]) -> TocList {
    let (list, cursor) = build_level(entries, 0, 0);
    debug_assert_eq!(cursor, entries.len());
    list
}

/// Build the list of every header from `cursor` on that is deeper than
/// `parent_level`. Returns the list and the position of the first header
/// left unconsumed.
pub fn build_level(entries: &[TocEntry], mut cursor: usize, parent_level: u8) -> (TocList, usize) {
    let mut list = TocList::default();

    while let Some(entry) = entries.get(cursor) {
        if entry.level <= parent_level {
            break;
        }
        cursor += 1;

        let mut item = TocItem {
            entry: entry.clone(),
            children: None,
        };

        if entries.get(cursor).is_some_and(|next| next.level > entry.level) {
            let (sublist, next_cursor) = build_level(entries, cursor, entry.level);
            cursor = next_cursor;
            if !sublist.is_empty() {
                item.children = Some(sublist);
            }
        }

        list.items.push(item);
    }

    (list, cursor)
}
