use markup5ever_rcdom::Handle;

use crate::config::defaults::{CONTAINER_ID, TOGGLE_ID};
use crate::config::TocOptions;
use crate::toc::builder::{TocItem, TocList};
use crate::toc::dom;

/// State class of a list the toggle control has hidden
pub const HIDDEN_CLASS: &str = "toc-hide";

/// State class of a list the toggle control shows
pub const SHOWN_CLASS: &str = "toc-show";

/// Class of the block above the list
pub const HEADING_CLASS: &str = "toc-heading";

/// Wrap a built list in the `div#toc` container, with the optional heading
/// block and toggle control in front of it.
pub fn build_container(list: &TocList, options: &TocOptions) -> Handle {
    let container = dom::create_element("div", &[("id", CONTAINER_ID)]);

    if let Some(heading) = heading_block(options) {
        dom::append_child(&container, heading);
    }
    dom::append_child(&container, list_element(list, options, 0));

    container
}

fn heading_block(options: &TocOptions) -> Option<Handle> {
    if options.heading.is_none() && !options.toggle {
        return None;
    }

    let block = dom::create_element("div", &[("class", HEADING_CLASS)]);
    if let Some(heading) = &options.heading {
        dom::append_child(&block, dom::create_text(heading));
    }
    if options.toggle {
        if options.heading.is_some() {
            dom::append_child(&block, dom::create_text(" "));
        }
        dom::append_child(&block, toggle_control(options));
    }
    Some(block)
}

fn toggle_control(options: &TocOptions) -> Handle {
    let label = if options.initially_hide {
        &options.show_text
    } else {
        &options.hide_text
    };
    let button = dom::create_element(
        "button",
        &[
            ("type", "button"),
            ("id", TOGGLE_ID),
            ("data-show-text", options.show_text.as_str()),
            ("data-hide-text", options.hide_text.as_str()),
        ],
    );
    dom::append_child(&button, dom::create_text(label));
    button
}

fn list_classes(options: &TocOptions, depth: usize) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if let Some(class) = options.style.css_class() {
        classes.push(class);
    }
    // Only the outermost list carries the toggle state
    if depth == 0 && options.toggle {
        classes.push(if options.initially_hide {
            HIDDEN_CLASS
        } else {
            SHOWN_CLASS
        });
    }
    classes
}

fn list_element(list: &TocList, options: &TocOptions, depth: usize) -> Handle {
    let classes = list_classes(options, depth).join(" ");
    let element = if classes.is_empty() {
        dom::create_element(options.tag.element_name(), &[])
    } else {
        dom::create_element(options.tag.element_name(), &[("class", classes.as_str())])
    };

    for item in &list.items {
        dom::append_child(&element, item_element(item, options, depth));
    }
    element
}

fn item_element(item: &TocItem, options: &TocOptions, depth: usize) -> Handle {
    let class = format!("toc-h{}", item.entry.level);
    let li = dom::create_element("li", &[("class", class.as_str())]);

    let href = format!("#{}", item.entry.id);
    let link = dom::create_element("a", &[("href", href.as_str())]);
    dom::append_child(&link, dom::create_text(&item.entry.text));
    dom::append_child(&li, link);

    if let Some(children) = &item.children {
        dom::append_child(&li, list_element(children, options, depth + 1));
    }
    li
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ListStyle, ListTag};
    use crate::toc::builder::{build_list, TocEntry};

    fn sample_list() -> TocList {
        build_list(&[
            TocEntry::new(1, "intro", "Intro"),
            TocEntry::new(2, "setup", "Setup & Install"),
            TocEntry::new(1, "usage", "Usage"),
        ])
    }

    #[test]
    fn test_default_container() {
        let container = build_container(&sample_list(), &TocOptions::default());
        let html = dom::outer_html(&container).unwrap();

        assert_eq!(
            html,
            "<div id=\"toc\"><ol>\
             <li class=\"toc-h1\"><a href=\"#intro\">Intro</a>\
             <ol><li class=\"toc-h2\"><a href=\"#setup\">Setup &amp; Install</a></li></ol></li>\
             <li class=\"toc-h1\"><a href=\"#usage\">Usage</a></li>\
             </ol></div>"
        );
    }

    #[test]
    fn test_heading_and_style() {
        let options = TocOptions {
            heading: Some("Contents".to_string()),
            tag: ListTag::Unordered,
            style: ListStyle::Bullets,
            ..Default::default()
        };
        let html = dom::outer_html(&build_container(&sample_list(), &options)).unwrap();

        assert!(html.starts_with("<div id=\"toc\"><div class=\"toc-heading\">Contents</div><ul class=\"toc-bullets\">"));
        assert!(html.contains("<ul class=\"toc-bullets\"><li class=\"toc-h2\">"));
        assert!(!html.contains("toc-toggle"));
    }

    #[test]
    fn test_toggle_state_only_on_top_list() {
        let options = TocOptions {
            toggle: true,
            initially_hide: true,
            style: ListStyle::Numbers,
            hide_text: "hide".to_string(),
            show_text: "show".to_string(),
            ..Default::default()
        };
        let html = dom::outer_html(&build_container(&sample_list(), &options)).unwrap();

        assert!(html.contains(
            "<div class=\"toc-heading\"><button type=\"button\" id=\"toc-toggle\" data-show-text=\"show\" data-hide-text=\"hide\">show</button></div>"
        ));
        assert!(html.contains("<ol class=\"toc-numbers toc-hide\">"));
        assert!(html.contains("<ol class=\"toc-numbers\"><li class=\"toc-h2\">"));
        assert_eq!(html.matches("toc-hide").count(), 1);
    }

    #[test]
    fn test_toggle_initially_shown() {
        let options = TocOptions {
            toggle: true,
            heading: Some("Contents".to_string()),
            ..Default::default()
        };
        let html = dom::outer_html(&build_container(&sample_list(), &options)).unwrap();

        assert!(html.contains("<div class=\"toc-heading\">Contents <button"));
        assert!(html.contains(">Hide</button>"));
        assert!(html.contains("<ol class=\"toc-show\">"));
    }
}
