/// Minimum number of headers required before anything renders
pub fn default_min_headers() -> usize {
    2
}

/// Shallowest heading level included
pub fn default_min_level() -> u8 {
    1
}

/// Deepest heading level included
pub fn default_max_level() -> u8 {
    5
}

/// Label of the toggle control while the list is shown
pub fn default_hide_text() -> String {
    "Hide".to_string()
}

/// Label of the toggle control while the list is hidden
pub fn default_show_text() -> String {
    "Show".to_string()
}

/// Class marking a heading that must stay out of the table of contents
pub const EXCLUDE_CLASS: &str = "not-in-toc";

/// Id of the generated container element
pub const CONTAINER_ID: &str = "toc";

/// Id of the toggle control
pub const TOGGLE_ID: &str = "toc-toggle";

/// Literal text of a paragraph marker
pub const MARKER_TEXT: &str = "[toc]";

/// Tag name of an element marker
pub const MARKER_TAG: &str = "toc";
