pub mod engine;

pub use engine::{create_comrak_options, render_markdown};

/// File extensions rendered as markdown
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Whether a file extension denotes a markdown page
pub fn is_markdown_extension(ext: &str) -> bool {
    MARKDOWN_EXTENSIONS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(ext))
}
