use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::front_matter::{extract_front_matter, FrontMatter};
use crate::markdown::{create_comrak_options, is_markdown_extension, render_markdown};
use crate::utils::error::BoxResult;

/// Extensions of pages used as-is
const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// A page read from disk, front matter split off and body rendered to HTML
pub struct Page {
    pub front_matter: FrontMatter,
    pub html: String,
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Whether a file is a page the table of contents applies to
pub fn is_page(path: &Path) -> bool {
    match extension(path) {
        Some(ext) => {
            is_markdown_extension(ext)
                || HTML_EXTENSIONS.iter().any(|html| html.eq_ignore_ascii_case(ext))
        }
        None => false,
    }
}

/// Output path of a page, markdown pages become `.html`
pub fn output_path(relative: &Path) -> PathBuf {
    match extension(relative) {
        Some(ext) if is_markdown_extension(ext) => relative.with_extension("html"),
        _ => relative.to_path_buf(),
    }
}

/// Read a page and render its body to HTML
pub fn load_page(path: &Path) -> BoxResult<Page> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let (front_matter, body) = extract_front_matter(&content)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    let html = match extension(path) {
        Some(ext) if is_markdown_extension(ext) => {
            debug!("Rendering markdown page {}", path.display());
            render_markdown(&body, &create_comrak_options())
        }
        _ => body,
    };

    Ok(Page { front_matter, html })
}
