use std::path::{Path, PathBuf};

use crate::cli::commands::page::load_page;
use crate::config::{self, TocOptions};
use crate::utils::error::BoxResult;

/// Handle the config command
pub fn handle_config_command(
    page: Option<&PathBuf>,
    source: &Path,
    config_file: Option<PathBuf>,
) -> BoxResult<()> {
    let options = resolve_options(page, source, config_file)?;
    print!("{}", describe_options(&options));
    Ok(())
}

fn resolve_options(
    page: Option<&PathBuf>,
    source: &Path,
    config_file: Option<PathBuf>,
) -> BoxResult<TocOptions> {
    let mut layered = config::load_config(source, config_file)?;
    if let Some(page) = page {
        layered = layered.layer(&load_page(page)?.front_matter.toc_overrides());
    }
    Ok(config::validate_config(&layered)?)
}

/// One `key: value` line per option
pub fn describe_options(options: &TocOptions) -> String {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    [
        ("min_headers", options.min_headers.to_string()),
        ("min_level", options.min_level.to_string()),
        ("max_level", options.max_level.to_string()),
        ("tag", options.tag.to_string()),
        ("style", options.style.to_string()),
        ("heading", optional(&options.heading)),
        ("container", optional(&options.container)),
        ("toggle", options.toggle.to_string()),
        ("initially_hide", options.initially_hide.to_string()),
        ("hide_text", options.hide_text.clone()),
        ("show_text", options.show_text.clone()),
    ]
    .iter()
    .map(|(key, value)| format!("{}: {}\n", key, value))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_describe_defaults() {
        let text = describe_options(&TocOptions::default());
        assert!(text.starts_with("min_headers: 2\nmin_level: 1\nmax_level: 5\ntag: ordered\n"));
        assert!(text.contains("heading: -\n"));
        assert!(text.ends_with("hide_text: Hide\nshow_text: Show\n"));
    }

    #[test]
    fn test_page_layer() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.toml"), "[toc]\nmax_level = 3\nheading = \"Site\"\n").unwrap();
        let page = dir.path().join("page.html");
        fs::write(&page, "---\ntoc:\n  heading: Page\n---\n<h1>A</h1>").unwrap();

        let options = resolve_options(Some(&page), dir.path(), None).unwrap();
        assert_eq!(options.max_level, 3);
        assert_eq!(options.heading.as_deref(), Some("Page"));
    }
}
