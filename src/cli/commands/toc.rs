use std::path::{Path, PathBuf};

use log::info;

use crate::cli::commands::page::load_page;
use crate::config;
use crate::toc::{TableOfContents, TocList};
use crate::utils::error::BoxResult;

/// Handle the toc command
pub fn handle_toc_command(
    input: &Path,
    json: bool,
    source: &Path,
    config_file: Option<PathBuf>,
) -> BoxResult<()> {
    match page_toc(input, source, config_file)? {
        Some(list) if json => println!("{}", serde_json::to_string_pretty(&list)?),
        Some(list) => print!("{}", list.to_markdown()),
        None => info!("{} has no table of contents", input.display()),
    }
    Ok(())
}

fn page_toc(input: &Path, source: &Path, config_file: Option<PathBuf>) -> BoxResult<Option<TocList>> {
    let site = TableOfContents::new(config::load_config(source, config_file)?)?;
    let page = load_page(input)?;
    let render = site
        .for_page(&page.front_matter.toc_overrides())?
        .render(&page.html)?;
    Ok(render.list)
}
