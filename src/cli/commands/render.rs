use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::cli::commands::page::{is_page, load_page, output_path};
use crate::config;
use crate::liquid::{page_globals, render_template, TOC_VARIABLE};
use crate::plugins::{Hook, HookContext, HookResult, PluginManager};
use crate::utils::error::BoxResult;

/// Default output directory of directory mode
const DEFAULT_OUTPUT_DIR: &str = "./_site";

/// Handle the render command
pub fn handle_render_command(
    input: &Path,
    output: Option<&PathBuf>,
    template: Option<&PathBuf>,
    source: &Path,
    config_file: Option<PathBuf>,
) -> BoxResult<()> {
    let site_config = config::load_config(source, config_file)?;

    let mut manager = PluginManager::with_builtin();
    let mut context = HookContext::for_config(site_config);
    run_hook(&mut manager, &Hook::ConfigLoaded, &mut context)?;

    let template = match template {
        Some(path) => Some(
            fs::read_to_string(path)
                .map_err(|e| format!("Failed to read template {}: {}", path.display(), e))?,
        ),
        None => None,
    };

    if input.is_dir() {
        let output = output
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        return render_directory(input, &output, &mut manager, template.as_deref());
    }

    let html = render_page(input, &mut manager, template.as_deref())?;
    match output {
        Some(path) => {
            write_output(path, &html)?;
            info!("Rendered {} to {}", input.display(), path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

fn run_hook(manager: &mut PluginManager, hook: &Hook, context: &mut HookContext) -> BoxResult<()> {
    match manager.execute_hook(hook, context) {
        HookResult::Error(e) => match &context.current_page {
            Some(page) => Err(format!("{}: {}", page, e).into()),
            None => Err(e.into()),
        },
        HookResult::Continue | HookResult::StopPropagation => Ok(()),
    }
}

/// Run one page through the plugins and the optional template
fn render_page(
    path: &Path,
    manager: &mut PluginManager,
    template: Option<&str>,
) -> BoxResult<String> {
    let page = load_page(path)?;
    let mut context =
        HookContext::for_page(path.display().to_string(), page.front_matter, page.html);

    run_hook(manager, &Hook::ContentParsed, &mut context)?;
    run_hook(manager, &Hook::PageRendering, &mut context)?;

    match template {
        Some(source) => {
            let globals = page_globals(
                &context.content,
                context.variable(TOC_VARIABLE).map(String::as_str),
                &context.front_matter,
            );
            Ok(render_template(source, &globals)?)
        }
        None => Ok(context.content),
    }
}

/// Hidden and underscore entries are site internals, never pages
fn is_excluded(entry: &DirEntry, output: &Path) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.starts_with('_') || entry.path().starts_with(output)
}

fn render_directory(
    input: &Path,
    output: &Path,
    manager: &mut PluginManager,
    template: Option<&str>,
) -> BoxResult<()> {
    info!("Rendering pages from {} into {}", input.display(), output.display());

    let mut rendered = 0;
    for entry in WalkDir::new(input)
        .into_iter()
        .filter_entry(|e| !is_excluded(e, output))
    {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_page(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(input)?;
        let target = output.join(output_path(relative));
        let html = render_page(entry.path(), manager, template)?;
        write_output(&target, &html)?;

        debug!("Rendered {} to {}", entry.path().display(), target.display());
        rendered += 1;
    }

    info!("Rendered {} pages", rendered);
    Ok(())
}

fn write_output(path: &Path, html: &str) -> BoxResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}
