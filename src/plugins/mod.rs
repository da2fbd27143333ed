//! Plugin system for page processing.
//!
//! A host drives pages through hooks; the table of contents plugin reacts to
//! the configuration, content and template hooks.

pub mod hooks;

use log::{debug, error};

pub use hooks::{Hook, HookContext, HookResult};

use crate::liquid::TOC_VARIABLE;
use crate::toc::TableOfContents;

/// Plugin trait that all plugins must implement
pub trait Plugin {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Register hooks that this plugin wants to listen to
    fn register_hooks(&self) -> Vec<Hook>;

    /// Handle a hook event
    fn handle_hook(&mut self, hook: &Hook, context: &mut HookContext) -> HookResult;
}

/// Plugin manager runs hooks across registered plugins in order
#[derive(Default)]
pub struct PluginManager {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager with the built-in plugins registered
    pub fn with_builtin() -> Self {
        let mut manager = Self::new();
        manager.register(Box::new(TocPlugin::new()));
        manager
    }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        debug!("Registered plugin '{}'", plugin.name());
        self.plugins.push(plugin);
    }

    /// Execute a hook with the given context
    pub fn execute_hook(&mut self, hook: &Hook, context: &mut HookContext) -> HookResult {
        for plugin in self.plugins.iter_mut() {
            if !plugin.register_hooks().contains(hook) {
                continue;
            }

            debug!("Executing hook '{}' on plugin '{}'", hook.name(), plugin.name());
            match plugin.handle_hook(hook, context) {
                HookResult::Continue => continue,
                HookResult::StopPropagation => {
                    debug!("Hook '{}' stopped by plugin '{}'", hook.name(), plugin.name());
                    return HookResult::StopPropagation;
                }
                HookResult::Error(e) => {
                    error!("Error in hook '{}' from plugin '{}': {}", hook.name(), plugin.name(), e);
                    return HookResult::Error(e);
                }
            }
        }

        HookResult::Continue
    }

    /// Names of all registered plugins
    pub fn list_plugins(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }
}

/// Builds the table of contents of every page.
///
/// - `ConfigLoaded` validates the site settings; invalid `tag` or `style`
///   values fail here, before any page is processed.
/// - `ContentParsed` layers the page front matter on top, transforms the
///   content and keeps the serialized table of contents.
/// - `PageRendering` exposes that markup as the `toc` template variable.
#[derive(Default)]
pub struct TocPlugin {
    generator: TableOfContents,
    last_toc: Option<String>,
}

impl TocPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_config_loaded(&mut self, context: &HookContext) -> HookResult {
        match TableOfContents::new(context.site_config.clone()) {
            Ok(generator) => {
                self.generator = generator;
                HookResult::Continue
            }
            Err(e) => HookResult::Error(e.to_string()),
        }
    }

    fn on_content_parsed(&mut self, context: &mut HookContext) -> HookResult {
        self.last_toc = None;

        let render = self
            .generator
            .for_page(&context.front_matter.toc_overrides())
            .and_then(|page| page.render(&context.content));

        match render {
            Ok(render) => {
                context.content = render.content;
                self.last_toc = render.toc;
                HookResult::Continue
            }
            Err(e) => HookResult::Error(e.to_string()),
        }
    }

    fn on_page_rendering(&mut self, context: &mut HookContext) -> HookResult {
        if let Some(toc) = self.last_toc.take() {
            context.set_variable(TOC_VARIABLE, toc);
        }
        HookResult::Continue
    }
}

impl Plugin for TocPlugin {
    fn name(&self) -> &str {
        "toc"
    }

    fn register_hooks(&self) -> Vec<Hook> {
        vec![Hook::ConfigLoaded, Hook::ContentParsed, Hook::PageRendering]
    }

    fn handle_hook(&mut self, hook: &Hook, context: &mut HookContext) -> HookResult {
        match hook {
            Hook::ConfigLoaded => self.on_config_loaded(context),
            Hook::ContentParsed => self.on_content_parsed(context),
            Hook::PageRendering => self.on_page_rendering(context),
            Hook::Custom(_) => HookResult::Continue,
        }
    }
}
