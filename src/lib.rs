//! Table of contents generation for rendered HTML pages.
//!
//! Collects the headings of a page, gives every heading an id, rebuilds the
//! flat heading sequence into nested lists and injects the result where the
//! page asks for it with a `[toc]` paragraph or a `<toc>` element.

pub mod cli;
pub mod config;
pub mod front_matter;
pub mod liquid;
pub mod markdown;
pub mod plugins;
pub mod toc;
pub mod utils;

pub use config::{TocConfig, TocOptions};
pub use toc::{TableOfContents, TocList, TocRender};
pub use utils::error::{TocError, TocResult};
