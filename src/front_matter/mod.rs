pub mod parser;
pub mod types;

// Re-export the most common items for convenience
pub use parser::{extract_front_matter, has_front_matter, parse};
pub use types::FrontMatter;
