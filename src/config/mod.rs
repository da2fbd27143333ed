mod types;
mod loader;
pub mod defaults;
mod validation;

pub use types::*;
pub use loader::{load_config, load_config_file};
pub use validation::validate_config;
