use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::TocConfig;
use crate::utils::error::{TocError, TocResult};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_config.yml", "_config.yaml", "_config.toml", "_config.json"];

/// Key holding the table of contents settings in a site configuration
const TOC_KEY: &str = "toc";

/// Load the global table of contents layer.
///
/// An explicit `config_file` must exist. Without one, the first default
/// configuration file found in `source_dir` is used; if there is none the
/// layer is empty and every option takes its default.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_file: Option<PathBuf>,
) -> TocResult<TocConfig> {
    let path = match config_file {
        Some(path) => path,
        None => match find_default_config_file(&source_dir) {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(TocConfig::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());
    load_config_file(&path)
}

/// Find the first default configuration file in a directory
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Read one configuration file and extract its `toc` table
pub fn load_config_file(config_path: &Path) -> TocResult<TocConfig> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_path),
        "json" => parse_json_config(&content, config_path),
        // Assume YAML for .yml, .yaml and anything without an extension
        "yml" | "yaml" | "" => parse_yaml_config(&content, config_path),
        other => Err(TocError::Config(format!(
            "Unsupported configuration file format: {}",
            other
        ))),
    }
}

/// Parse the `toc` table of a YAML configuration
pub fn parse_yaml_config(content: &str, path: &Path) -> TocResult<TocConfig> {
    let yaml_value = serde_yaml::from_str::<serde_yaml::Value>(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })?;

    match yaml_value.get(TOC_KEY) {
        Some(value) if !value.is_null() => {
            serde_yaml::from_value(value.clone()).map_err(|e| {
                TocError::Config(format!(
                    "Invalid toc section in {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        _ => {
            debug!("No toc section in {}", path.display());
            Ok(TocConfig::default())
        }
    }
}

/// Parse the `toc` table of a TOML configuration
pub fn parse_toml_config(content: &str, path: &Path) -> TocResult<TocConfig> {
    let toml_value = toml::from_str::<toml::Value>(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })?;

    match toml_value.get(TOC_KEY) {
        Some(value) => value.clone().try_into().map_err(|e| {
            TocError::Config(format!(
                "Invalid toc section in {}: {}",
                path.display(),
                e
            ))
        }),
        None => {
            debug!("No toc section in {}", path.display());
            Ok(TocConfig::default())
        }
    }
}

/// Parse the `toc` table of a JSON configuration
pub fn parse_json_config(content: &str, path: &Path) -> TocResult<TocConfig> {
    let json_value = serde_json::from_str::<serde_json::Value>(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
    })?;

    match json_value.get(TOC_KEY) {
        Some(value) if !value.is_null() => {
            serde_json::from_value(value.clone()).map_err(|e| {
                TocError::Config(format!(
                    "Invalid toc section in {}: {}",
                    path.display(),
                    e
                ))
            })
        }
        _ => {
            debug!("No toc section in {}", path.display());
            Ok(TocConfig::default())
        }
    }
}
