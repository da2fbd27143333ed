use log::{info, warn};

use crate::config::types::{TocConfig, TocOptions};
use crate::utils::error::TocResult;

/// Clamp a heading level into `1..=6`
pub fn clamp_level(key: &str, level: u8) -> u8 {
    let clamped = level.clamp(1, 6);
    if clamped != level {
        warn!("toc.{} = {} is outside 1..=6, using {}", key, level, clamped);
    }
    clamped
}

/// Validate a configuration layer by resolving it
pub fn validate_config(config: &TocConfig) -> TocResult<TocOptions> {
    let options = config.resolve()?;

    if !options.has_level_range() {
        warn!(
            "toc.min_level ({}) is greater than toc.max_level ({}), no table of contents will render",
            options.min_level, options.max_level
        );
    }

    if options.initially_hide && !options.toggle {
        info!("toc.initially_hide has no effect without toc.toggle");
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_level() {
        assert_eq!(clamp_level("min_level", 0), 1);
        assert_eq!(clamp_level("max_level", 3), 3);
        assert_eq!(clamp_level("max_level", 7), 6);
    }

    #[test]
    fn test_validate_config_fails_on_bad_tag() {
        let config = TocConfig {
            tag: Some("table".to_string()),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_accepts_inverted_range() {
        let config = TocConfig {
            min_level: Some(5),
            max_level: Some(2),
            ..Default::default()
        };
        let options = validate_config(&config).unwrap();
        assert!(!options.has_level_range());
    }
}
