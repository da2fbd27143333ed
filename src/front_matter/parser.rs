use log::debug;

use crate::front_matter::types::FrontMatter;
use crate::utils::error::{TocError, TocResult};

const DELIMITER: &str = "---";

/// Check if content has front matter
pub fn has_front_matter(content: &str) -> bool {
    content.starts_with("---\n") || content.starts_with("---\r\n")
}

/// Split front matter from content.
///
/// Content without front matter comes back unchanged with an empty
/// `FrontMatter`. An unterminated block or invalid YAML is an error.
pub fn extract_front_matter(content: &str) -> TocResult<(FrontMatter, String)> {
    if !has_front_matter(content) {
        return Ok((FrontMatter::default(), content.to_string()));
    }

    let after_open = &content[DELIMITER.len()..];
    let end_pos = after_open
        .find("\n---")
        .ok_or_else(|| TocError::FrontMatter("missing closing delimiter".to_string()))?;

    let yaml_content = &after_open[..end_pos];
    let front_matter = parse(yaml_content)?;

    // Skip the closing delimiter and the rest of its line
    let rest = &after_open[end_pos + 1 + DELIMITER.len()..];
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => "",
    };

    Ok((front_matter, body.to_string()))
}

/// Parse a YAML front matter block
pub fn parse(yaml_content: &str) -> TocResult<FrontMatter> {
    if yaml_content.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let front_matter: FrontMatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| TocError::FrontMatter(format!("Error parsing front matter: {}", e)))?;
    debug!("Parsed front matter, toc overrides: {:?}", front_matter.toc);
    Ok(front_matter)
}
