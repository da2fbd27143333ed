use std::collections::HashSet;

use log::debug;

use crate::toc::collector::HeadingNode;
use crate::toc::dom;

/// Id used when a heading's text yields an empty slug
pub const FALLBACK_SLUG: &str = "n-a";

/// Derive a URL-fragment-safe id from heading text.
///
/// Text is transliterated to ASCII first, then runs of anything that is not
/// a letter or digit become a single hyphen and the result is lowercased
/// with no leading or trailing hyphens. Transliteration covers every script
/// and emoji, so `日本語` becomes `ri-ben-yu` and `🚀 Launch` becomes
/// `rocket-launch` rather than being dropped. Never returns an empty string.
pub fn slugify(text: &str) -> String {
    let slug = ::slug::slugify(text);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// An id chosen for a heading that had none
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAssignment {
    /// Position of the heading in the header sequence
    pub index: usize,
    /// The id to give it
    pub id: String,
}

/// Compute ids for every header lacking one, without touching the tree.
///
/// `taken` holds the ids already present in the document. A slug that is
/// already taken, or was handed out earlier in this pass, gets `-1`, `-2`, ...
/// appended until it is unique.
pub fn assign_ids(headers: &[HeadingNode], taken: &HashSet<String>) -> Vec<IdAssignment> {
    let mut used = taken.clone();
    let mut assignments = Vec::new();

    for (index, header) in headers.iter().enumerate() {
        if header.id.is_some() {
            continue;
        }
        let id = disambiguate(slugify(&header.text), &mut used);
        assignments.push(IdAssignment { index, id });
    }

    assignments
}

fn disambiguate(base: String, used: &mut HashSet<String>) -> String {
    let mut candidate = base.clone();
    let mut counter = 1;
    while used.contains(&candidate) {
        candidate = format!("{}-{}", base, counter);
        counter += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// Write computed ids onto the heading elements.
///
/// A header that already has an id is never overwritten.
pub fn apply_ids(headers: &mut [HeadingNode], assignments: &[IdAssignment]) {
    for assignment in assignments {
        let Some(header) = headers.get_mut(assignment.index) else {
            continue;
        };
        if header.id.is_some() {
            continue;
        }
        debug!("Assigning id \"{}\" to \"{}\"", assignment.id, header.text);
        dom::set_attribute(&header.handle, "id", &assignment.id);
        header.id = Some(assignment.id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TocOptions;
    use crate::toc::collector::collect_headers;
    use crate::toc::dom::HtmlDocument;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Getting   Started!  "), "getting-started");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("C++ & Rust -- 2024"), "c-rust-2024");
    }

    #[test]
    fn test_slugify_transliterates_scripts_and_emoji() {
        assert_eq!(slugify("🚀 Launch"), "rocket-launch");
        assert_eq!(slugify("日本語"), "ri-ben-yu");
        assert_eq!(slugify("Привет"), "privet");
    }

    #[test]
    fn test_slugify_fallback() {
        assert_eq!(slugify(""), "n-a");
        assert_eq!(slugify("!!! ---"), "n-a");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        assert_eq!(slugify("Some Title"), slugify("Some Title"));
    }

    #[test]
    fn test_assign_ids_disambiguates() {
        let doc = HtmlDocument::parse(
            "<h1>Intro</h1><h2 id=\"setup\">Setup</h2><h2>Setup</h2><h2>Intro</h2><h2>Intro</h2>",
        )
        .unwrap();
        let headers = collect_headers(&doc, &TocOptions::default());
        let taken: HashSet<String> = ["setup".to_string()].into_iter().collect();

        let assignments = assign_ids(&headers, &taken);
        let ids: Vec<(usize, &str)> = assignments.iter().map(|a| (a.index, a.id.as_str())).collect();

        assert_eq!(
            ids,
            vec![(0, "intro"), (2, "setup-1"), (3, "intro-1"), (4, "intro-2")]
        );
    }

    #[test]
    fn test_assign_ids_is_deterministic() {
        let doc = HtmlDocument::parse("<h1>Alpha</h1><h2>Beta</h2><h2>Beta</h2>").unwrap();
        let headers = collect_headers(&doc, &TocOptions::default());
        let taken = HashSet::new();

        assert_eq!(assign_ids(&headers, &taken), assign_ids(&headers, &taken));
    }

    #[test]
    fn test_apply_ids_keeps_existing() {
        let doc = HtmlDocument::parse("<h1 id=\"keep\">Alpha</h1><h2>Beta</h2>").unwrap();
        let mut headers = collect_headers(&doc, &TocOptions::default());
        let assignments = vec![
            IdAssignment { index: 0, id: "other".to_string() },
            IdAssignment { index: 1, id: "beta".to_string() },
        ];

        apply_ids(&mut headers, &assignments);

        assert_eq!(headers[0].id.as_deref(), Some("keep"));
        assert_eq!(dom::attribute(&headers[0].handle, "id").as_deref(), Some("keep"));
        assert_eq!(headers[1].id.as_deref(), Some("beta"));
        assert_eq!(
            doc.to_html().unwrap(),
            "<h1 id=\"keep\">Alpha</h1><h2 id=\"beta\">Beta</h2>"
        );
    }
}
