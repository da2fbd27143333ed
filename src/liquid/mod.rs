mod convert;

use liquid::model::Value;
use liquid::{Object, ParserBuilder};
use log::debug;

use crate::front_matter::FrontMatter;
use crate::utils::error::TocResult;

pub use convert::yaml_to_liquid;

/// Name of the template variable holding the serialized table of contents
pub const TOC_VARIABLE: &str = "toc";

/// Template globals for one page: `content`, `toc` and `page`.
///
/// `toc` is the pre-serialized container markup, or nil when no table of
/// contents was built. Liquid does not escape output, so `{{ toc }}` places
/// the markup as-is.
pub fn page_globals(content: &str, toc: Option<&str>, front_matter: &FrontMatter) -> Object {
    let mut globals = Object::new();

    globals.insert("content".into(), Value::scalar(content.to_string()));
    globals.insert(
        TOC_VARIABLE.into(),
        match toc {
            Some(toc) => Value::scalar(toc.to_string()),
            None => Value::Nil,
        },
    );

    let mut page = Object::new();
    for (key, value) in &front_matter.custom {
        page.insert(key.clone().into(), yaml_to_liquid(value.clone()));
    }
    if let Some(title) = &front_matter.title {
        page.insert("title".into(), Value::scalar(title.clone()));
    }
    if let Some(layout) = &front_matter.layout {
        page.insert("layout".into(), Value::scalar(layout.clone()));
    }
    globals.insert("page".into(), Value::Object(page));

    debug!("Template globals: {:?}", globals.keys().collect::<Vec<_>>());
    globals
}

/// Render a liquid template against page globals
pub fn render_template(template_source: &str, globals: &Object) -> TocResult<String> {
    let parser = ParserBuilder::with_stdlib().build()?;
    let template = parser.parse(template_source)?;
    Ok(template.render(globals)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "<h1 id=\"a\">A</h1>";

    #[test]
    fn test_toc_variable_is_not_escaped() {
        let globals = page_globals(
            CONTENT,
            Some("<div id=\"toc\"><ol></ol></div>"),
            &FrontMatter::default(),
        );

        let html = render_template("<nav>{{ toc }}</nav><main>{{ content }}</main>", &globals).unwrap();
        assert_eq!(
            html,
            "<nav><div id=\"toc\"><ol></ol></div></nav><main><h1 id=\"a\">A</h1></main>"
        );
    }

    #[test]
    fn test_missing_toc_is_nil() {
        let globals = page_globals(CONTENT, None, &FrontMatter::default());
        let html = render_template("{% if toc %}yes{% else %}no{% endif %}", &globals).unwrap();
        assert_eq!(html, "no");
    }

    #[test]
    fn test_page_variables() {
        let front_matter = FrontMatter {
            title: Some("Guide".to_string()),
            ..Default::default()
        };
        let globals = page_globals(CONTENT, None, &front_matter);
        let html = render_template("<title>{{ page.title }}</title>", &globals).unwrap();
        assert_eq!(html, "<title>Guide</title>");
    }

    #[test]
    fn test_bad_template() {
        let globals = page_globals(CONTENT, None, &FrontMatter::default());
        assert!(render_template("{% if %}", &globals).is_err());
    }
}
