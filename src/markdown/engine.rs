use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings.
///
/// Header ids stay off: the table of contents assigns heading ids itself.
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.header_ids = None;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true; // Allow HTML, needed for <toc> markers

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    comrak::markdown_to_html(content, options)
}
