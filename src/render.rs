//! Markdown rendering for the presentation layer.
//!
//! The catalog client hands bodies through verbatim; rendering is strictly a
//! caller concern and lives here, next to the CLI.

use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown body to HTML
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_paragraphs() {
        let html = render_markdown("# Hello\n\nfirst post");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>first post</p>"));
    }

    #[test]
    fn test_renders_gfm_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_renders_strikethrough() {
        let html = render_markdown("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }
}
