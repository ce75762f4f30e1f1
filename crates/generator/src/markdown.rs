use pulldown_cmark::{Event, Options, Parser, html};

/// Render model output to an HTML fragment.
///
/// Raw HTML in the source is emitted as escaped text.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings_and_lists() {
        let html = render_markdown("# Daily Math - 2024-03-05\n## Problems\n1. 12 + 7 = ?\n");
        assert!(html.contains("<h1>Daily Math - 2024-03-05</h1>"));
        assert!(html.contains("<h2>Problems</h2>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>12 + 7 = ?</li>"));
    }

    #[test]
    fn test_render_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_render_fenced_code() {
        let html = render_markdown("```\n3 x 4 = 12\n```\n");
        assert!(html.contains("<pre><code>3 x 4 = 12"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("Hello <script>alert(1)</script>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
