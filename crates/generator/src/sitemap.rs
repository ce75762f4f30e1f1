//! Sitemap generation.
//!
//! One `<url>` for the site root plus one per daily page, oldest first:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url><loc>https://owner.github.io/name/</loc></url>
//!   <url><loc>https://owner.github.io/name/daily/2024-01-01.html</loc></url>
//! </urlset>
//! ```

use daily_math_core::types::{PageIndex, SitemapEntry};
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<SitemapEntry>,
}

impl Sitemap {
    pub fn build(base_url: &str, index: &PageIndex) -> Self {
        Self {
            urls: SitemapEntry::all(base_url, index),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 96);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in &self.urls {
            xml.push_str("  <url><loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc></url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use daily_math_core::types::Slug;

    const BASE: &str = "https://octo.github.io/math/";

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty_has_root_only() {
        let xml = Sitemap::build(BASE, &PageIndex::default()).into_xml();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<url><loc>https://octo.github.io/math/</loc></url>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_sitemap_lists_pages_oldest_first() {
        let index = PageIndex::from_slugs(vec![Slug::new("2024-01-02"), Slug::new("2024-01-01")]);
        let sitemap = Sitemap::build(BASE, &index);
        assert_eq!(sitemap.len(), 3);

        let xml = sitemap.into_xml();
        let first = xml.find("daily/2024-01-01.html").unwrap();
        let second = xml.find("daily/2024-01-02.html").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_sitemap_escapes_locations() {
        let xml = Sitemap::build("https://example.org/?a=1&b=2/", &PageIndex::default()).into_xml();
        assert!(xml.contains("<loc>https://example.org/?a=1&amp;b=2/</loc>"));
    }
}
