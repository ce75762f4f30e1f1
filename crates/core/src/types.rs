use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory under the site root holding one page per day
pub const DAILY_DIR: &str = "daily";

/// Escape everything in a path segment except RFC 3986 unreserved characters
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Identifier of a daily page: the file stem, normally an ISO-8601 date.
///
/// Ordering is lexical, which matches chronological order for `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One generated day: the raw Markdown from the model and its rendered HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPage {
    pub slug: Slug,
    pub markdown: String,
    pub html: String,
}

/// File layout of the generated site, relative to a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn daily_dir(&self) -> PathBuf {
        self.root.join(DAILY_DIR)
    }

    pub fn markdown_path(&self, slug: &Slug) -> PathBuf {
        self.daily_dir().join(format!("{}.md", slug))
    }

    pub fn html_path(&self, slug: &Slug) -> PathBuf {
        self.daily_dir().join(format!("{}.html", slug))
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join("index.html")
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.root.join("sitemap.xml")
    }

    /// Site-relative link to a daily page, e.g. `daily/2024-01-02.html`
    ///
    /// The slug is percent-encoded so any file stem yields a valid URL.
    pub fn page_href(slug: &Slug) -> String {
        format!(
            "{}/{}.html",
            DAILY_DIR,
            utf8_percent_encode(slug.as_str(), SEGMENT)
        )
    }
}

/// All daily pages currently on disk, most recent first.
///
/// Never stored: rebuilt from a directory listing on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    slugs: Vec<Slug>,
}

impl PageIndex {
    pub fn from_slugs(mut slugs: Vec<Slug>) -> Self {
        slugs.sort_unstable_by(|a, b| b.cmp(a));
        slugs.dedup();
        Self { slugs }
    }

    /// List every `*.html` file directly inside `daily_dir`
    pub fn scan(daily_dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(daily_dir).map_err(|e| Error::at_path(daily_dir, e))?;

        let mut slugs = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::at_path(daily_dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("html") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if !stem.is_empty() => slugs.push(Slug::new(stem)),
                _ => tracing::debug!("Skipping page with non UTF-8 name: {}", path.display()),
            }
        }

        Ok(Self::from_slugs(slugs))
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn latest(&self) -> Option<&Slug> {
        self.slugs.first()
    }

    /// At most `limit` pages, most recent first
    pub fn recent(&self, limit: usize) -> &[Slug] {
        &self.slugs[..self.slugs.len().min(limit)]
    }

    pub fn oldest_first(&self) -> impl Iterator<Item = &Slug> {
        self.slugs.iter().rev()
    }
}

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
}

impl SitemapEntry {
    pub fn root(base_url: &str) -> Self {
        Self {
            loc: base_url.to_string(),
        }
    }

    pub fn page(base_url: &str, slug: &Slug) -> Self {
        Self {
            loc: format!("{}{}", base_url, SiteLayout::page_href(slug)),
        }
    }

    /// Root entry followed by every page, oldest first
    pub fn all(base_url: &str, index: &PageIndex) -> Vec<Self> {
        std::iter::once(Self::root(base_url))
            .chain(index.oldest_first().map(|slug| Self::page(base_url, slug)))
            .collect()
    }
}
