use chrono::{Datelike, NaiveDate};
use daily_math_core::{Error, PageIndex, Result, SiteConfig};
use std::fs;

use crate::sitemap::Sitemap;
use crate::template::{RECENT_LIMIT, render_homepage};

/// Counts reported after a rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildSummary {
    pub pages: usize,
    pub recent_listed: usize,
    pub sitemap_urls: usize,
}

/// Regenerate `index.html` and `sitemap.xml` from the pages on disk.
///
/// Output depends only on the daily directory listing and the year of `today`.
/// Any filesystem error is fatal and returned to the caller.
pub fn rebuild(config: &SiteConfig, today: NaiveDate) -> Result<RebuildSummary> {
    let layout = config.layout();
    let daily_dir = layout.daily_dir();
    fs::create_dir_all(&daily_dir).map_err(|e| Error::at_path(&daily_dir, e))?;

    let index = PageIndex::scan(&daily_dir)?;
    tracing::debug!("Found {} daily pages in {}", index.len(), daily_dir.display());

    let homepage = render_homepage(&config.title, &index, today.year());
    let index_path = layout.index_path();
    fs::write(&index_path, homepage).map_err(|e| Error::at_path(&index_path, e))?;

    let sitemap = Sitemap::build(&config.base_url, &index);
    let sitemap_urls = sitemap.len();
    let sitemap_path = layout.sitemap_path();
    fs::write(&sitemap_path, sitemap.into_xml()).map_err(|e| Error::at_path(&sitemap_path, e))?;

    let summary = RebuildSummary {
        pages: index.len(),
        recent_listed: index.recent(RECENT_LIMIT).len(),
        sitemap_urls,
    };
    tracing::info!(
        pages = summary.pages,
        sitemap_urls = summary.sitemap_urls,
        "Rebuilt index.html and sitemap.xml"
    );
    Ok(summary)
}
