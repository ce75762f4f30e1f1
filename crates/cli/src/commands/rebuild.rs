use anyhow::{Context, Result};
use chrono::NaiveDate;
use daily_math_core::SiteConfig;
use daily_math_generator::rebuild;

/// Rebuild index.html and sitemap.xml
pub fn run(config: &SiteConfig, today: NaiveDate) -> Result<()> {
    let summary = rebuild(config, today).with_context(|| {
        format!(
            "Failed to rebuild index.html and sitemap.xml in {}",
            config.root.display()
        )
    })?;

    println!(
        "✅ Rebuilt site: {} pages, {} on the homepage, {} sitemap URLs",
        summary.pages, summary.recent_listed, summary.sitemap_urls
    );
    Ok(())
}
