use anyhow::Result;
use chrono::NaiveDate;
use daily_math_core::SiteConfig;

use super::{generate, rebuild};

/// Generate the day's page, then always rebuild the homepage and sitemap.
///
/// Only a rebuild failure makes this return an error.
pub async fn run(config: &SiteConfig, date: NaiveDate) -> Result<()> {
    generate::run(config, date).await?;
    rebuild::run(config, date)
}
