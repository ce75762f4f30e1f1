use chrono::{Datelike, NaiveDate};
use daily_math_client::{Availability, ClientConfig, ClientError, TextGenerator, Unavailable, connect};
use daily_math_core::{DailyPage, Error, SiteConfig, SiteLayout, Slug};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::markdown::render_markdown;
use crate::prompt::daily_prompt;
use crate::template::render_daily_page;

/// What a generation attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No client available; nothing was touched
    Skipped(Unavailable),
    /// The service answered with empty text; nothing was touched
    Empty,
    Written {
        slug: Slug,
        markdown_path: PathBuf,
        html_path: PathBuf,
    },
    /// Request or write failed; already logged
    Failed(String),
}

/// Why a generation attempt failed
#[derive(Debug)]
pub enum GenerationError {
    Request { slug: Slug, source: ClientError },
    Write { slug: Slug, source: Error },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Request { slug, source } => {
                write!(f, "request for {} failed: {}", slug, source)
            }
            GenerationError::Write { slug, source } => {
                write!(f, "writing {} failed: {}", slug, source)
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::Request { source, .. } => Some(source),
            GenerationError::Write { source, .. } => Some(source),
        }
    }
}

impl Outcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Outcome::Written { .. })
    }
}

pub fn client_config(config: &SiteConfig) -> ClientConfig {
    ClientConfig {
        credential: config.credential.clone(),
        model: config.model.clone(),
        api_base: config.api_base.clone(),
    }
}

/// Best-effort generation of the page for `today`.
///
/// Never returns an error: every failure is logged and reported as an [`Outcome`].
pub async fn generate_today(config: &SiteConfig, today: NaiveDate) -> Outcome {
    match connect(&client_config(config)) {
        Ok(availability) => generate_with(config, &availability, today).await,
        Err(e) => {
            tracing::error!("Could not create generation client: {}", e);
            Outcome::Failed(e.to_string())
        }
    }
}

/// Same as [`generate_today`] with an already-resolved client
pub async fn generate_with(
    config: &SiteConfig,
    availability: &Availability,
    today: NaiveDate,
) -> Outcome {
    let generator = match availability {
        Availability::Ready(generator) => generator.as_ref(),
        Availability::Unavailable(reason) => {
            tracing::info!("Skipping generation ({})", reason);
            return Outcome::Skipped(*reason);
        }
    };

    match generate_page(config, generator, today).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            Outcome::Failed(e.to_string())
        }
    }
}

async fn generate_page(
    config: &SiteConfig,
    generator: &dyn TextGenerator,
    today: NaiveDate,
) -> Result<Outcome, GenerationError> {
    let slug = Slug::from_date(today);
    let prompt = daily_prompt(today);

    let text = match generator.complete(&prompt).await {
        Ok(text) => text,
        Err(source) => return Err(GenerationError::Request { slug, source }),
    };
    let text = text.trim();

    if text.is_empty() {
        tracing::warn!("Service returned empty text for {}; skipping page write", slug);
        return Ok(Outcome::Empty);
    }

    let page = DailyPage {
        html: render_daily_page(&config.title, &slug, &render_markdown(text), today.year()),
        markdown: format!("{}\n", text),
        slug,
    };

    let layout = config.layout();
    if let Err(source) = write_page(&layout, &page) {
        return Err(GenerationError::Write {
            slug: page.slug,
            source,
        });
    }

    let markdown_path = layout.markdown_path(&page.slug);
    let html_path = layout.html_path(&page.slug);
    tracing::info!("Wrote {}", html_path.display());

    Ok(Outcome::Written {
        slug: page.slug,
        markdown_path,
        html_path,
    })
}

fn write_page(layout: &SiteLayout, page: &DailyPage) -> daily_math_core::Result<()> {
    let daily_dir = layout.daily_dir();
    fs::create_dir_all(&daily_dir).map_err(|e| Error::at_path(&daily_dir, e))?;

    let markdown_path = layout.markdown_path(&page.slug);
    fs::write(&markdown_path, &page.markdown).map_err(|e| Error::at_path(&markdown_path, e))?;

    let html_path = layout.html_path(&page.slug);
    fs::write(&html_path, &page.html).map_err(|e| Error::at_path(&html_path, e))?;
    Ok(())
}
