// Daily page generation and site rebuild

pub mod daily;
pub mod markdown;
pub mod prompt;
pub mod rebuild;
pub mod sitemap;
pub mod template;

pub use daily::{GenerationError, Outcome, generate_today, generate_with};
pub use rebuild::{RebuildSummary, rebuild};
