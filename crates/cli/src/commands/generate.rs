use chrono::NaiveDate;
use daily_math_core::SiteConfig;
use daily_math_generator::{Outcome, generate_today};

/// Generate one daily page. Never fails: the outcome is logged instead.
pub async fn run(config: &SiteConfig, date: NaiveDate) -> anyhow::Result<()> {
    let outcome = generate_today(config, date).await;
    report(&outcome);
    Ok(())
}

pub fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Written { slug, markdown_path, html_path } => {
            println!("✓ Generated {}", slug);
            println!("   {}", markdown_path.display());
            println!("   {}", html_path.display());
        }
        Outcome::Skipped(reason) => println!("⚠ Generation skipped: {}", reason),
        Outcome::Empty => println!("⚠ Generation returned no text; existing pages kept"),
        Outcome::Failed(message) => eprintln!("✗ Generation failed: {}", message),
    }
}
