mod commands;
mod logging;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use daily_math_core::SiteConfig;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daily-math")]
#[command(version, about = "Daily kid-friendly math worksheets as a static site", long_about = None)]
struct Cli {
    /// Site root containing index.html, sitemap.xml and daily/
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Config file (default: daily-math.toml in the site root, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Generate today's page (best effort), then rebuild the site
    Run {
        /// Day to generate instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Generate a daily page only
    Generate {
        /// Day to generate instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Rebuild index.html and sitemap.xml from the pages on disk
    Rebuild,

    /// Serve the site locally and rebuild when daily pages change
    Preview {
        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    logging::setup_logging(&logging::default_filter(if cli.verbose { "debug" } else { "info" }));

    let command = cli.command.unwrap_or(Command::Run { date: None });
    if let Command::Completions { shell } = command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "daily-math", &mut io::stdout());
        return Ok(());
    }

    let config = SiteConfig::load(cli.root.as_deref(), cli.config.as_deref())
        .context("Failed to load configuration")?;
    let today = chrono::Local::now().date_naive();

    match command {
        Command::Run { date } => commands::run::run(&config, date.unwrap_or(today)).await,
        Command::Generate { date } => {
            commands::generate::run(&config, date.unwrap_or(today)).await
        }
        Command::Rebuild => commands::rebuild::run(&config, today),
        Command::Preview { port } => commands::preview::run(config, port).await,
        Command::Completions { .. } => Ok(()),
    }
}
