mod error;
mod fetch;
mod output;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use output::Format;
use parser::blocks::{Splitter, MARKER_SELECTOR};

#[derive(Parser)]
#[command(
    name = "cm_quotes",
    about = "Criminal Minds opening/closing quote scraper",
    version
)]
struct Cli {
    /// Write the dump to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parse a saved copy of the page instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// CSS selector for the element that marks an episode header
    #[arg(long, default_value = MARKER_SELECTOR)]
    marker: String,

    /// Hide the fetch spinner
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let splitter = Splitter::new(&cli.marker)?;

    let html = match &cli.input {
        Some(path) => {
            info!("Reading saved page: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => fetch::fetch_page(fetch::QUOTES_PAGE_URL, !cli.quiet)
            .await
            .context("Failed to fetch quotes page")?,
    };

    let data = parser::process_page(&html, &splitter);
    data.stats.log();

    output::dump(&data.records, cli.format, cli.output.as_deref())
        .context("Failed to write quotes")?;

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
