mod fetch;
mod output;
mod page;
mod parser;
mod record;
mod text;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "foa_scraper", about = "Grants.gov funding opportunity ingestor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one opportunity page and write foa.json + foa.csv
    Ingest {
        /// Opportunity detail URL
        #[arg(long)]
        url: String,
        /// Output directory
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
    /// Extract from an already-saved opportunity page (no network)
    Parse {
        /// Path to a saved HTML page
        file: PathBuf,
        /// Original URL, used for the opportunity id
        #[arg(long)]
        url: Option<String>,
        /// Output directory
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest { url, out_dir } => {
            let html = fetch::fetch_html(&url).await?;
            emit(&url, &html, &out_dir)
        }
        Commands::Parse { file, url, out_dir } => {
            let html = std::fs::read_to_string(&file)?;
            emit(url.as_deref().unwrap_or_default(), &html, &out_dir)
        }
    }
}

fn emit(url: &str, html: &str, out_dir: &std::path::Path) -> anyhow::Result<()> {
    let page = page::Page::parse(html);
    let opportunity = parser::process_page(url, &page);

    info!(
        "Extracted {} populated fields, {} tags",
        opportunity.to_pruned_map().len(),
        opportunity.tags.len()
    );

    let json_path = output::write_json(&opportunity, out_dir)?;
    let csv_path = output::write_csv(&opportunity, out_dir)?;
    println!("Wrote: {}", json_path.display());
    println!("Wrote: {}", csv_path.display());
    Ok(())
}
