mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pricesheet-cli")]
#[command(about = "Fill a Google Sheet with product data scraped from retailer links")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read product links from a sheet column and write product details
    /// into columns B to F of the same rows.
    Fill {
        /// Full URL of the spreadsheet, e.g. `https://docs.google.com/spreadsheets/d/<id>/edit`.
        #[arg(long)]
        spreadsheet_url: String,
        /// Column letter holding the product links.
        #[arg(long)]
        column: String,
        /// Sheet (tab) name; defaults to `PRICESHEET_DEFAULT_SHEET_NAME`.
        #[arg(long)]
        sheet_name: Option<String>,
        /// Print the batch update as JSON instead of writing it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Extract a single product URL and print the record as JSON.
    Extract { url: String },
    /// Print the retailer a URL is classified as.
    Classify { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { url } => {
            init_tracing("warn")?;
            println!("{}", pricesheet_scraper::classify(&url));
        }
        Commands::Extract { url } => {
            let config = pricesheet_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            commands::run_extract(&config, &url).await?;
        }
        Commands::Fill {
            spreadsheet_url,
            column,
            sheet_name,
            dry_run,
        } => {
            let config = pricesheet_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            let sheet_name = sheet_name.unwrap_or_else(|| config.default_sheet_name.clone());
            let request = pricesheet_sheets::FillRequest {
                spreadsheet_url,
                column,
                sheet_name,
            };
            commands::run_fill(&config, &request, dry_run).await?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `fallback` is used as the filter directive.
fn init_tracing(fallback: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
