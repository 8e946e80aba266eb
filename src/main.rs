//! bookscope - regional book price explorer CLI

use anyhow::Result;
use bookscope::catalog::genres::{self, DEFAULT_GENRE};
use bookscope::commands::{EnvCommand, FetchCommand};
use bookscope::config::{Config, OutputFormat};
use bookscope::format::export::export_file_name;
use bookscope::market::Region;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bookscope",
    version,
    about = "Regional book price explorer",
    long_about = "Fetches a genre's books from a live catalog, a Gemini model, or a curated \
                  fallback list, prices them for India, the UK or the USA, and reports \
                  value picks and a short price projection."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json, markdown, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Network timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, price and analyze books for a genre
    #[command(alias = "f")]
    Fetch {
        /// Genre name (see `bookscope genres`)
        genre: Option<String>,

        /// Region: in, uk or usa. Unknown values fall back to in.
        #[arg(short, long)]
        region: Option<String>,

        /// Ask the Gemini model for prices instead of scraping
        #[arg(long)]
        ai: bool,

        /// Skip live sources and use the curated catalog only
        #[arg(long, conflicts_with = "ai")]
        offline: bool,

        /// Skip best-value analysis
        #[arg(long)]
        no_value: bool,

        /// Directory to write a CSV export into
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,

        /// Seed for reproducible ratings, prices and projections
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List supported regions
    Regions,

    /// List catalog genres
    Genres,

    /// Check credentials and configuration
    Env,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    match cli.command {
        Commands::Fetch { genre, region, ai, offline, no_value, export, seed } => {
            if let Some(genre) = genre {
                config.genre = genre;
            }
            if let Some(region) = region {
                config.region = Region::resolve(&region);
            }
            if ai {
                config.use_ai = true;
            }
            if offline {
                config.use_ai = false;
                config.use_live_data = false;
            }
            if no_value {
                config.value_analysis = false;
            }
            if seed.is_some() {
                config.seed = seed;
            }

            let export_path =
                export.as_ref().map(|dir| dir.join(export_file_name(config.region, &config.genre)));

            let mut cmd = FetchCommand::new(config);
            if let Some(dir) = export {
                cmd = cmd.with_export_dir(dir);
            }

            let output = cmd.execute().await?;
            println!("{}", output);

            if let Some(path) = export_path {
                eprintln!("Exported to {}", path.display());
            }
        }

        Commands::Regions => {
            println!("Supported regions:\n");
            println!("{:<6} {:<22} {:<10} {:<10} {}", "Code", "Node", "Currency", "Rate", "Markets");
            println!("{:-<6} {:-<22} {:-<10} {:-<10} {:-<24}", "", "", "", "", "");

            for region in Region::all() {
                let (primary, secondary) = region.marketplaces();
                println!(
                    "{:<6} {:<22} {:<10} {:<10} {} / {}",
                    region.code().to_lowercase(),
                    region.name(),
                    region.currency(),
                    region.multiplier(),
                    primary.label(),
                    secondary.label()
                );
            }
        }

        Commands::Genres => {
            println!("Catalog genres:\n");
            for name in genres::names() {
                let marker = if name == DEFAULT_GENRE { " (default)" } else { "" };
                println!("  {}{}", name, marker);
            }
        }

        Commands::Env => {
            println!("{}", EnvCommand::new(config).execute());
        }
    }

    Ok(())
}
