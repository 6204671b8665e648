use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_lookup_barcode::OutputFormat;
use folio_lookup_core::{LookupConfig, Symbology};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "folio-lookup")]
#[command(about = "Keyword lookup over a published spreadsheet with folio barcodes", long_about = None)]
struct Cli {
    /// Barcode symbology, overrides FOLIO_LOOKUP_SYMBOLOGY
    #[arg(short, long, global = true)]
    symbology: Option<Symbology>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server with the lookup page
    Serve {
        #[arg(short, long, default_value = "8501")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Search one location and print the outcome as JSON
    Search {
        /// Distribution center name; the first configured one when omitted
        #[arg(short, long)]
        location: Option<String>,
        /// Keywords, all of which must appear in the description
        query: Vec<String>,
    },
    /// Write a barcode image for a folio
    Barcode {
        folio: String,
        #[arg(short, long, default_value = "png")]
        format: OutputFormat,
        /// Output file, `<folio>.<format>` when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List configured locations
    Locations,
    /// Load a location's sheet and print a summary
    Fetch {
        #[arg(short, long)]
        location: Option<String>,
        /// Drop the cached table first
        #[arg(long)]
        refresh: bool,
    },
}

fn load_config(symbology: Option<Symbology>) -> Result<LookupConfig> {
    let config = LookupConfig::from_env()?;
    Ok(match symbology {
        Some(symbology) => config.with_symbology(symbology),
        None => config,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.symbology)?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(config, port, host).await,
        Commands::Search { location, query } => {
            commands::lookup::run_search(config, location, &query.join(" ")).await
        },
        Commands::Barcode { folio, format, output } => {
            commands::barcode::run(config, &folio, format, output)
        },
        Commands::Locations => commands::lookup::run_locations(&config),
        Commands::Fetch { location, refresh } => {
            commands::lookup::run_fetch(config, location, refresh).await
        },
    }
}
