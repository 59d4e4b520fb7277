//! `leadgen` — district lead-generation pipeline CLI.
//!
//! Three subcommands mirror the pipeline stages:
//!
//! - `discover` scrapes the public district indexes, fuses them, and
//!   resolves website domains.
//! - `enrich` attaches named contacts to districts (demo or live Clay).
//! - `push` routes enriched leads into outreach campaigns (demo or live
//!   Instantly).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "leadgen", about = "Texas school district lead-generation pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape district sources and resolve website domains
    Discover {
        /// Fetch per-district detail pages (enrollment, website, city; slow)
        #[arg(long)]
        details: bool,

        /// Directory for the CSV/JSON outputs
        #[arg(long, default_value = "./output")]
        output_dir: PathBuf,
    },

    /// Attach superintendent/safety contacts to districts
    Enrich {
        /// Use the built-in demo directory instead of live API calls
        #[arg(long)]
        demo: bool,

        /// Input district CSV (required for live mode)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output lead CSV
        #[arg(long, default_value = "enriched_leads.csv")]
        output: PathBuf,

        /// Also write the nested JSON shape
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also upsert into Postgres (connection URL)
        #[arg(long)]
        database: Option<String>,
    },

    /// Push enriched leads into outreach campaigns
    Push {
        /// Record pushes locally instead of calling the campaign API
        #[arg(long)]
        demo: bool,

        /// Input enriched lead CSV (required for live mode)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Route every persona to this campaign id instead of the default map
        #[arg(long)]
        campaign: Option<String>,

        /// Where to write the push log
        #[arg(long, default_value = "push_log.json")]
        log: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Discover {
            details,
            output_dir,
        } => commands::discover::run(details, &output_dir).await,
        Commands::Enrich {
            demo,
            input,
            output,
            json,
            database,
        } => commands::enrich::run(&config, demo, input, &output, json, database).await,
        Commands::Push {
            demo,
            input,
            campaign,
            log,
        } => commands::push::run(&config, demo, input, campaign, &log).await,
    }
}
