mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use timely_core::config::TimelyConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timely")]
#[command(about = "Preview Timely event homepages and author homepage modules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an event's homepage as guests see it
    Homepage {
        event_id: String,

        /// Print the resolved document as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },
    /// Show how a video module url will be displayed
    Video { url: String },
    /// Create a multiple choice module for an event
    Module { event_id: String },
    /// Show configuration paths and backend settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Homepage { event_id, json } => {
            let config = TimelyConfig::load()?;
            commands::homepage::run(&config, &event_id, json).await
        }
        Commands::Video { url } => commands::video::run(&url),
        Commands::Module { event_id } => {
            let config = TimelyConfig::load()?;
            commands::module::run(&config, &event_id).await
        }
        Commands::Config => commands::config::run(),
    }
}
