//! Ocelot CLI — entry point.
//!
//! Subcommands: run, resume, init.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ocelot_cli::commands;

/// Ocelot — age-verification handshake demo client.
#[derive(Parser, Debug)]
#[command(name = "ocelot", version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one full age-verification handshake against the server.
    Run(commands::run::RunArgs),
    /// Resume a handshake from a known request id, skipping creation.
    Resume(commands::resume::ResumeArgs),
    /// Write a default configuration file.
    Init(commands::init::InitArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    match &cli.command {
        Commands::Run(args) => commands::run::run(args).await,
        Commands::Resume(args) => commands::resume::run(args).await,
        Commands::Init(args) => commands::init::run(args),
    }
}
