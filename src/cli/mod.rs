//! CLI adapter for mdindex
//!
//! Command-line front end over `core/`. The two halves of a run,
//! chunking and uploading, are separate commands so the output file
//! can be inspected before it is pushed; `run` does both.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// mdindex - Markdown chunker for hosted search indexes
///
/// Splits documentation pages into sentence-sized records keyed by their
/// leading words, writes them as JSON, and bulk-upserts them to a search
/// index.
#[derive(Parser, Debug)]
#[command(name = "mdindex")]
#[command(version)]
#[command(about = "Chunk markdown docs into search records", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chunk a document into records and write the output file
    Chunk(commands::ChunkArgs),

    /// Bulk-upsert a previously written output file
    Upload(commands::UploadArgs),

    /// Chunk a document and upload the records in one pass
    Run(commands::RunArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  mdindex completions bash > ~/.local/share/bash-completion/completions/mdindex
    ///   zsh:   mdindex completions zsh > ~/.zfunc/_mdindex
    ///   fish:  mdindex completions fish > ~/.config/fish/completions/mdindex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    let Cli {
        format, command, ..
    } = cli;

    let command = match command {
        // Doesn't need services
        Commands::Completions(args) => return commands::completions::execute(args),
        other => other,
    };

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config));
    dispatch(command, &services, format).await
}

/// Execute a command against prepared services
pub async fn dispatch(
    command: Commands,
    services: &std::sync::Arc<crate::core::services::Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Chunk(args) => commands::chunk::execute(args, services, format).await,
        Commands::Upload(args) => commands::upload::execute(args, services, format).await,
        Commands::Run(args) => commands::run::execute(args, services, format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, services, format).await,
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
