//! mdindex CLI - chunk markdown docs and push them to a search index
//!
//! # Examples
//!
//! ```bash
//! # Chunk one page into output.json
//! mdindex chunk wellness
//!
//! # Push output.json to the configured index
//! mdindex upload
//!
//! # Both in one go, for every page in the docs directory
//! mdindex run --all
//! ```

use clap::Parser;
use mdindex::cli::output::print_error;
use mdindex::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "mdindex=debug"
    } else {
        "mdindex=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
