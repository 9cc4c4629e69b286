//! Config command - show current configuration

use crate::cli::output::{print_header, redact};
use crate::cli::OutputFormat;
use crate::core::indexer::EmptyChunkPolicy;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    pub docs_dir: String,
    pub document: Option<String>,
    pub key_words: usize,
    pub empty_chunks: EmptyChunkPolicy,
    pub output_path: String,
    pub output_pretty: bool,
    pub index: IndexSummary,
}

#[derive(Debug, Serialize)]
pub struct IndexSummary {
    pub endpoint: Option<String>,
    pub application_id: Option<String>,
    pub api_key: Option<String>,
    pub index_name: Option<String>,
    pub timeout_sec: u64,
    pub max_retries: usize,
}

impl ConfigResponse {
    pub fn from_services(services: &Services, all: bool) -> Self {
        let config = &services.config;
        let config_file = all.then(|| {
            crate::core::xdg::XdgDirs::new()
                .config_file()
                .display()
                .to_string()
        });

        Self {
            config_file,
            docs_dir: config.source.docs_dir.display().to_string(),
            document: config.source.document.clone(),
            key_words: config.chunking.key_words,
            empty_chunks: config.chunking.empty_chunks,
            output_path: config.output.path.display().to_string(),
            output_pretty: config.output.pretty,
            index: IndexSummary {
                endpoint: config.index.endpoint.clone(),
                application_id: config.index.application_id.clone(),
                api_key: config.index.api_key.as_deref().map(redact),
                index_name: config.index.index_name.clone(),
                timeout_sec: config.index.timeout_sec,
                max_retries: config.index.max_retries,
            },
        }
    }
}

fn show(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<unset>")
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::from_services(services, args.all);

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            if let Some(file) = &response.config_file {
                println!("  config_file: {file}");
            }
            println!("  source:");
            println!("    docs_dir: {}", response.docs_dir);
            println!("    document: {}", show(&response.document));
            println!("  chunking:");
            println!("    key_words: {}", response.key_words);
            println!("    empty_chunks: {:?}", response.empty_chunks);
            println!("  output:");
            println!("    path: {}", response.output_path);
            println!("    pretty: {}", response.output_pretty);
            println!("  index:");
            println!("    endpoint: {}", show(&response.index.endpoint));
            println!("    application_id: {}", show(&response.index.application_id));
            println!("    api_key: {}", show(&response.index.api_key));
            println!("    index_name: {}", show(&response.index.index_name));
            println!("    timeout_sec: {}", response.index.timeout_sec);
            println!("    max_retries: {}", response.index.max_retries);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
