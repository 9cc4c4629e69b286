//! Chunk command - turn a document into a record file

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::indexer::{write_records, EmptyChunkPolicy};
use crate::core::services::Services;
use crate::core::types::{ChunkStats, Record};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk command
#[derive(Args, Debug, Default)]
pub struct ChunkArgs {
    /// Document slug or path (defaults to `source.document` from config)
    pub document: Option<String>,

    /// Chunk every markdown page in the docs directory into one file
    #[arg(long, short = 'a', conflicts_with = "document")]
    pub all: bool,

    /// Output file (defaults to `output.path` from config)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Words kept in each record key
    #[arg(long, short = 'k')]
    pub key_words: Option<usize>,

    /// Drop empty and whitespace-only chunks
    #[arg(long)]
    pub skip_empty: bool,

    /// Write minified JSON instead of indented
    #[arg(long)]
    pub minify: bool,
}

/// Chunking result response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub documents: Vec<String>,
    pub output: String,
    pub chunks_created: usize,
    pub records_created: usize,
    pub chunks_skipped: usize,
    pub duration_secs: f64,
}

impl ChunkResponse {
    pub fn new(stats: &ChunkStats, output: &std::path::Path) -> Self {
        Self {
            documents: stats.documents.clone(),
            output: output.display().to_string(),
            chunks_created: stats.chunks_created,
            records_created: stats.records_created,
            chunks_skipped: stats.chunks_skipped,
            duration_secs: stats.duration_ms as f64 / 1000.0,
        }
    }

    pub fn print_human(&self) {
        println!(
            "{} {} ({} chunks, {} records) in {}",
            colors::success("Chunked"),
            colors::document(&self.documents.join(", ")),
            colors::number(&self.chunks_created.to_string()),
            colors::number(&self.records_created.to_string()),
            colors::number(&format_duration(self.duration_secs))
        );
        if self.chunks_skipped > 0 {
            println!(
                "Skipped {} blank chunks",
                colors::number(&self.chunks_skipped.to_string())
            );
        }
        println!("Saved: {}", colors::file_path(&self.output));
    }
}

/// Chunk the requested documents and write the output file.
///
/// Shared by the `chunk` and `run` commands.
pub fn chunk_to_file(
    args: ChunkArgs,
    services: &Arc<Services>,
) -> Result<(Vec<Record>, ChunkStats, PathBuf), Box<dyn std::error::Error>> {
    if args.key_words == Some(0) {
        return Err("Key words must be at least 1.".into());
    }

    let empty_chunks = args.skip_empty.then_some(EmptyChunkPolicy::Skip);
    let pipeline = services.create_pipeline(args.key_words, empty_chunks);

    let (records, stats) = if args.all {
        pipeline.chunk_all(services.source.as_ref())?
    } else {
        let document = args
            .document
            .or_else(|| services.config.source.document.clone())
            .ok_or(
                "No document given. Pass a slug or path, use --all, \
                 or set source.document in the config file.",
            )?;
        pipeline.chunk_document(services.source.as_ref(), &document)?
    };

    let output = args
        .output
        .unwrap_or_else(|| services.config.output.path.clone());
    let pretty = services.config.output.pretty && !args.minify;
    write_records(&records, &output, pretty)?;

    Ok((records, stats, output))
}

/// Execute the chunk command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_records, stats, output) = chunk_to_file(args, services)?;
    let response = ChunkResponse::new(&stats, &output);

    match format {
        OutputFormat::Human => response.print_human(),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
