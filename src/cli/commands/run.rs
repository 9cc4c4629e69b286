//! Run command - chunk and upload in one pass

use crate::cli::commands::chunk::{chunk_to_file, ChunkArgs, ChunkResponse};
use crate::cli::commands::upload::{print_report, upload_records};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::UploadReport;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub chunk: ChunkArgs,
}

#[derive(Debug, Serialize)]
struct RunResponse {
    chunk: ChunkResponse,
    upload: UploadReport,
}

/// Execute the run command
///
/// The output file is written before the upload starts, so a failed
/// upload can be retried later with `upload`.
pub async fn execute(
    args: RunArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fail on missing credentials before doing any work
    let sink = services.sink()?;

    let (records, stats, output) = chunk_to_file(args.chunk, services)?;
    let chunk = ChunkResponse::new(&stats, &output);

    let upload = upload_records(&records, sink.as_ref(), services).await?;

    match format {
        OutputFormat::Human => {
            chunk.print_human();
            print_report(&upload, format)?;
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&RunResponse { chunk, upload })?
            );
        }
    }

    Ok(())
}
