//! Upload command - push a record file to the search index

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::indexer::read_records;
use crate::core::services::Services;
use crate::core::sink::IndexSink;
use crate::core::types::{Record, UploadReport};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the upload command
#[derive(Args, Debug, Default)]
pub struct UploadArgs {
    /// Record file to upload (defaults to `output.path` from config)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

/// Send `records` to `sink` as one batch, with the configured retries
pub async fn upload_records(
    records: &[Record],
    sink: &dyn IndexSink,
    services: &Services,
) -> Result<UploadReport, Box<dyn std::error::Error>> {
    let report = services.uploader(sink).upload(records).await?;
    Ok(report)
}

/// Print an upload report
pub fn print_report(report: &UploadReport, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!(
                "{} {} records to {}",
                colors::success("Uploaded"),
                colors::number(&report.records_sent.to_string()),
                colors::index_name(&report.index_name)
            );
            if !report.object_ids.is_empty() {
                println!(
                    "Records added: {}",
                    colors::dim(&report.object_ids.join(", "))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

/// Execute the upload command
pub async fn execute(
    args: UploadArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = args
        .input
        .unwrap_or_else(|| services.config.output.path.clone());

    let sink = services.sink()?;
    let records = read_records(&input)?;
    tracing::info!("Loaded {} records from {:?}", records.len(), input);

    let report = upload_records(&records, sink.as_ref(), services).await?;
    print_report(&report, format)
}
