use crate::error::{IngestError, Result};
use crate::experian::{extract_report, ExtractOptions};
use crate::sanitize::sanitize_report;
use crate::types::NormalizedReport;
use crate::xml_tree::parse_xml_tree;

/// Parses, extracts and sanitizes one bureau report.
pub fn parse_report(xml: &str, file_name: &str, options: &ExtractOptions) -> Result<NormalizedReport> {
    let document = parse_xml_tree(xml).map_err(IngestError::Parse)?;
    sanitize_report(extract_report(&document, file_name, options))
}

/// Async entry point: the XML parse runs on the blocking pool, extraction runs inline.
pub async fn ingest_report(
    xml: String,
    file_name: String,
    options: ExtractOptions,
) -> Result<NormalizedReport> {
    let document = tokio::task::spawn_blocking(move || parse_xml_tree(&xml))
        .await
        .map_err(|e| IngestError::Parse(format!("XML parse task failed: {e}")))?
        .map_err(IngestError::Parse)?;

    sanitize_report(extract_report(&document, &file_name, &options))
}
