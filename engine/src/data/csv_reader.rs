use crate::error::PipelineError;
use csv::ReaderBuilder;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// The uploaded file as read: header row plus string cells, untouched by
/// normalization. Short records are padded with empty cells so every row has
/// one cell per header.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parses comma-delimited, headered CSV bytes into a `RawTable`.
///
/// Encoding fallback: the first pass reads the bytes as-is; if that fails
/// (invalid UTF-8) or the header row carries a UTF-8 byte-order mark, the
/// same bytes are retried with the three-byte signature stripped.
pub fn read_table(bytes: &[u8]) -> Result<RawTable, PipelineError> {
    match parse(bytes) {
        Ok(table) if !has_bom(bytes) => Ok(table),
        _ => parse(strip_bom(bytes)),
    }
}

/// File-backed convenience wrapper around [`read_table`].
pub fn load_table_from_path(path: impl AsRef<Path>) -> Result<RawTable, PipelineError> {
    let bytes = std::fs::read(path)?;
    read_table(&bytes)
}

fn has_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(UTF8_BOM)
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    if has_bom(bytes) {
        &bytes[UTF8_BOM.len()..]
    } else {
        bytes
    }
}

fn parse(bytes: &[u8]) -> Result<RawTable, PipelineError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        // Pad short records so column lookups stay index-safe downstream.
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "parsed uploaded CSV"
    );

    Ok(RawTable { headers, rows })
}
