//! CSV export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;
use crate::database::PasswordRecord;
use crate::error::Result;
use crate::CSV_HEADER;
use super::ExportOutcome;

/// Write records as CSV.
///
/// Nothing is written for an empty record set. A failed write leaves
/// whatever was already written in place.
pub fn export_csv<W: Write>(records: &[PasswordRecord], writer: W) -> Result<ExportOutcome> {
    if records.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()?;

    info!(count = records.len(), "exported passwords");
    Ok(ExportOutcome::Exported { count: records.len() })
}

/// Write records to a CSV file, creating or truncating it.
///
/// No file is created when there is nothing to export.
pub fn export_csv_file(records: &[PasswordRecord], path: &Path) -> Result<ExportOutcome> {
    if records.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }
    export_csv(records, File::create(path)?)
}

/// One CSV line for a record (without line terminator)
pub fn format_record(record: &PasswordRecord) -> String {
    format!(
        "{},{:?},{},{},{}",
        quote(&record.value),
        record.entropy,
        quote(&record.symbols),
        quote(record.folder_name.as_deref().unwrap_or("")),
        record.created_at,
    )
}

/// Suggested file name when exporting a folder, or ungrouped passwords
pub fn default_export_file_name(folder_name: Option<&str>) -> String {
    match folder_name {
        Some(name) => format!("passwords_{}.csv", name.replace(' ', "_").to_lowercase()),
        None => "passwords_unfiled.csv".to_string(),
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
