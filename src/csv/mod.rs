//! CSV import and export
//!
//! File format:
//!
//! ```text
//! Value,Entropy,Symbols,FolderName,CreatedAt
//! "<value>",<entropy>,"<symbols>","<folder>",<created_at>
//! ```
//!
//! The exporter doubles embedded quotes. The importer splits on every comma
//! and only strips one pair of surrounding quotes, so values containing a
//! comma or a quote do not come back unchanged.

mod import;
mod export;

pub use import::{import_csv, import_csv_file};
pub use export::{default_export_file_name, export_csv, export_csv_file, format_record};

use thiserror::Error;
use crate::error::VaultError;

/// Reasons an import stops before processing rows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// No header line
    #[error("File is empty or has an invalid header.")]
    EmptyFile,

    /// Header does not mention a Value column at all
    #[error("Invalid CSV header format (expected 'Value').")]
    UnrecognizedHeader,

    /// No header field equals `Value`
    #[error("Required field 'Value' not found in CSV header.")]
    MissingValueColumn,

    /// The source could not be opened
    #[error("Could not open file for reading: {0}")]
    Open(String),

    /// Reading the source failed part way through
    #[error("Error reading file: {0}")]
    Read(String),
}

impl ImportError {
    /// Header problems end the import without a summary line
    pub fn is_header_error(&self) -> bool {
        matches!(self, ImportError::EmptyFile | ImportError::UnrecognizedHeader | ImportError::MissingValueColumn)
    }
}

/// A rejected data row
#[derive(Error, Debug)]
pub enum RowError {
    /// Row is shorter than the Value column index
    #[error("Not enough columns for field 'Value' in line: {line}")]
    MissingColumns { line: String },

    /// Value field is blank
    #[error("Empty password value in line: {line}")]
    BlankValue { line: String },

    /// The store refused the record
    #[error("Failed to parse line '{line}': {source}")]
    Store {
        line: String,
        #[source]
        source: VaultError,
    },
}

/// Overall result of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    /// Every row was imported
    Completed,
    /// Some rows were imported, some failed
    CompletedWithErrors,
    /// Nothing was imported and there were errors
    Failed,
    /// No data rows
    NothingImported,
}

impl ImportStatus {
    /// Summary line placed first in the import messages
    pub fn summary(&self) -> Option<&'static str> {
        match self {
            ImportStatus::Completed => Some("Import completed successfully."),
            ImportStatus::CompletedWithErrors => Some("Import completed with errors."),
            ImportStatus::Failed => Some("Import failed."),
            ImportStatus::NothingImported => None,
        }
    }
}

/// Counts and messages produced by an import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    /// Rows stored
    pub success_count: usize,
    /// Rows or stream failures
    pub error_count: usize,
    /// Summary line followed by one message per error
    pub messages: Vec<String>,
    /// Folder the rows were imported into (from the file name)
    pub target_folder_name: Option<String>,
    /// Set when the import stopped early
    pub aborted: Option<ImportError>,
}

impl ImportOutcome {
    pub(crate) fn new(target_folder_name: Option<String>) -> Self {
        Self {
            success_count: 0,
            error_count: 0,
            messages: Vec::new(),
            target_folder_name,
            aborted: None,
        }
    }

    /// Classify the outcome
    pub fn status(&self) -> ImportStatus {
        match (self.success_count > 0, self.error_count > 0) {
            (true, false) => ImportStatus::Completed,
            (true, true) => ImportStatus::CompletedWithErrors,
            (false, true) => ImportStatus::Failed,
            (false, false) => ImportStatus::NothingImported,
        }
    }

    /// Check if the import stopped before reaching the end of the file
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }
}

/// Result of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Records were written
    Exported { count: usize },
    /// Record set was empty, nothing was written
    NothingToExport,
}

impl ExportOutcome {
    /// Human-readable description
    pub fn message(&self) -> &'static str {
        match self {
            ExportOutcome::Exported { .. } => "Passwords exported successfully!",
            ExportOutcome::NothingToExport => "No passwords to export.",
        }
    }
}

/// Split a line on commas, trimming each field and removing one pair
/// of surrounding quotes
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(|field| unquote(field.trim())).collect()
}

fn unquote(field: &str) -> &str {
    field.strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}
