//! CSV import

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};
use crate::database::PasswordRecord;
use crate::generator::symbols_from_value;
use crate::store::PasswordStore;
use crate::utils::{folder_name_from_file_name, now_millis};
use super::{split_fields, ImportError, ImportOutcome, RowError};

/// Byte order mark some spreadsheet tools put before the header
const BOM: char = '\u{feff}';

/// Column positions resolved from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    value: usize,
    entropy: Option<usize>,
    symbols: Option<usize>,
}

impl Columns {
    fn from_header(line: &str) -> Result<Self, ImportError> {
        let line = line.strip_prefix(BOM).unwrap_or(line);
        if !line.to_lowercase().contains("value") {
            return Err(ImportError::UnrecognizedHeader);
        }

        let fields = split_fields(line);
        let position = |name: &str| fields.iter().position(|f| f.eq_ignore_ascii_case(name));

        Ok(Self {
            value: position("Value").ok_or(ImportError::MissingValueColumn)?,
            entropy: position("Entropy"),
            symbols: position("Symbols"),
        })
    }
}

/// Import passwords from a CSV file.
///
/// Rows go into a folder named after the file (without its extension).
/// A file that cannot be opened yields a failed outcome, not an error.
pub fn import_csv_file<S>(path: &Path, store: &mut S) -> ImportOutcome
where
    S: PasswordStore + ?Sized,
{
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned());

    match File::open(path) {
        Ok(file) => import_csv(BufReader::new(file), file_name.as_deref(), store),
        Err(e) => {
            let mut outcome = ImportOutcome::new(file_name.as_deref().and_then(folder_name_from_file_name));
            abort(&mut outcome, ImportError::Open(e.to_string()));
            finish(outcome)
        }
    }
}

/// Import passwords from CSV text.
///
/// `file_name` is the display name of the source; it decides the target
/// folder. Each valid row is inserted into `store` in file order. Invalid
/// rows are counted and described in the outcome without stopping the
/// import.
pub fn import_csv<R, S>(reader: R, file_name: Option<&str>, store: &mut S) -> ImportOutcome
where
    R: BufRead,
    S: PasswordStore + ?Sized,
{
    let mut outcome = ImportOutcome::new(file_name.and_then(folder_name_from_file_name));

    if let Err(e) = import_lines(reader, store, &mut outcome) {
        if e.is_header_error() {
            warn!(error = %e, "rejected import file");
            outcome.error_count = 1;
            outcome.messages.push(e.to_string());
            outcome.aborted = Some(e);
            return outcome;
        }
        abort(&mut outcome, e);
    }

    finish(outcome)
}

fn import_lines<R, S>(mut reader: R, store: &mut S, outcome: &mut ImportOutcome) -> Result<(), ImportError>
where
    R: BufRead,
    S: PasswordStore + ?Sized,
{
    let header = read_line(&mut reader)?.ok_or(ImportError::EmptyFile)?;
    let columns = Columns::from_header(&header)?;

    while let Some(line) = read_line(&mut reader)? {
        match import_row(&line, columns, outcome.target_folder_name.as_deref(), store) {
            Ok(()) => outcome.success_count += 1,
            Err(e) => {
                warn!(error = %e, "skipped import row");
                outcome.error_count += 1;
                outcome.messages.push(e.to_string());
            }
        }
    }

    Ok(())
}

fn import_row<S>(line: &str, columns: Columns, folder_name: Option<&str>, store: &mut S) -> Result<(), RowError>
where
    S: PasswordStore + ?Sized,
{
    let fields = split_fields(line);
    if fields.len() <= columns.value {
        return Err(RowError::MissingColumns { line: line.to_string() });
    }

    let value = fields[columns.value];
    if value.trim().is_empty() {
        return Err(RowError::BlankValue { line: line.to_string() });
    }

    let entropy = columns.entropy
        .and_then(|i| fields.get(i))
        .and_then(|f| parse_entropy(f))
        .unwrap_or(0.0);

    let symbols = columns.symbols
        .and_then(|i| fields.get(i))
        .filter(|f| !f.trim().is_empty())
        .map(|f| f.to_string())
        .unwrap_or_else(|| symbols_from_value(value));

    let record = PasswordRecord::new(value, entropy, &symbols, folder_name, now_millis());
    store.insert(&record).map_err(|source| RowError::Store {
        line: line.to_string(),
        source,
    })?;
    Ok(())
}

/// Entropy text to bits; anything that is not a finite non-negative number is ignored
fn parse_entropy(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|e| e.is_finite() && *e >= 0.0)
}

/// Read one line without its terminator, `None` at end of input.
/// Invalid UTF-8 is replaced rather than treated as a read failure.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ImportError> {
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf)
        .map_err(|e| ImportError::Read(e.to_string()))?;
    if read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn abort(outcome: &mut ImportOutcome, error: ImportError) {
    warn!(error = %error, "import aborted");
    outcome.error_count += 1;
    outcome.messages.push(error.to_string());
    outcome.aborted = Some(error);
}

fn finish(mut outcome: ImportOutcome) -> ImportOutcome {
    if let Some(summary) = outcome.status().summary() {
        outcome.messages.insert(0, summary.to_string());
    }
    info!(
        imported = outcome.success_count,
        errors = outcome.error_count,
        folder = ?outcome.target_folder_name,
        "import finished"
    );
    outcome
}
