//! CSV import.
//!
//! Records are read with the `csv` crate so quoted values written by
//! [`super::serialize`] come back intact. Fields are trimmed. Only lines
//! with no content at all are skipped; a line of empty fields such as `,,`
//! is still a row.

use tracing::{debug, info};

use super::{ColorTable, REQUIRED_COLUMNS};
use crate::error::{PickerError, Result};

/// Raw header and data records of a file that lacks required columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepairPrompt {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
    /// Required columns absent from `headers`, in canonical order.
    pub missing: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    Loaded(ColorTable),
    NeedsRepair(RepairPrompt),
}

/// Parse CSV text into a table, or hand back a repair prompt when required
/// columns are missing.
///
/// Fails with [`PickerError::InvalidFormat`] on fewer than two non-blank
/// records.
pub fn parse(text: &str) -> Result<ParseOutcome> {
    let mut records = read_records(text)?;
    if records.len() < 2 {
        return Err(PickerError::InvalidFormat);
    }

    let headers = records.remove(0);
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        debug!(?missing, "required columns absent");
        return Ok(ParseOutcome::NeedsRepair(RepairPrompt {
            headers,
            records,
            missing,
        }));
    }

    let table = ColorTable::from_records(&headers, &records);
    info!(rows = table.len(), columns = table.columns().len(), "parsed CSV");
    Ok(ParseOutcome::Loaded(table))
}

/// Like [`parse`], but treats missing columns as an error.
pub fn parse_strict(text: &str) -> Result<ColorTable> {
    match parse(text)? {
        ParseOutcome::Loaded(table) => Ok(table),
        ParseOutcome::NeedsRepair(prompt) => Err(PickerError::MissingRequiredColumns {
            missing: prompt.missing,
        }),
    }
}

/// Required columns absent from `headers`.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h.as_ref() == **required))
        .map(|c| c.to_string())
        .collect()
}

fn read_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Whitespace-only lines come back as one empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}
