use std::io;
use std::path::Path;

use super::{ColorTable, Column};
use crate::consts::{DEFAULT_EXPORT_BASE, EXPORT_SUFFIX};
use crate::error::{PickerError, Result};

/// Serialize the table as CSV: one header line in column order, then one
/// line per row. Values containing a comma, quote or line break are quoted
/// with inner quotes doubled.
pub fn serialize(table: &ColorTable) -> Result<String> {
    let mut columns = table.columns().to_vec();
    if !columns.contains(&Column::HexValue) {
        columns.push(Column::HexValue);
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.header()))?;
    for row in table.rows() {
        writer.write_record(columns.iter().map(|c| row.get(c)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PickerError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PickerError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Display name of an imported file: its name without the final extension.
pub fn base_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

/// `{base}_with_hex.csv`, with `colors` standing in for a missing base.
pub fn export_file_name(base: Option<&str>) -> String {
    let base = base.filter(|b| !b.is_empty()).unwrap_or(DEFAULT_EXPORT_BASE);
    format!("{base}{EXPORT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_extension() {
        assert_eq!(base_name("paints.csv"), "paints");
        assert_eq!(base_name("Paints.CSV"), "Paints");
        assert_eq!(base_name("catalog.2024.csv"), "catalog.2024");
        assert_eq!(base_name("plain"), "plain");
    }

    #[test]
    fn export_name_falls_back_to_colors() {
        assert_eq!(export_file_name(None), "colors_with_hex.csv");
        assert_eq!(export_file_name(Some("")), "colors_with_hex.csv");
        assert_eq!(export_file_name(Some("paints")), "paints_with_hex.csv");
    }
}
