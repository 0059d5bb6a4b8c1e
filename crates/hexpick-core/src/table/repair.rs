use tracing::info;

use super::{ColorRow, ColorTable, Column, RepairPrompt};

/// Columns the repair path guarantees, in the order they are appended.
const REPAIRED_COLUMNS: [Column; 5] = [
    Column::FactoryNumber,
    Column::ColorName,
    Column::ColorGroup,
    Column::Omit,
    Column::HexValue,
];

/// Normalize a file that lacks required columns.
///
/// Missing columns are appended. Per row, a blank factory number becomes
/// the 1-based row number and a blank color name becomes the row's first
/// raw value, or `Color {n}` when that is blank too.
pub fn repair(prompt: &RepairPrompt) -> ColorTable {
    let base = ColorTable::from_records(&prompt.headers, &prompt.records);

    let mut columns: Vec<Column> = base
        .columns()
        .iter()
        .filter(|c| **c != Column::HexValue || prompt.headers.iter().any(|h| h == c.header()))
        .cloned()
        .collect();
    for column in REPAIRED_COLUMNS {
        if !columns.contains(&column) {
            columns.push(column);
        }
    }

    let rows: Vec<ColorRow> = base
        .rows()
        .iter()
        .zip(&prompt.records)
        .enumerate()
        .map(|(i, (row, raw))| {
            let n = i + 1;
            let mut row = row.clone();
            if row.factory_number().is_empty() {
                row.set(&Column::FactoryNumber, n.to_string());
            }
            if row.color_name().is_empty() {
                let first = raw.first().map(String::as_str).unwrap_or("");
                let name = if first.is_empty() {
                    format!("Color {n}")
                } else {
                    first.to_string()
                };
                row.set(&Column::ColorName, name);
            }
            row
        })
        .collect();

    info!(rows = rows.len(), "repaired CSV");
    ColorTable::from_parts(columns, rows)
}
