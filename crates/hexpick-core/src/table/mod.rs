//! The color catalog: typed rows, dynamic columns, import/repair/export.

pub mod export;
pub mod parse;
pub mod repair;

use std::collections::HashMap;
use std::fmt;

pub use export::{base_name, export_file_name, serialize};
pub use parse::{parse, parse_strict, ParseOutcome, RepairPrompt};
pub use repair::repair;

use crate::consts::OMIT_MARKER;
use crate::error::{PickerError, Result};
use crate::sampler::Rgb;

pub const FACTORY_NUMBER: &str = "FACTORY NUMBER";
pub const COLOR_NAME: &str = "COLOR NAME";
pub const COLOR_GROUP: &str = "COLOR GROUP";
pub const HEX_VALUE: &str = "HEX VALUE";
pub const OMIT: &str = "OMIT";

/// Columns a file must carry to load without repair.
pub const REQUIRED_COLUMNS: [&str; 3] = [FACTORY_NUMBER, COLOR_NAME, COLOR_GROUP];

/// A table column. Well-known headers get their own variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    FactoryNumber,
    ColorName,
    ColorGroup,
    HexValue,
    Omit,
    Other(String),
}

impl Column {
    pub fn from_header(header: &str) -> Self {
        match header {
            FACTORY_NUMBER => Column::FactoryNumber,
            COLOR_NAME => Column::ColorName,
            COLOR_GROUP => Column::ColorGroup,
            HEX_VALUE => Column::HexValue,
            OMIT => Column::Omit,
            other => Column::Other(other.to_string()),
        }
    }

    pub fn header(&self) -> &str {
        match self {
            Column::FactoryNumber => FACTORY_NUMBER,
            Column::ColorName => COLOR_NAME,
            Column::ColorGroup => COLOR_GROUP,
            Column::HexValue => HEX_VALUE,
            Column::Omit => OMIT,
            Column::Other(name) => name,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One catalog entry.
///
/// Well-known fields are typed; any other imported column lives in the
/// extension map. Only the hex value can change after import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorRow {
    factory_number: String,
    color_name: String,
    color_group: String,
    hex_value: String,
    omit: String,
    extra: HashMap<String, String>,
}

impl ColorRow {
    pub fn factory_number(&self) -> &str {
        &self.factory_number
    }

    pub fn color_name(&self) -> &str {
        &self.color_name
    }

    pub fn color_group(&self) -> &str {
        &self.color_group
    }

    /// `""` or `#RRGGBB`.
    pub fn hex_value(&self) -> &str {
        &self.hex_value
    }

    pub fn omit(&self) -> &str {
        &self.omit
    }

    /// Value of an imported column with no typed field.
    pub fn extra(&self, header: &str) -> Option<&str> {
        self.extra.get(header).map(String::as_str)
    }

    pub fn get(&self, column: &Column) -> &str {
        match column {
            Column::FactoryNumber => &self.factory_number,
            Column::ColorName => &self.color_name,
            Column::ColorGroup => &self.color_group,
            Column::HexValue => &self.hex_value,
            Column::Omit => &self.omit,
            Column::Other(name) => self.extra.get(name).map(String::as_str).unwrap_or(""),
        }
    }

    pub(crate) fn set(&mut self, column: &Column, value: String) {
        match column {
            Column::FactoryNumber => self.factory_number = value,
            Column::ColorName => self.color_name = value,
            Column::ColorGroup => self.color_group = value,
            Column::HexValue => self.hex_value = value,
            Column::Omit => self.omit = value,
            Column::Other(name) => {
                self.extra.insert(name.clone(), value);
            }
        }
    }

    pub fn has_color(&self) -> bool {
        !self.hex_value.is_empty()
    }

    pub fn is_omitted(&self) -> bool {
        self.omit == OMIT_MARKER
    }

    /// Parsed hex value, if it holds a well-formed color.
    pub fn color(&self) -> Option<Rgb> {
        Rgb::from_hex(&self.hex_value)
    }
}

/// Ordered rows sharing one ordered column set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    columns: Vec<Column>,
    rows: Vec<ColorRow>,
}

impl ColorTable {
    /// Zip each record positionally onto `headers`. Missing trailing values
    /// become `""`, extra values are dropped. A repeated header keeps its
    /// first position and its last value. `HEX VALUE` is appended when the
    /// headers lack it.
    pub fn from_records<H, R, V>(headers: &[H], records: &[R]) -> Self
    where
        H: AsRef<str>,
        R: AsRef<[V]>,
        V: AsRef<str>,
    {
        let mut columns: Vec<Column> = Vec::with_capacity(headers.len() + 1);
        for header in headers {
            let column = Column::from_header(header.as_ref());
            if !columns.contains(&column) {
                columns.push(column);
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                let values = record.as_ref();
                let mut row = ColorRow::default();
                for (i, header) in headers.iter().enumerate() {
                    let value = values.get(i).map(|v| v.as_ref()).unwrap_or("");
                    row.set(&Column::from_header(header.as_ref()), value.to_string());
                }
                row
            })
            .collect();

        let mut table = Self { columns, rows };
        table.ensure_column(Column::HexValue);
        table
    }

    pub(crate) fn from_parts(columns: Vec<Column>, rows: Vec<ColorRow>) -> Self {
        let mut table = Self { columns, rows };
        table.ensure_column(Column::HexValue);
        table
    }

    fn ensure_column(&mut self, column: Column) {
        if !self.columns.contains(&column) {
            self.columns.push(column);
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, column: &Column) -> bool {
        self.columns.contains(column)
    }

    pub fn rows(&self) -> &[ColorRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ColorRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows with a sampled color.
    pub fn picked_count(&self) -> usize {
        self.rows.iter().filter(|r| r.has_color()).count()
    }

    /// The row's color name, or `Row {index + 1}` when it has none.
    pub fn display_name(&self, index: usize) -> String {
        match self.rows.get(index) {
            Some(row) if !row.color_name.is_empty() => row.color_name.clone(),
            _ => format!("Row {}", index + 1),
        }
    }

    /// Store `color` as the hex value of row `index`.
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        let total = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(PickerError::RowOutOfRange { index, total })?;
        row.hex_value = color.to_hex();
        Ok(())
    }

    /// Reset every hex value to `""`.
    pub fn clear_colors(&mut self) {
        for row in &mut self.rows {
            row.hex_value.clear();
        }
    }
}
