use thiserror::Error;

use crate::status::Severity;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Please load images first")]
    NoImagesLoaded,

    #[error("Invalid CSV file")]
    InvalidFormat,

    #[error("Missing required columns: {}", missing.join(", "))]
    MissingRequiredColumns { missing: Vec<String> },

    #[error("No data to export")]
    NoDataToExport,

    #[error("Row {index} out of range (total: {total})")]
    RowOutOfRange { index: usize, total: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PickerError {
    /// Severity the error is reported with on the status line.
    pub fn severity(&self) -> Severity {
        match self {
            PickerError::MissingRequiredColumns { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
