use std::path::PathBuf;

use hexpick_core::library::{BatchId, ImageRecord};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode every path of a batch, reporting each one separately.
    DecodeImages { batch: BatchId, paths: Vec<PathBuf> },

    /// Read a CSV file as text.
    ReadCsv { path: PathBuf },

    /// Write exported bytes to disk.
    WriteFile { path: PathBuf, bytes: Vec<u8> },
}

/// Results sent from worker (and dialog) threads back to UI thread.
pub enum WorkerResult {
    /// The user chose image files in the open dialog.
    ImagesPicked { paths: Vec<PathBuf> },

    ImageDecoded {
        batch: BatchId,
        index: usize,
        result: Result<ImageRecord, String>,
    },

    CsvRead { file_name: String, text: String },

    FileWritten { path: PathBuf },

    Error { message: String },
}
