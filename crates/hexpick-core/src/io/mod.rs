pub mod image_io;

use std::path::Path;

use crate::error::Result;

pub use image_io::{decode_image, load_image};

/// Read a text file, returning its file name alongside the contents.
pub fn read_text(path: &Path) -> Result<(String, String)> {
    let text = std::fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, text))
}
