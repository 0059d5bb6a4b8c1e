use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::library::ImageRecord;

/// Decode an in-memory image file into an RGBA record named `name`.
pub fn decode_image(name: impl Into<String>, bytes: &[u8]) -> Result<ImageRecord> {
    let name = name.into();
    let pixels = image::load_from_memory(bytes)?.to_rgba8();
    debug!(%name, width = pixels.width(), height = pixels.height(), "decoded image");
    Ok(ImageRecord::new(name, pixels))
}

/// Load an image file, naming the record after the file.
pub fn load_image(path: &Path) -> Result<ImageRecord> {
    let pixels = image::open(path)?.to_rgba8();
    debug!(path = %path.display(), width = pixels.width(), height = pixels.height(), "loaded image");
    Ok(ImageRecord::new(ImageRecord::name_from_path(path), pixels))
}
