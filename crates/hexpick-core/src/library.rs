use std::path::Path;

use image::RgbaImage;
use tracing::{debug, warn};

use crate::transform::Size;

/// A decoded reference image. Immutable once built.
#[derive(Clone, Debug)]
pub struct ImageRecord {
    pub name: String,
    pub pixels: RgbaImage,
}

impl ImageRecord {
    pub fn new(name: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Size {
        Size::from(self.pixels.dimensions())
    }

    /// Name for an image read from `path`: its file name, or the full path
    /// when it has none.
    pub fn name_from_path(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

/// Identifies one batch of decodes. Results from an older batch are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BatchId(pub u64);

/// Decode results collected until every file of the batch has reported.
#[derive(Debug)]
struct PendingBatch {
    id: BatchId,
    slots: Vec<Option<std::result::Result<ImageRecord, String>>>,
    completed: usize,
}

/// How a finished batch went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchSummary {
    pub requested: usize,
    pub loaded: usize,
    pub failures: Vec<String>,
}

/// The session's image list and the current selection.
#[derive(Debug, Default)]
pub struct ImageLibrary {
    images: Vec<ImageRecord>,
    current: usize,
    pending: Option<PendingBatch>,
    next_batch: u64,
}

impl ImageLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.current)
    }

    pub fn current(&self) -> Option<&ImageRecord> {
        self.images.get(self.current)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a batch of `count` decodes. Any batch still in flight is
    /// abandoned.
    pub fn begin_batch(&mut self, count: usize) -> BatchId {
        self.next_batch += 1;
        let id = BatchId(self.next_batch);
        if let Some(old) = self.pending.take() {
            debug!(batch = old.id.0, "abandoning unfinished image batch");
        }
        self.pending = Some(PendingBatch {
            id,
            slots: (0..count).map(|_| None).collect(),
            completed: 0,
        });
        id
    }

    /// Record the result for file `index` of `batch`.
    ///
    /// Returns the summary once every file of the batch has reported; the
    /// image list is replaced at that point (unless nothing decoded) and
    /// the selection moves to the first image.
    pub fn complete(
        &mut self,
        batch: BatchId,
        index: usize,
        result: std::result::Result<ImageRecord, String>,
    ) -> Option<BatchSummary> {
        let pending = match self.pending.as_mut() {
            Some(p) if p.id == batch => p,
            _ => {
                debug!(batch = batch.0, index, "dropping result from stale batch");
                return None;
            }
        };
        let slot = pending.slots.get_mut(index)?;
        if slot.is_some() {
            warn!(batch = batch.0, index, "duplicate decode result ignored");
            return None;
        }
        *slot = Some(result);
        pending.completed += 1;
        if pending.completed < pending.slots.len() {
            return None;
        }

        let finished = self.pending.take()?;
        let requested = finished.slots.len();
        let mut loaded = Vec::with_capacity(requested);
        let mut failures = Vec::new();
        for result in finished.slots.into_iter().flatten() {
            match result {
                Ok(record) => loaded.push(record),
                Err(message) => failures.push(message),
            }
        }

        let summary = BatchSummary {
            requested,
            loaded: loaded.len(),
            failures,
        };
        if !loaded.is_empty() {
            self.images = loaded;
            self.current = 0;
        }
        Some(summary)
    }

    pub fn can_go_previous(&self) -> bool {
        !self.images.is_empty() && self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.images.is_empty() && self.current + 1 < self.images.len()
    }

    /// Step back one image. Returns `false` at the first image.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Step forward one image. Returns `false` at the last image.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// `"{n} / {total}"`, or `"No images"`.
    pub fn indicator(&self) -> String {
        if self.images.is_empty() {
            "No images".to_string()
        } else {
            format!("{} / {}", self.current + 1, self.images.len())
        }
    }
}
