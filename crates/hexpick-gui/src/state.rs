use std::path::PathBuf;
use std::time::{Duration, Instant};

use hexpick_core::config::PickerConfig;
use hexpick_core::magnifier::MagnifierView;
use hexpick_core::session::CursorKind;
use hexpick_core::status::{Severity, StatusLine};
use hexpick_core::table::RepairPrompt;
use hexpick_core::transform::Point;

/// Presentation state the session does not own.
pub struct UiState {
    pub status: StatusLine,
    /// Preview to draw, as last reported by the session.
    pub magnifier: Option<MagnifierView>,
    pub cursor: CursorKind,
    /// Compact table columns.
    pub collapsed: bool,
    /// Repair question waiting for an answer.
    pub confirm_repair: Option<RepairPrompt>,
    pub confirm_clear: bool,
    pub show_about: bool,
    /// Pointer position over the canvas in the previous frame, viewport space.
    pub last_pointer: Option<Point>,
    /// Screen position of the canvas top-left.
    pub canvas_origin: egui::Pos2,
    /// Files chosen in the open dialog, waiting for their batch id.
    pub pending_image_paths: Vec<PathBuf>,
    /// Export success message, shown once the file is on disk.
    pub pending_export_status: Option<String>,
}

impl UiState {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            status: StatusLine::new(Duration::from_millis(config.status.success_timeout_ms)),
            magnifier: None,
            cursor: CursorKind::Default,
            collapsed: false,
            confirm_repair: None,
            confirm_clear: false,
            show_about: false,
            last_pointer: None,
            canvas_origin: egui::Pos2::ZERO,
            pending_image_paths: Vec::new(),
            pending_export_status: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, severity: Severity) {
        self.status.set(message, severity, Instant::now());
    }
}

/// GPU copy of the current image, tagged with what it was built from.
pub struct ImageTexture {
    pub handle: egui::TextureHandle,
    pub key: TextureKey,
}

/// A texture is stale once a new batch lands or the selection moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureKey {
    pub epoch: u64,
    pub index: usize,
}
