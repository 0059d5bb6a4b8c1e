use crate::library::{BatchId, ImageRecord};
use crate::magnifier::MagnifierView;
use crate::status::Severity;
use crate::table::RepairPrompt;
use crate::transform::{Point, Size};
use crate::viewport::ZoomDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Pointer icon the front end should show over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorKind {
    #[default]
    Default,
    Crosshair,
    Grabbing,
}

/// Inputs fed to [`super::Session::dispatch`]. Positions are in viewport
/// space, relative to the canvas top-left.
#[derive(Debug)]
pub enum Event {
    CanvasResized { size: Size },

    /// The user chose `count` image files. Answered with
    /// [`Effect::DecodeImages`].
    ImagesSelected { count: usize },
    /// One decode of a batch finished.
    ImageDecoded {
        batch: BatchId,
        index: usize,
        result: Result<ImageRecord, String>,
    },
    /// A CSV file was read.
    CsvLoaded { file_name: String, text: String },
    /// Answer to [`Effect::ConfirmRepair`].
    RepairDecision { accept: bool },
    /// Reading or picking a file failed outside the core.
    AcquisitionFailed { message: String },

    StartPicking { row: usize },
    CancelPicking,

    PointerMoved { pos: Point },
    PointerPressed { pos: Point, button: PointerButton },
    PointerReleased { pos: Point, button: PointerButton },
    /// Primary-button click on the canvas.
    Clicked { pos: Point },
    Wheel { pos: Point, direction: ZoomDirection },
    PointerLeft,
    KeyPressed(Key),

    ZoomIn,
    ZoomOut,
    ResetZoom,
    PreviousImage,
    NextImage,

    ExportCsv,
    /// Reset every sampled color. The front end confirms first.
    ClearColors,
}

impl Event {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Event::CanvasResized { .. } => "canvas_resized",
            Event::ImagesSelected { .. } => "images_selected",
            Event::ImageDecoded { .. } => "image_decoded",
            Event::CsvLoaded { .. } => "csv_loaded",
            Event::RepairDecision { .. } => "repair_decision",
            Event::AcquisitionFailed { .. } => "acquisition_failed",
            Event::StartPicking { .. } => "start_picking",
            Event::CancelPicking => "cancel_picking",
            Event::PointerMoved { .. } => "pointer_moved",
            Event::PointerPressed { .. } => "pointer_pressed",
            Event::PointerReleased { .. } => "pointer_released",
            Event::Clicked { .. } => "clicked",
            Event::Wheel { .. } => "wheel",
            Event::PointerLeft => "pointer_left",
            Event::KeyPressed(_) => "key_pressed",
            Event::ZoomIn => "zoom_in",
            Event::ZoomOut => "zoom_out",
            Event::ResetZoom => "reset_zoom",
            Event::PreviousImage => "previous_image",
            Event::NextImage => "next_image",
            Event::ExportCsv => "export_csv",
            Event::ClearColors => "clear_colors",
        }
    }
}

/// Work the front end must carry out after a dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Status { message: String, severity: Severity },
    /// View or current image changed.
    RenderImage,
    /// Rows, colors or the active row changed.
    RenderTable,
    ShowMagnifier(MagnifierView),
    HideMagnifier,
    Cursor(CursorKind),
    /// Decode `count` selected files and report each as
    /// [`Event::ImageDecoded`] tagged with `batch`.
    DecodeImages { batch: BatchId, count: usize },
    /// Ask the user whether to repair the file; answer with
    /// [`Event::RepairDecision`].
    ConfirmRepair(RepairPrompt),
    Download {
        file_name: String,
        mime: &'static str,
        bytes: Vec<u8>,
    },
}
