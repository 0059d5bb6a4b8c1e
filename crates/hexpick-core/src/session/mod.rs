//! The picking session: all state of one run of the tool, driven by a
//! single dispatcher.
//!
//! Each call to [`Session::dispatch`] leaves the session consistent and
//! returns the effects the front end must apply, in order.

mod events;

pub use events::{CursorKind, Effect, Event, Key, PointerButton};

use tracing::{debug, info, warn};

use crate::config::PickerConfig;
use crate::consts::CSV_MIME;
use crate::error::{PickerError, Result};
use crate::library::{BatchId, BatchSummary, ImageLibrary, ImageRecord};
use crate::magnifier::MagnifierView;
use crate::picking::PickingState;
use crate::sampler::sample_neighborhood;
use crate::status::Severity;
use crate::table::{
    base_name, export_file_name, parse, repair, serialize, ColorTable, ParseOutcome, RepairPrompt,
};
use crate::transform::{Point, Size};
use crate::viewport::ViewportController;

/// A file waiting on the user's repair decision.
#[derive(Debug)]
struct PendingRepair {
    file_name: String,
    prompt: RepairPrompt,
}

#[derive(Debug)]
pub struct Session {
    config: PickerConfig,
    viewport: ViewportController,
    table: ColorTable,
    source_name: Option<String>,
    picking: PickingState,
    pending_repair: Option<PendingRepair>,
    magnifier_visible: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::build(PickerConfig::default())
    }
}

impl Session {
    /// Start a session with a validated config.
    pub fn new(config: PickerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PickerConfig) -> Self {
        Self {
            viewport: ViewportController::new(config.viewport.clone()),
            config,
            table: ColorTable::default(),
            source_name: None,
            picking: PickingState::Idle,
            pending_repair: None,
            magnifier_visible: false,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn library(&self) -> &ImageLibrary {
        self.viewport.library()
    }

    pub fn current_image(&self) -> Option<&ImageRecord> {
        self.viewport.library().current()
    }

    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    pub fn picking(&self) -> PickingState {
        self.picking
    }

    /// Base name of the loaded CSV.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn pending_repair(&self) -> Option<&RepairPrompt> {
        self.pending_repair.as_ref().map(|p| &p.prompt)
    }

    /// `Color Table: {name}`, or `Color Table` before any CSV is loaded.
    pub fn table_title(&self) -> String {
        match &self.source_name {
            Some(name) => format!("Color Table: {name}"),
            None => "Color Table".to_string(),
        }
    }

    /// File name the next export will be offered under.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.source_name.as_deref())
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        debug!(event = event.name(), "dispatch");
        let mut fx = Vec::new();
        match event {
            Event::CanvasResized { size } => self.on_canvas_resized(size, &mut fx),
            Event::ImagesSelected { count } => self.on_images_selected(count, &mut fx),
            Event::ImageDecoded {
                batch,
                index,
                result,
            } => self.on_image_decoded(batch, index, result, &mut fx),
            Event::CsvLoaded { file_name, text } => self.on_csv_loaded(file_name, &text, &mut fx),
            Event::RepairDecision { accept } => self.on_repair_decision(accept, &mut fx),
            Event::AcquisitionFailed { message } => {
                warn!(%message, "file acquisition failed");
                status(&mut fx, message, Severity::Error);
            }
            Event::StartPicking { row } => self.start_picking(row, &mut fx),
            Event::CancelPicking | Event::KeyPressed(Key::Escape) => {
                self.cancel_picking(&mut fx)
            }
            Event::PointerMoved { pos } => self.on_pointer_moved(pos, &mut fx),
            Event::PointerPressed { pos, button } => self.on_pointer_pressed(pos, button, &mut fx),
            Event::PointerReleased { button, .. } => self.on_pointer_released(button, &mut fx),
            Event::Clicked { pos } => self.on_click(pos, &mut fx),
            Event::Wheel { pos, direction } => {
                if self.viewport.zoom_at(pos, direction) {
                    fx.push(Effect::RenderImage);
                }
            }
            Event::PointerLeft => self.hide_magnifier(&mut fx),
            Event::KeyPressed(Key::ArrowLeft) | Event::PreviousImage => {
                if self.viewport.previous_image() {
                    fx.push(Effect::RenderImage);
                }
            }
            Event::KeyPressed(Key::ArrowRight) | Event::NextImage => {
                if self.viewport.next_image() {
                    fx.push(Effect::RenderImage);
                }
            }
            Event::ZoomIn => {
                if self.viewport.zoom_in() {
                    fx.push(Effect::RenderImage);
                }
            }
            Event::ZoomOut => {
                if self.viewport.zoom_out() {
                    fx.push(Effect::RenderImage);
                }
            }
            Event::ResetZoom => {
                if self.viewport.reset_zoom() {
                    fx.push(Effect::RenderImage);
                }
            }
            Event::ExportCsv => self.export_csv(&mut fx),
            Event::ClearColors => self.clear_colors(&mut fx),
        }
        fx
    }

    fn on_canvas_resized(&mut self, size: Size, fx: &mut Vec<Effect>) {
        if self.viewport.set_canvas_size(size) {
            fx.push(Effect::RenderImage);
        }
    }

    // -----------------------------------------------------------------------
    // Image acquisition
    // -----------------------------------------------------------------------

    fn on_images_selected(&mut self, count: usize, fx: &mut Vec<Effect>) {
        if count == 0 {
            return;
        }
        let batch = self.viewport.library_mut().begin_batch(count);
        info!(batch = batch.0, count, "decoding images");
        fx.push(Effect::DecodeImages { batch, count });
    }

    fn on_image_decoded(
        &mut self,
        batch: BatchId,
        index: usize,
        result: std::result::Result<ImageRecord, String>,
        fx: &mut Vec<Effect>,
    ) {
        if let Err(message) = &result {
            warn!(batch = batch.0, index, %message, "image decode failed");
        }
        let Some(summary) = self.viewport.library_mut().complete(batch, index, result) else {
            return;
        };
        self.on_batch_complete(&summary, fx);
    }

    fn on_batch_complete(&mut self, summary: &BatchSummary, fx: &mut Vec<Effect>) {
        info!(
            requested = summary.requested,
            loaded = summary.loaded,
            "image batch complete"
        );
        if summary.loaded == 0 {
            status(fx, "No images could be decoded", Severity::Error);
            return;
        }

        self.viewport.reset_zoom();
        self.hide_magnifier(fx);
        fx.push(Effect::RenderImage);
        if summary.failures.is_empty() {
            status(
                fx,
                format!("Loaded {} image(s)", summary.loaded),
                Severity::Success,
            );
        } else {
            status(
                fx,
                format!("Loaded {} of {} image(s)", summary.loaded, summary.requested),
                Severity::Warning,
            );
        }
    }

    // -----------------------------------------------------------------------
    // CSV import / export
    // -----------------------------------------------------------------------

    fn on_csv_loaded(&mut self, file_name: String, text: &str, fx: &mut Vec<Effect>) {
        match parse(text) {
            Ok(ParseOutcome::Loaded(table)) => {
                let n = table.len();
                self.install_table(table, &file_name, fx);
                status(fx, format!("Loaded {n} colors from CSV"), Severity::Success);
            }
            Ok(ParseOutcome::NeedsRepair(prompt)) => {
                let err = PickerError::MissingRequiredColumns {
                    missing: prompt.missing.clone(),
                };
                report(fx, &err);
                fx.push(Effect::ConfirmRepair(prompt.clone()));
                self.pending_repair = Some(PendingRepair { file_name, prompt });
            }
            Err(err) => {
                warn!(%file_name, error = %err, "CSV import failed");
                report(fx, &err);
            }
        }
    }

    fn on_repair_decision(&mut self, accept: bool, fx: &mut Vec<Effect>) {
        let Some(pending) = self.pending_repair.take() else {
            return;
        };
        if !accept {
            info!(file_name = %pending.file_name, "repair declined");
            status(fx, "CSV import cancelled", Severity::Warning);
            return;
        }
        let table = repair(&pending.prompt);
        let n = table.len();
        self.install_table(table, &pending.file_name, fx);
        status(
            fx,
            format!("CSV cleaned and loaded with {n} colors"),
            Severity::Success,
        );
    }

    fn install_table(&mut self, table: ColorTable, file_name: &str, fx: &mut Vec<Effect>) {
        if self.picking.finish().is_some() {
            debug!("rows replaced while picking; picking ended");
            self.hide_magnifier(fx);
            fx.push(Effect::Cursor(CursorKind::Default));
        }
        self.table = table;
        self.source_name = Some(base_name(file_name));
        info!(rows = self.table.len(), source = %file_name, "table loaded");
        fx.push(Effect::RenderTable);
    }

    fn export_csv(&mut self, fx: &mut Vec<Effect>) {
        if self.table.is_empty() {
            report(fx, &PickerError::NoDataToExport);
            return;
        }
        match serialize(&self.table) {
            Ok(text) => {
                let file_name = self.export_file_name();
                info!(%file_name, rows = self.table.len(), "exporting CSV");
                fx.push(Effect::Download {
                    file_name,
                    mime: CSV_MIME,
                    bytes: text.into_bytes(),
                });
                status(fx, "CSV exported successfully", Severity::Success);
            }
            Err(err) => {
                warn!(error = %err, "CSV export failed");
                report(fx, &err);
            }
        }
    }

    fn clear_colors(&mut self, fx: &mut Vec<Effect>) {
        if self.table.is_empty() {
            status(fx, "No data to clear", Severity::Error);
            return;
        }
        self.table.clear_colors();
        fx.push(Effect::RenderTable);
        status(fx, "All colors cleared", Severity::Warning);
    }

    // -----------------------------------------------------------------------
    // Picking
    // -----------------------------------------------------------------------

    fn start_picking(&mut self, row: usize, fx: &mut Vec<Effect>) {
        if self.library().is_empty() {
            report(fx, &PickerError::NoImagesLoaded);
            return;
        }
        if row >= self.table.len() {
            report(
                fx,
                &PickerError::RowOutOfRange {
                    index: row,
                    total: self.table.len(),
                },
            );
            return;
        }

        self.picking.start(row);
        fx.push(Effect::RenderTable);
        status(
            fx,
            format!(
                "Picking color for {}. Click on the image to select a color.",
                self.table.display_name(row)
            ),
            Severity::Info,
        );
    }

    fn cancel_picking(&mut self, fx: &mut Vec<Effect>) {
        if self.picking.finish().is_none() {
            return;
        }
        self.hide_magnifier(fx);
        fx.push(Effect::Cursor(self.idle_cursor()));
        fx.push(Effect::RenderTable);
        status(fx, "Picking cancelled", Severity::Info);
    }

    fn on_click(&mut self, pos: Point, fx: &mut Vec<Effect>) {
        let Some(row) = self.picking.target() else {
            return;
        };
        if self.viewport.is_panning() {
            return;
        }
        let Some(image) = self.viewport.library().current() else {
            return;
        };
        let Some((x, y)) = self.viewport.pixel_at(pos) else {
            debug!(?pos, "click outside image ignored");
            return;
        };
        let Some(color) = sample_neighborhood(&image.pixels, x, y, self.config.sampler.radius)
        else {
            return;
        };

        match self.table.set_color(row, color) {
            Ok(()) => {
                let hex = color.to_hex();
                info!(row, %hex, x, y, "color picked");
                status(
                    fx,
                    format!("Picked {hex} for {}", self.table.display_name(row)),
                    Severity::Success,
                );
            }
            Err(err) => {
                warn!(error = %err, "picked row vanished");
                report(fx, &err);
            }
        }

        self.picking.finish();
        self.hide_magnifier(fx);
        fx.push(Effect::Cursor(CursorKind::Default));
        fx.push(Effect::RenderTable);
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    fn on_pointer_moved(&mut self, pos: Point, fx: &mut Vec<Effect>) {
        if self.viewport.is_panning() {
            if self.viewport.pan_to(pos) {
                fx.push(Effect::RenderImage);
            }
            return;
        }

        if !self.picking.is_active() {
            self.hide_magnifier(fx);
            return;
        }

        let view = self.viewport.library().current().and_then(|image| {
            let (x, y) = self.viewport.pixel_at(pos)?;
            MagnifierView::build(
                &image.pixels,
                x,
                y,
                pos,
                &self.config.sampler,
                &self.config.magnifier,
            )
        });

        match view {
            Some(view) => {
                self.magnifier_visible = true;
                fx.push(Effect::ShowMagnifier(view));
                fx.push(Effect::Cursor(CursorKind::Crosshair));
            }
            None => self.hide_magnifier(fx),
        }
    }

    fn on_pointer_pressed(&mut self, pos: Point, button: PointerButton, fx: &mut Vec<Effect>) {
        if button != PointerButton::Middle {
            return;
        }
        self.viewport.begin_pan(pos);
        fx.push(Effect::Cursor(CursorKind::Grabbing));
    }

    fn on_pointer_released(&mut self, button: PointerButton, fx: &mut Vec<Effect>) {
        if button != PointerButton::Middle || !self.viewport.is_panning() {
            return;
        }
        self.viewport.end_pan();
        fx.push(Effect::Cursor(self.idle_cursor()));
    }

    fn idle_cursor(&self) -> CursorKind {
        if self.picking.is_active() {
            CursorKind::Crosshair
        } else {
            CursorKind::Default
        }
    }

    fn hide_magnifier(&mut self, fx: &mut Vec<Effect>) {
        if self.magnifier_visible {
            self.magnifier_visible = false;
            fx.push(Effect::HideMagnifier);
        }
    }
}

fn status(fx: &mut Vec<Effect>, message: impl Into<String>, severity: Severity) {
    fx.push(Effect::Status {
        message: message.into(),
        severity,
    });
}

fn report(fx: &mut Vec<Effect>, err: &PickerError) {
    status(fx, err.to_string(), err.severity());
}
