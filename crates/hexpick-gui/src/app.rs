use std::sync::mpsc;
use std::time::Instant;

use hexpick_core::config::PickerConfig;
use hexpick_core::session::CursorKind;
use hexpick_core::status::Severity;
use hexpick_core::{Effect, Event, Session};

use crate::convert::record_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{ImageTexture, TextureKey, UiState};
use crate::worker;

pub struct HexpickApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub ui_state: UiState,
    texture: Option<ImageTexture>,
    /// Bumped whenever a decode batch replaces the image list.
    image_epoch: u64,
}

impl HexpickApp {
    pub fn new(ctx: &egui::Context, config: PickerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());
        let ui_state = UiState::new(&config);
        let session = Session::new(config).unwrap_or_else(|e| {
            tracing::error!("{e}; using defaults");
            Session::default()
        });

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session,
            ui_state,
            texture: None,
            image_epoch: 0,
        }
    }

    /// Feed one event to the session and carry out what it asks for.
    pub fn dispatch(&mut self, event: Event) {
        let fx = self.session.dispatch(event);
        self.apply(fx);
    }

    fn apply(&mut self, mut fx: Vec<Effect>) {
        if let Some(message) = take_export_status(&mut fx) {
            self.ui_state.pending_export_status = Some(message);
        }
        for effect in fx {
            match effect {
                Effect::Status { message, severity } => {
                    self.ui_state.set_status(message, severity);
                }
                // Immediate mode redraws everything each frame.
                Effect::RenderImage | Effect::RenderTable => {}
                Effect::ShowMagnifier(view) => self.ui_state.magnifier = Some(view),
                Effect::HideMagnifier => self.ui_state.magnifier = None,
                Effect::Cursor(kind) => self.ui_state.cursor = kind,
                Effect::DecodeImages { batch, count } => {
                    let paths = std::mem::take(&mut self.ui_state.pending_image_paths);
                    debug_assert_eq!(paths.len(), count);
                    self.send_command(WorkerCommand::DecodeImages { batch, paths });
                }
                Effect::ConfirmRepair(prompt) => self.ui_state.confirm_repair = Some(prompt),
                Effect::Download {
                    file_name, bytes, ..
                } => self.save_download(file_name, bytes),
            }
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImagesPicked { paths } => {
                    let count = paths.len();
                    self.ui_state.pending_image_paths = paths;
                    self.dispatch(Event::ImagesSelected { count });
                }
                WorkerResult::ImageDecoded {
                    batch,
                    index,
                    result,
                } => {
                    let fx = self.session.dispatch(Event::ImageDecoded {
                        batch,
                        index,
                        result,
                    });
                    if fx.contains(&Effect::RenderImage) {
                        self.image_epoch += 1;
                    }
                    self.apply(fx);
                }
                WorkerResult::CsvRead { file_name, text } => {
                    self.dispatch(Event::CsvLoaded { file_name, text });
                }
                WorkerResult::FileWritten { path } => {
                    tracing::info!(path = %path.display(), "export written");
                    if let Some(message) = self.ui_state.pending_export_status.take() {
                        self.ui_state.set_status(message, Severity::Success);
                    }
                }
                WorkerResult::Error { message } => {
                    self.dispatch(Event::AcquisitionFailed { message });
                }
            }
        }
    }

    /// Ask where to save an export, then hand the bytes to the worker.
    fn save_download(&self, file_name: String, bytes: Vec<u8>) {
        let cmd_tx = self.cmd_tx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_file_name(&file_name)
                .save_file()
            {
                let _ = cmd_tx.send(WorkerCommand::WriteFile { path, bytes });
            }
        });
    }

    /// Texture of the current image, rebuilt when the image changes.
    pub fn current_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let index = self.session.library().current_index()?;
        let key = TextureKey {
            epoch: self.image_epoch,
            index,
        };
        if self.texture.as_ref().map(|t| t.key) != Some(key) {
            let record = self.session.current_image()?;
            let handle = ctx.load_texture(
                record.name.clone(),
                record_to_color_image(record),
                egui::TextureOptions::NEAREST,
            );
            self.texture = Some(ImageTexture { handle, key });
        }
        self.texture.as_ref().map(|t| t.handle.id())
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    fn tick_status(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.ui_state.status.tick(now);
        if let Some(remaining) = self.ui_state.status.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn apply_cursor(&self, ctx: &egui::Context) {
        let icon = match self.ui_state.cursor {
            CursorKind::Default => return,
            CursorKind::Crosshair => egui::CursorIcon::Crosshair,
            CursorKind::Grabbing => egui::CursorIcon::Grabbing,
        };
        if self.ui_state.last_pointer.is_some() || self.session.viewport().is_panning() {
            ctx.set_cursor_icon(icon);
        }
    }
}

/// Pull the success status out of an export dispatch. It is shown only once
/// the worker reports the file written, so a cancelled save dialog leaves
/// the status line alone.
fn take_export_status(fx: &mut Vec<Effect>) -> Option<String> {
    if !fx.iter().any(|e| matches!(e, Effect::Download { .. })) {
        return None;
    }
    let index = fx.iter().position(|e| {
        matches!(e, Effect::Status { severity: Severity::Success, .. })
    })?;
    match fx.remove(index) {
        Effect::Status { message, .. } => Some(message),
        _ => None,
    }
}

impl eframe::App for HexpickApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.tick_status(ctx);

        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::table::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::magnifier::show(ctx, self);
        panels::dialogs::show(ctx, self);

        self.apply_cursor(ctx);

        if self.ui_state.show_about {
            egui::Window::new("About Hexpick")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Hexpick");
                        ui.label("Reference color picker");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
