use hexpick_core::Event;

use crate::app::HexpickApp;
use crate::messages::{WorkerCommand, WorkerResult};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

pub fn show(ctx: &egui::Context, app: &mut HexpickApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let export_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(egui::Button::new("Load Images...").shortcut_text(ctx.format_shortcut(&open_shortcut)))
                    .clicked()
                {
                    ui.close();
                    load_images(ctx, app);
                }

                if ui.button("Load CSV...").clicked() {
                    ui.close();
                    load_csv(app);
                }

                if ui
                    .add(egui::Button::new("Export CSV...").shortcut_text(ctx.format_shortcut(&export_shortcut)))
                    .clicked()
                {
                    ui.close();
                    app.dispatch(Event::ExportCsv);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Clear Colors...").clicked() {
                    ui.close();
                    app.ui_state.confirm_clear = true;
                }

                let picking = app.session.picking().is_active();
                if ui.add_enabled(picking, egui::Button::new("Cancel Picking")).clicked() {
                    ui.close();
                    app.dispatch(Event::CancelPicking);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    ui.close();
                    app.dispatch(Event::ZoomIn);
                }
                if ui.button("Zoom Out").clicked() {
                    ui.close();
                    app.dispatch(Event::ZoomOut);
                }
                if ui.button("Reset Zoom").clicked() {
                    ui.close();
                    app.dispatch(Event::ResetZoom);
                }
                ui.separator();
                ui.checkbox(&mut app.ui_state.collapsed, "Compact table");
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            load_images(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&export_shortcut)) {
            app.dispatch(Event::ExportCsv);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn load_images(ctx: &egui::Context, app: &HexpickApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let paths = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_files();
        if let Some(paths) = paths.filter(|p| !p.is_empty()) {
            let _ = result_tx.send(WorkerResult::ImagesPicked { paths });
            ctx.request_repaint();
        }
    });
}

fn load_csv(app: &HexpickApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ReadCsv { path });
        }
    });
}
