use hexpick_core::table::REQUIRED_COLUMNS;
use hexpick_core::Event;

use crate::app::HexpickApp;

pub fn show(ctx: &egui::Context, app: &mut HexpickApp) {
    show_repair(ctx, app);
    show_clear(ctx, app);
}

/// Ask whether a CSV missing required columns should be normalized.
fn show_repair(ctx: &egui::Context, app: &mut HexpickApp) {
    let Some(prompt) = app.ui_state.confirm_repair.as_ref() else {
        return;
    };
    let mut decision = None;

    egui::Window::new("Missing Columns")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("This CSV does not have every required column.");
            ui.add_space(6.0);
            egui::Grid::new("repair_columns").num_columns(2).show(ui, |ui| {
                ui.strong("Current");
                ui.label(prompt.headers.join(", "));
                ui.end_row();
                ui.strong("Required");
                ui.label(REQUIRED_COLUMNS.join(", "));
                ui.end_row();
                ui.strong("Missing");
                ui.label(prompt.missing.join(", "));
                ui.end_row();
                ui.strong("Rows");
                ui.label(prompt.records.len().to_string());
                ui.end_row();
            });
            ui.add_space(6.0);
            ui.label("Clean the file by adding the missing columns and filling blank names?");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Clean and Load").clicked() {
                    decision = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    decision = Some(false);
                }
            });
        });

    if let Some(accept) = decision {
        app.ui_state.confirm_repair = None;
        app.dispatch(Event::RepairDecision { accept });
    }
}

fn show_clear(ctx: &egui::Context, app: &mut HexpickApp) {
    if !app.ui_state.confirm_clear {
        return;
    }
    let mut decision = None;

    egui::Window::new("Clear Colors")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Remove every picked color from the table?");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    decision = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    decision = Some(false);
                }
            });
        });

    if let Some(accept) = decision {
        app.ui_state.confirm_clear = false;
        if accept {
            app.dispatch(Event::ClearColors);
        }
    }
}
