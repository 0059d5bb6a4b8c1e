pub mod dialogs;
pub mod magnifier;
pub mod menu_bar;
pub mod status;
pub mod table;
pub mod toolbar;
pub mod viewport;

use hexpick_core::status::Severity;

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

pub(crate) fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Neutral => egui::Color32::from_gray(170),
        Severity::Info => egui::Color32::from_rgb(110, 170, 240),
        Severity::Success => egui::Color32::from_rgb(90, 200, 110),
        Severity::Warning => egui::Color32::from_rgb(235, 180, 60),
        Severity::Error => egui::Color32::from_rgb(235, 85, 85),
    }
}
