use crate::app::HexpickApp;
use crate::panels::severity_color;

pub fn show(ctx: &egui::Context, app: &mut HexpickApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        ui.horizontal(|ui| {
            let status = &app.ui_state.status;
            ui.label(egui::RichText::new(status.message()).color(severity_color(status.severity())));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Zoom: {}", app.session.viewport().zoom_label()));
                if let Some(image) = app.session.current_image() {
                    ui.separator();
                    ui.label(format!("{}x{}", image.width(), image.height()));
                    ui.separator();
                    ui.label(image.name.as_str());
                }
            });
        });

        ui.add_space(2.0);
    });
}
