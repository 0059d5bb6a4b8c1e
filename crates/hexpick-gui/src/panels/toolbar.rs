use hexpick_core::Event;

use crate::app::HexpickApp;

pub fn show(ctx: &egui::Context, app: &mut HexpickApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let library = app.session.library();
            let can_previous = library.can_go_previous();
            let can_next = library.can_go_next();
            let indicator = library.indicator();
            let loading = library.is_loading();

            if ui.add_enabled(can_previous, egui::Button::new("◀")).clicked() {
                app.dispatch(Event::PreviousImage);
            }
            ui.label(indicator);
            if ui.add_enabled(can_next, egui::Button::new("▶")).clicked() {
                app.dispatch(Event::NextImage);
            }
            if loading {
                ui.spinner();
            }

            ui.separator();

            if ui.button("−").on_hover_text("Zoom out").clicked() {
                app.dispatch(Event::ZoomOut);
            }
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                app.dispatch(Event::ZoomIn);
            }
            if ui.button("Reset").on_hover_text("Reset zoom and pan").clicked() {
                app.dispatch(Event::ResetZoom);
            }
            ui.label(app.session.viewport().zoom_label());
        });
    });
}
