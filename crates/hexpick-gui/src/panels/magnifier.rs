use hexpick_core::magnifier::MagnifierView;

use crate::app::HexpickApp;
use crate::convert::rgb_to_color32;

/// Floating zoomed preview that follows the pointer while picking.
pub fn show(ctx: &egui::Context, app: &HexpickApp) {
    let Some(view) = app.ui_state.magnifier.as_ref() else {
        return;
    };
    let anchor = app.ui_state.canvas_origin
        + egui::vec2(view.anchor.x as f32, view.anchor.y as f32);

    egui::Area::new(egui::Id::new("magnifier"))
        .fixed_pos(anchor)
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                draw_grid(ui, view);
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, rgb_to_color32(view.sample));
                    ui.monospace(view.hex.as_str());
                    ui.weak(format!("({}, {})", view.center.0, view.center.1));
                });
            });
        });
}

fn draw_grid(ui: &mut egui::Ui, view: &MagnifierView) {
    let extent = view.extent() as f32;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(extent, extent), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let zoom = view.zoom as f32;

    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(20));
    for row in 0..view.size {
        for col in 0..view.size {
            let Some(color) = view.cell(col, row) else {
                continue;
            };
            let min = rect.min + egui::vec2(col as f32 * zoom, row as f32 * zoom);
            painter.rect_filled(
                egui::Rect::from_min_size(min, egui::vec2(zoom, zoom)),
                0.0,
                rgb_to_color32(color),
            );
        }
    }

    let window = egui::Rect::from_min_size(
        rect.min + egui::vec2(view.window.x as f32, view.window.y as f32),
        egui::vec2(view.window.width as f32, view.window.height as f32),
    );
    painter.rect_stroke(
        window,
        0.0,
        egui::Stroke::new(2.0, egui::Color32::WHITE),
        egui::epaint::StrokeKind::Middle,
    );

    let cross = rect.min + egui::vec2(view.crosshair.x as f32, view.crosshair.y as f32);
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_black_alpha(160));
    painter.line_segment(
        [egui::pos2(rect.left(), cross.y), egui::pos2(rect.right(), cross.y)],
        stroke,
    );
    painter.line_segment(
        [egui::pos2(cross.x, rect.top()), egui::pos2(cross.x, rect.bottom())],
        stroke,
    );
}
