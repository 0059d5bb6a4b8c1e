use hexpick_core::table::{ColorRow, ColorTable};
use hexpick_core::Event;

use crate::app::HexpickApp;
use crate::convert::hex_to_color32;
use crate::panels::section_header;

const SWATCH_SIZE: egui::Vec2 = egui::vec2(28.0, 14.0);

pub fn show(ctx: &egui::Context, app: &mut HexpickApp) {
    let mut clicked = None;

    egui::SidePanel::right("color_table")
        .resizable(true)
        .default_width(380.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            let table = app.session.table();
            let count = format!("{} colors", table.picked_count());
            section_header(ui, &app.session.table_title(), Some(count.as_str()));

            ui.horizontal(|ui| {
                ui.toggle_value(&mut app.ui_state.collapsed, "Compact");
                if let Some(row) = app.session.picking().target() {
                    ui.label(
                        egui::RichText::new(format!("Picking: {}", table.display_name(row)))
                            .italics(),
                    );
                }
            });
            ui.separator();

            if table.is_empty() {
                ui.label(egui::RichText::new("Load a CSV to begin").weak());
                return;
            }

            let target = app.session.picking().target();
            let collapsed = app.ui_state.collapsed;
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("color_rows")
                        .striped(true)
                        .num_columns(if collapsed { 3 } else { 5 })
                        .show(ui, |ui| {
                            header_row(ui, collapsed);
                            for (index, row) in table.rows().iter().enumerate() {
                                if row_ui(ui, table, index, row, target == Some(index), collapsed) {
                                    clicked = Some(index);
                                }
                            }
                        });
                });
        });

    if let Some(row) = clicked {
        app.dispatch(Event::StartPicking { row });
    }
}

fn header_row(ui: &mut egui::Ui, collapsed: bool) {
    ui.strong("No.");
    ui.strong("Name");
    if !collapsed {
        ui.strong("Group");
        ui.strong("Hex");
    }
    ui.strong("Color");
    ui.end_row();
}

/// One grid row. Returns `true` when the row was clicked.
fn row_ui(
    ui: &mut egui::Ui,
    table: &ColorTable,
    index: usize,
    row: &ColorRow,
    selected: bool,
    collapsed: bool,
) -> bool {
    let dim = |text: &str| {
        let text = egui::RichText::new(text);
        if row.is_omitted() {
            text.weak()
        } else {
            text
        }
    };

    ui.label(dim(row.factory_number()));
    let clicked = ui
        .selectable_label(selected, dim(&table.display_name(index)))
        .on_hover_text("Click to pick a color for this row")
        .clicked();
    if !collapsed {
        ui.label(dim(row.color_group()));
        ui.monospace(row.hex_value());
    }
    ui.horizontal(|ui| {
        swatch(ui, row.hex_value());
        if collapsed {
            ui.monospace(row.hex_value());
        }
    });
    ui.end_row();

    clicked
}

fn swatch(ui: &mut egui::Ui, hex: &str) {
    let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::hover());
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(90));
    match hex_to_color32(hex) {
        Some(color) => {
            ui.painter().rect_filled(rect, 2.0, color);
        }
        None => {
            ui.painter()
                .line_segment([rect.left_bottom(), rect.right_top()], stroke);
        }
    }
    ui.painter()
        .rect_stroke(rect, 2.0, stroke, egui::epaint::StrokeKind::Inside);
}
