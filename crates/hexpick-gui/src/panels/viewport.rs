use hexpick_core::session::{Key, PointerButton};
use hexpick_core::transform::{Point, Size};
use hexpick_core::viewport::ZoomDirection;
use hexpick_core::Event;

use crate::app::HexpickApp;

pub fn show(ctx: &egui::Context, app: &mut HexpickApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            app.ui_state.canvas_origin = rect.min;
            app.dispatch(Event::CanvasResized {
                size: Size::new(rect.width() as f64, rect.height() as f64),
            });

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            handle_pointer(ui, &response, app, rect);
            handle_wheel(ui, &response, app, rect);
            handle_keys(ctx, app);

            match app.current_texture(ctx) {
                Some(texture_id) => {
                    if let Some(img_rect) = compute_img_rect(app, rect) {
                        draw_image(ui, texture_id, img_rect, rect);
                    }
                    if let Some(image) = app.session.current_image() {
                        draw_viewing_label(ui, rect, &image.name);
                    }
                }
                None => show_placeholder(ui, rect, app.session.library().is_loading()),
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn to_canvas(pos: egui::Pos2, rect: egui::Rect) -> Point {
    let local = pos - rect.min;
    Point::new(local.x as f64, local.y as f64)
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut HexpickApp, rect: egui::Rect) {
    let panning = app.session.viewport().is_panning();
    let (hover, middle_pressed, middle_released) = ui.input(|i| {
        (
            i.pointer.hover_pos(),
            i.pointer.button_pressed(egui::PointerButton::Middle),
            i.pointer.button_released(egui::PointerButton::Middle),
        )
    });
    // While panning, the drag keeps reporting past the canvas edge.
    let pointer = hover
        .filter(|p| panning || (rect.contains(*p) && response.hovered()))
        .map(|p| to_canvas(p, rect));

    if let Some(pos) = pointer {
        if middle_pressed && !panning {
            app.dispatch(Event::PointerPressed {
                pos,
                button: PointerButton::Middle,
            });
        }
        if app.ui_state.last_pointer != Some(pos) {
            app.dispatch(Event::PointerMoved { pos });
        }
    } else if app.ui_state.last_pointer.is_some() {
        app.dispatch(Event::PointerLeft);
    }

    if middle_released && app.session.viewport().is_panning() {
        let pos = pointer.or(app.ui_state.last_pointer).unwrap_or_default();
        app.dispatch(Event::PointerReleased {
            pos,
            button: PointerButton::Middle,
        });
    }

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.dispatch(Event::Clicked {
                pos: to_canvas(pos, rect),
            });
        }
    }

    app.ui_state.last_pointer = pointer;
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut HexpickApp, rect: egui::Rect) {
    if !response.hovered() {
        return;
    }
    let delta = ui.input(|i| i.raw_scroll_delta.y);
    let Some(direction) = ZoomDirection::from_wheel_delta(delta as f64) else {
        return;
    };
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        app.dispatch(Event::Wheel {
            pos: to_canvas(mouse_pos, rect),
            direction,
        });
    }
}

fn handle_keys(ctx: &egui::Context, app: &mut HexpickApp) {
    if ctx.wants_keyboard_input() {
        return;
    }
    let keys = ctx.input(|i| {
        [
            (egui::Key::ArrowLeft, Key::ArrowLeft),
            (egui::Key::ArrowRight, Key::ArrowRight),
            (egui::Key::Escape, Key::Escape),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, key)| key)
        .collect::<Vec<_>>()
    });
    for key in keys {
        app.dispatch(Event::KeyPressed(key));
    }
}

/// Screen rectangle covered by the current image, through the same
/// transform the session uses for hit testing.
fn compute_img_rect(app: &HexpickApp, rect: egui::Rect) -> Option<egui::Rect> {
    let image = app.session.current_image()?;
    let viewport = app.session.viewport();
    let min = viewport.viewport_point(Point::new(0.0, 0.0))?;
    let max = viewport.viewport_point(Point::new(image.width() as f64, image.height() as f64))?;
    Some(egui::Rect::from_min_max(
        rect.min + egui::vec2(min.x as f32, min.y as f32),
        rect.min + egui::vec2(max.x as f32, max.y as f32),
    ))
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect, clip: egui::Rect) {
    ui.painter_at(clip).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect, loading: bool) {
    let text = if loading {
        "Decoding images..."
    } else {
        "Load images to begin"
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
