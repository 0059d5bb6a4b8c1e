use hexpick_core::library::ImageRecord;
use hexpick_core::sampler::Rgb;

/// Upload-ready copy of a decoded image. Alpha is kept so transparent
/// regions draw over the canvas background.
pub fn record_to_color_image(record: &ImageRecord) -> egui::ColorImage {
    let size = [record.width() as usize, record.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, record.pixels.as_raw())
}

pub fn rgb_to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Swatch color for a stored `#RRGGBB` value.
pub fn hex_to_color32(hex: &str) -> Option<egui::Color32> {
    Rgb::from_hex(hex).map(rgb_to_color32)
}
