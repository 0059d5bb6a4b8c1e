#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use hexpick_core::library::ImageRecord;
use hexpick_core::transform::{Point, Size};
use hexpick_core::{Effect, Event, Session};

/// Three rows; the third has no color name.
pub const CATALOG_CSV: &str = "\
FACTORY NUMBER,COLOR NAME,COLOR GROUP
101,Red,Warm
102,Blue,Cool
103,,Neutral
";

/// Lacks `COLOR GROUP`, so loading it asks for a repair.
pub const LEGACY_CSV: &str = "\
FACTORY NUMBER,COLOR NAME
77,Teal
,Olive
";

/// Every pixel set to `rgb`, fully opaque.
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

/// Pixel `(x, y)` holds `(x * 10, y * 10, 0)`, so every pixel of a small
/// image is distinguishable.
pub fn ramp(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 10 % 256) as u8, (y * 10 % 256) as u8, 0, 255])
    })
}

pub fn record(name: &str, pixels: RgbaImage) -> ImageRecord {
    ImageRecord::new(name, pixels)
}

/// Center of pixel `(x, y)` in viewport space, for an unzoomed image that
/// exactly fills the canvas.
pub fn pixel_center(x: u32, y: u32) -> Point {
    Point::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Run a full image batch through the session.
pub fn load_images(session: &mut Session, images: Vec<ImageRecord>) -> Vec<Effect> {
    let fx = session.dispatch(Event::ImagesSelected {
        count: images.len(),
    });
    let batch = match fx.as_slice() {
        [Effect::DecodeImages { batch, .. }] => *batch,
        other => panic!("expected a decode request, got {other:?}"),
    };
    let mut last = Vec::new();
    for (index, image) in images.into_iter().enumerate() {
        last = session.dispatch(Event::ImageDecoded {
            batch,
            index,
            result: Ok(image),
        });
    }
    last
}

/// A session with `images` loaded, `csv` imported as `paints.csv`, and a
/// canvas of `canvas` pixels.
pub fn session_with(images: Vec<ImageRecord>, csv: &str, canvas: (u32, u32)) -> Session {
    let mut session = Session::default();
    session.dispatch(Event::CanvasResized {
        size: Size::from(canvas),
    });
    if !csv.is_empty() {
        session.dispatch(Event::CsvLoaded {
            file_name: "paints.csv".to_string(),
            text: csv.to_string(),
        });
    }
    if !images.is_empty() {
        load_images(&mut session, images);
    }
    session
}

/// Status messages among `fx`, in order.
pub fn statuses(fx: &[Effect]) -> Vec<(String, hexpick_core::status::Severity)> {
    fx.iter()
        .filter_map(|e| match e {
            Effect::Status { message, severity } => Some((message.clone(), *severity)),
            _ => None,
        })
        .collect()
}
