use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use hexpick_core::io::{decode_image, load_image, read_text};
use hexpick_core::PickerError;

fn checker() -> RgbaImage {
    RgbaImage::from_fn(4, 3, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 128])
        }
    })
}

#[test]
fn test_decode_png_bytes() {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(checker())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let record = decode_image("checker.png", &bytes).unwrap();
    assert_eq!(record.name, "checker.png");
    assert_eq!(record.width(), 4);
    assert_eq!(record.height(), 3);
    assert_eq!(record.pixels, checker());
}

#[test]
fn test_decode_garbage_fails() {
    let err = decode_image("broken.png", b"definitely not an image").unwrap_err();
    assert!(matches!(err, PickerError::Image(_)));
}

#[test]
fn test_save_load_roundtrip_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swatch.png");

    checker().save_with_format(&path, ImageFormat::Png).unwrap();
    let record = load_image(&path).unwrap();

    assert_eq!(record.name, "swatch.png");
    assert_eq!(record.pixels, checker());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("nope.png")).is_err());
}

#[test]
fn test_read_text_returns_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paints.csv");
    std::fs::write(&path, "FACTORY NUMBER,COLOR NAME,COLOR GROUP\n1,Red,Warm\n").unwrap();

    let (name, text) = read_text(&path).unwrap();
    assert_eq!(name, "paints.csv");
    assert!(text.starts_with("FACTORY NUMBER"));
}

#[test]
fn test_read_text_missing_file() {
    let err = read_text(std::path::Path::new("/nonexistent/paints.csv")).unwrap_err();
    assert!(matches!(err, PickerError::Io(_)));
}
