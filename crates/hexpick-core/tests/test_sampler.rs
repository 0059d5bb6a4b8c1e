mod common;

use image::{Rgba, RgbaImage};

use hexpick_core::config::{MagnifierConfig, SamplerConfig};
use hexpick_core::magnifier::MagnifierView;
use hexpick_core::sampler::{neighborhood, rgb_to_hex, sample_neighborhood, Rgb};
use hexpick_core::transform::Point;

use common::{ramp, solid};

// ---------------------------------------------------------------------------
// sample_neighborhood
// ---------------------------------------------------------------------------

#[test]
fn test_uniform_region_returns_exact_color() {
    let img = solid(5, 5, [10, 20, 30]);
    assert_eq!(sample_neighborhood(&img, 2, 2, 1), Some(Rgb::new(10, 20, 30)));
    assert_eq!(sample_neighborhood(&img, 0, 4, 1), Some(Rgb::new(10, 20, 30)));
}

#[test]
fn test_corner_averages_in_bounds_pixels_only() {
    let mut img = solid(3, 3, [0, 0, 0]);
    img.put_pixel(0, 0, Rgba([10, 1, 1, 255]));
    img.put_pixel(1, 0, Rgba([20, 2, 1, 255]));
    img.put_pixel(0, 1, Rgba([30, 2, 0, 255]));
    img.put_pixel(1, 1, Rgba([41, 2, 0, 255]));

    // r: 101 / 4 = 25.25, g: 7 / 4 = 1.75, b: 2 / 4 = 0.5 rounds up.
    assert_eq!(sample_neighborhood(&img, 0, 0, 1), Some(Rgb::new(25, 2, 1)));
}

#[test]
fn test_edge_uses_six_pixels() {
    let mut img = solid(3, 3, [0, 0, 0]);
    for x in 0..3 {
        img.put_pixel(x, 0, Rgba([60, 0, 0, 255]));
    }
    // Window at (1, 0): three pixels of 60 and three of 0.
    assert_eq!(sample_neighborhood(&img, 1, 0, 1), Some(Rgb::new(30, 0, 0)));
}

#[test]
fn test_alpha_is_ignored() {
    let img = RgbaImage::from_pixel(3, 3, Rgba([200, 100, 50, 0]));
    assert_eq!(sample_neighborhood(&img, 1, 1, 1), Some(Rgb::new(200, 100, 50)));
}

#[test]
fn test_center_outside_image() {
    let img = solid(3, 3, [1, 2, 3]);
    assert_eq!(sample_neighborhood(&img, 3, 0, 1), None);
    assert_eq!(sample_neighborhood(&img, 0, 7, 1), None);
}

#[test]
fn test_radius_zero_is_single_pixel() {
    let img = ramp(4, 4);
    assert_eq!(sample_neighborhood(&img, 2, 3, 0), Some(Rgb::new(20, 30, 0)));
}

#[test]
fn test_wider_radius() {
    let img = ramp(9, 9);
    // The ramp is linear, so a full window averages to its center.
    assert_eq!(sample_neighborhood(&img, 4, 4, 2), Some(Rgb::new(40, 40, 0)));
}

#[test]
fn test_one_pixel_image() {
    let img = solid(1, 1, [9, 8, 7]);
    assert_eq!(sample_neighborhood(&img, 0, 0, 1), Some(Rgb::new(9, 8, 7)));
}

// ---------------------------------------------------------------------------
// neighborhood
// ---------------------------------------------------------------------------

#[test]
fn test_neighborhood_is_row_major() {
    let img = ramp(5, 5);
    let cells: Vec<_> = neighborhood(&img, 2, 2, 1).collect();
    assert_eq!(cells.len(), 9);
    assert_eq!((cells[0].dx, cells[0].dy), (-1, -1));
    assert_eq!((cells[1].dx, cells[1].dy), (0, -1));
    assert_eq!((cells[3].dx, cells[3].dy), (-1, 0));
    assert_eq!(cells[4].color, Some(Rgb::new(20, 20, 0)));
}

#[test]
fn test_neighborhood_marks_out_of_bounds() {
    let img = ramp(2, 2);
    let in_bounds = neighborhood(&img, 0, 0, 1)
        .filter(|c| c.color.is_some())
        .count();
    assert_eq!(in_bounds, 4);
}

// ---------------------------------------------------------------------------
// Hex formatting
// ---------------------------------------------------------------------------

#[test]
fn test_rgb_to_hex() {
    assert_eq!(rgb_to_hex(255, 0, 0), "#FF0000");
    assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    assert_eq!(rgb_to_hex(1, 171, 15), "#01AB0F");
    assert_eq!(Rgb::new(200, 100, 50).to_hex(), "#C86432");
}

#[test]
fn test_rgb_from_hex() {
    assert_eq!(Rgb::from_hex("#c86432"), Some(Rgb::new(200, 100, 50)));
    assert_eq!(Rgb::from_hex("C86432"), None);
    assert_eq!(Rgb::from_hex("#C8643"), None);
    assert_eq!(Rgb::from_hex("#GG0000"), None);
    assert_eq!(Rgb::from_hex(""), None);
}

// ---------------------------------------------------------------------------
// Magnifier
// ---------------------------------------------------------------------------

#[test]
fn test_magnifier_grid_matches_image() {
    let img = ramp(20, 20);
    let view = MagnifierView::build(
        &img,
        10,
        10,
        Point::new(100.0, 200.0),
        &SamplerConfig::default(),
        &MagnifierConfig::default(),
    )
    .unwrap();

    assert_eq!(view.size, 15);
    assert_eq!(view.cells.len(), 225);
    assert_eq!(view.cell(7, 7), Some(Rgb::new(100, 100, 0)));
    assert_eq!(view.cell(0, 0), Some(Rgb::new(30, 30, 0)));
    assert_eq!(view.cell(14, 0), Some(Rgb::new(170, 30, 0)));
    assert_eq!(view.cell(15, 0), None);
    assert_eq!(view.extent(), 150.0);
}

#[test]
fn test_magnifier_outline_on_cell_boundaries() {
    let img = ramp(20, 20);
    let view = MagnifierView::build(
        &img,
        10,
        10,
        Point::new(0.0, 0.0),
        &SamplerConfig::default(),
        &MagnifierConfig::default(),
    )
    .unwrap();

    assert_eq!(view.window.x, 60.0);
    assert_eq!(view.window.y, 60.0);
    assert_eq!(view.window.width, 30.0);
    assert_eq!(view.window.height, 30.0);
    assert_eq!(view.crosshair, Point::new(75.0, 75.0));
}

#[test]
fn test_magnifier_sample_matches_outlined_cells() {
    let mut img = ramp(20, 20);
    img.put_pixel(11, 9, Rgba([255, 255, 255, 255]));
    let view = MagnifierView::build(
        &img,
        10,
        10,
        Point::new(0.0, 0.0),
        &SamplerConfig::default(),
        &MagnifierConfig::default(),
    )
    .unwrap();

    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
    for row in 6..=8 {
        for col in 6..=8 {
            let c = view.cell(col, row).unwrap();
            r += c.r as u32;
            g += c.g as u32;
            b += c.b as u32;
        }
    }
    let expected = Rgb::new(
        ((r + 4) / 9) as u8,
        ((g + 4) / 9) as u8,
        ((b + 4) / 9) as u8,
    );
    assert_eq!(view.sample, expected);
    assert_eq!(view.sample, sample_neighborhood(&img, 10, 10, 1).unwrap());
    assert_eq!(view.hex, expected.to_hex());
}

#[test]
fn test_magnifier_blank_outside_image() {
    let img = ramp(20, 20);
    let view = MagnifierView::build(
        &img,
        0,
        0,
        Point::new(0.0, 0.0),
        &SamplerConfig::default(),
        &MagnifierConfig::default(),
    )
    .unwrap();

    assert_eq!(view.cell(6, 6), None);
    assert_eq!(view.cell(7, 6), None);
    assert_eq!(view.cell(7, 7), Some(Rgb::new(0, 0, 0)));
    assert_eq!(view.cell(8, 8), Some(Rgb::new(10, 10, 0)));
}

#[test]
fn test_magnifier_anchor_offset_from_pointer() {
    let img = ramp(4, 4);
    let view = MagnifierView::build(
        &img,
        1,
        1,
        Point::new(100.0, 200.0),
        &SamplerConfig::default(),
        &MagnifierConfig::default(),
    )
    .unwrap();
    assert_eq!(view.anchor, Point::new(120.0, 125.0));
}

#[test]
fn test_magnifier_none_outside_image() {
    let img = ramp(4, 4);
    let view = MagnifierView::build(
        &img,
        4,
        0,
        Point::new(0.0, 0.0),
        &SamplerConfig::default(),
        &MagnifierConfig::default(),
    );
    assert!(view.is_none());
}
