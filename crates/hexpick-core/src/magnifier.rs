use image::RgbaImage;

use crate::config::{MagnifierConfig, SamplerConfig};
use crate::sampler::{neighborhood, sample_neighborhood, Rgb};
use crate::transform::Point;

/// Axis-aligned rectangle in magnifier-local screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything needed to draw the magnified preview around one image pixel.
///
/// Cells are nearest-neighbor: each image pixel becomes a `zoom x zoom`
/// block. Cells outside the image are `None` and left blank.
#[derive(Clone, Debug, PartialEq)]
pub struct MagnifierView {
    /// Image pixel under the pointer.
    pub center: (u32, u32),
    /// Grid side in image pixels.
    pub size: u32,
    /// Screen pixels per image pixel.
    pub zoom: u32,
    /// Row-major `size * size` cells.
    pub cells: Vec<Option<Rgb>>,
    /// Averaged color of the sampling window.
    pub sample: Rgb,
    pub hex: String,
    /// Outline of the sampling window, on exact cell boundaries.
    pub window: PreviewRect,
    /// Middle of the center cell, where the crosshair lines cross.
    pub crosshair: Point,
    /// Top-left of the preview in viewport space.
    pub anchor: Point,
}

impl MagnifierView {
    /// Build the preview for pixel `(cx, cy)` with the pointer at `pointer`
    /// (viewport space). Returns `None` if the pixel lies outside the image.
    pub fn build(
        buffer: &RgbaImage,
        cx: u32,
        cy: u32,
        pointer: Point,
        sampler: &SamplerConfig,
        config: &MagnifierConfig,
    ) -> Option<Self> {
        let sample = sample_neighborhood(buffer, cx, cy, sampler.radius)?;

        let half = config.size / 2;
        let cells = neighborhood(buffer, cx, cy, half)
            .map(|cell| cell.color)
            .collect();

        let zoom = config.zoom as f64;
        let first = (half - sampler.radius.min(half)) as f64 * zoom;
        let span = (sampler.radius.min(half) * 2 + 1) as f64 * zoom;
        let middle = (half as f64 + 0.5) * zoom;

        Some(Self {
            center: (cx, cy),
            size: config.size,
            zoom: config.zoom,
            cells,
            sample,
            hex: sample.to_hex(),
            window: PreviewRect {
                x: first,
                y: first,
                width: span,
                height: span,
            },
            crosshair: Point::new(middle, middle),
            anchor: Point::new(pointer.x + config.offset[0], pointer.y + config.offset[1]),
        })
    }

    /// Side of the rendered preview in screen pixels.
    pub fn extent(&self) -> f64 {
        (self.size * self.zoom) as f64
    }

    /// Cell at grid position `(col, row)`.
    pub fn cell(&self, col: u32, row: u32) -> Option<Rgb> {
        if col >= self.size || row >= self.size {
            return None;
        }
        self.cells[(row * self.size + col) as usize]
    }
}
