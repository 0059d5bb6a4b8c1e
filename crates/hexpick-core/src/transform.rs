//! Mapping between viewport (canvas) space and image pixel space.
//!
//! The renderer composes, from the outside in: pan by `(offset_x, offset_y)`,
//! scale by `scale` about the canvas center, then draw the image centered in
//! the canvas. The pan is applied in viewport space, so a pointer delta maps
//! one-to-one onto the offset at any zoom level.

use serde::{Deserialize, Serialize};

/// A position in continuous 2D space (viewport or image).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a canvas or image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

/// Zoom and pan of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Integer pixel coordinate. May lie outside the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelPos {
    pub x: i64,
    pub y: i64,
}

impl PixelPos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The coordinate as unsigned pixel indices, or `None` outside
    /// `[0, width) x [0, height)`.
    pub fn within(self, width: u32, height: u32) -> Option<(u32, u32)> {
        if self.x >= 0 && self.y >= 0 && self.x < width as i64 && self.y < height as i64 {
            Some((self.x as u32, self.y as u32))
        } else {
            None
        }
    }
}

/// Continuous image-space position under viewport position `p`.
pub fn to_image_space_f(p: Point, view: &ViewState, canvas: Size, image: Size) -> Point {
    let c = canvas.center();

    // Undo the pan.
    let mut x = p.x - view.offset_x;
    let mut y = p.y - view.offset_y;

    // Undo the scale about the canvas center.
    x = (x - c.x) / view.scale + c.x;
    y = (y - c.y) / view.scale + c.y;

    // Undo the image centering.
    x -= (canvas.width - image.width) / 2.0;
    y -= (canvas.height - image.height) / 2.0;

    Point::new(x, y)
}

/// Pixel under viewport position `p`, floored to integers.
pub fn to_image_space(p: Point, view: &ViewState, canvas: Size, image: Size) -> PixelPos {
    let q = to_image_space_f(p, view, canvas, image);
    PixelPos::new(q.x.floor() as i64, q.y.floor() as i64)
}

/// Viewport position of image-space point `p`.
pub fn to_viewport_space(p: Point, view: &ViewState, canvas: Size, image: Size) -> Point {
    let c = canvas.center();

    let mut x = p.x + (canvas.width - image.width) / 2.0;
    let mut y = p.y + (canvas.height - image.height) / 2.0;

    x = (x - c.x) * view.scale + c.x;
    y = (y - c.y) * view.scale + c.y;

    Point::new(x + view.offset_x, y + view.offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_view_maps_canvas_center_to_image_center() {
        let canvas = Size::new(200.0, 100.0);
        let image = Size::new(40.0, 20.0);
        let p = to_image_space(canvas.center(), &ViewState::default(), canvas, image);
        assert_eq!(p, PixelPos::new(20, 10));
    }

    #[test]
    fn negative_positions_floor_away_from_zero() {
        let canvas = Size::new(10.0, 10.0);
        let image = Size::new(10.0, 10.0);
        let p = to_image_space(Point::new(-0.5, -0.5), &ViewState::default(), canvas, image);
        assert_eq!(p, PixelPos::new(-1, -1));
        assert_eq!(p.within(10, 10), None);
    }
}
