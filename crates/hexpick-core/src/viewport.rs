//! Zoom, pan and image selection.
//!
//! Every mutating method returns `true` when the view changed and the
//! image needs to be re-rendered.

use tracing::debug;

use crate::config::ViewportConfig;
use crate::library::ImageLibrary;
use crate::transform::{to_image_space, to_viewport_space, Point, Size, ViewState};

/// Wheel direction. `In` enlarges the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction of a wheel event from its vertical delta, positive when
    /// the wheel rolls away from the user.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct ViewportController {
    config: ViewportConfig,
    view: ViewState,
    canvas: Size,
    /// Last pointer position of the active pan gesture.
    pan_anchor: Option<Point>,
    library: ImageLibrary,
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            view: ViewState::default(),
            canvas: Size::default(),
            pan_anchor: None,
            library: ImageLibrary::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn library(&self) -> &ImageLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut ImageLibrary {
        &mut self.library
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// `round(scale * 100)%`.
    pub fn zoom_label(&self) -> String {
        format!("{}%", (self.view.scale * 100.0).round() as i64)
    }

    pub fn set_canvas_size(&mut self, canvas: Size) -> bool {
        if self.canvas == canvas {
            return false;
        }
        self.canvas = canvas;
        true
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_scale(self.view.scale * self.config.button_zoom_factor)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_scale(self.view.scale / self.config.button_zoom_factor)
    }

    fn set_scale(&mut self, scale: f64) -> bool {
        let scale = self.clamp_scale(scale);
        if scale == self.view.scale {
            return false;
        }
        self.view.scale = scale;
        debug!(scale, "zoom");
        true
    }

    /// Zoom one wheel step while keeping the point under `pointer` fixed.
    pub fn zoom_at(&mut self, pointer: Point, direction: ZoomDirection) -> bool {
        let factor = match direction {
            ZoomDirection::In => self.config.wheel_zoom_in,
            ZoomDirection::Out => self.config.wheel_zoom_out,
        };
        let new_scale = self.clamp_scale(self.view.scale * factor);
        if new_scale == self.view.scale {
            return false;
        }

        // Pointer relative to the panned canvas center, in unscaled units.
        let c = self.canvas.center();
        let rel_x = pointer.x - c.x - self.view.offset_x;
        let rel_y = pointer.y - c.y - self.view.offset_y;
        let zoom_point_x = rel_x / self.view.scale;
        let zoom_point_y = rel_y / self.view.scale;

        self.view.scale = new_scale;

        let new_zoom_point_x = rel_x / self.view.scale;
        let new_zoom_point_y = rel_y / self.view.scale;
        self.view.offset_x += (new_zoom_point_x - zoom_point_x) * self.view.scale;
        self.view.offset_y += (new_zoom_point_y - zoom_point_y) * self.view.scale;

        debug!(scale = new_scale, ?pointer, "zoom at pointer");
        true
    }

    pub fn reset_zoom(&mut self) -> bool {
        let changed = self.view != ViewState::default();
        self.view = ViewState::default();
        changed
    }

    pub fn begin_pan(&mut self, pointer: Point) {
        self.pan_anchor = Some(pointer);
    }

    /// Move the pan gesture to `pointer`. No-op without an active gesture.
    pub fn pan_to(&mut self, pointer: Point) -> bool {
        let Some(anchor) = self.pan_anchor else {
            return false;
        };
        self.pan_anchor = Some(pointer);
        self.pan(pointer.x - anchor.x, pointer.y - anchor.y)
    }

    /// Shift the view by a raw pointer delta. No-op without an active
    /// gesture.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        if self.pan_anchor.is_none() || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        self.view.offset_x += dx;
        self.view.offset_y += dy;
        true
    }

    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    pub fn previous_image(&mut self) -> bool {
        if !self.library.previous() {
            return false;
        }
        self.reset_zoom();
        true
    }

    pub fn next_image(&mut self) -> bool {
        if !self.library.next() {
            return false;
        }
        self.reset_zoom();
        true
    }

    /// Pixel of the current image under viewport position `pointer`.
    pub fn pixel_at(&self, pointer: Point) -> Option<(u32, u32)> {
        let image = self.library.current()?;
        to_image_space(pointer, &self.view, self.canvas, image.size())
            .within(image.width(), image.height())
    }

    /// Viewport position of image point `p` on the current image.
    pub fn viewport_point(&self, p: Point) -> Option<Point> {
        let image = self.library.current()?;
        Some(to_viewport_space(p, &self.view, self.canvas, image.size()))
    }
}
