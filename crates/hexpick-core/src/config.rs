use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BUTTON_ZOOM_FACTOR, DEFAULT_MAGNIFIER_OFFSET, DEFAULT_MAGNIFIER_SIZE,
    DEFAULT_MAGNIFIER_ZOOM, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SAMPLE_RADIUS,
    DEFAULT_SUCCESS_TIMEOUT_MS, DEFAULT_WHEEL_ZOOM_IN, DEFAULT_WHEEL_ZOOM_OUT,
};
use crate::error::{PickerError, Result};

/// All tunable parameters of a picking session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub magnifier: MagnifierConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Factor applied by the zoom in/out buttons.
    pub button_zoom_factor: f64,
    /// Factor applied by one wheel step toward the viewer.
    pub wheel_zoom_in: f64,
    /// Factor applied by one wheel step away from the viewer.
    pub wheel_zoom_out: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            button_zoom_factor: DEFAULT_BUTTON_ZOOM_FACTOR,
            wheel_zoom_in: DEFAULT_WHEEL_ZOOM_IN,
            wheel_zoom_out: DEFAULT_WHEEL_ZOOM_OUT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Averaging window is `(2 * radius + 1)` pixels on a side.
    pub radius: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SAMPLE_RADIUS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnifierConfig {
    /// Grid side in image pixels (odd).
    pub size: u32,
    /// Screen pixels per image pixel.
    pub zoom: u32,
    /// Screen offset of the preview from the pointer.
    pub offset: [f64; 2],
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MAGNIFIER_SIZE,
            zoom: DEFAULT_MAGNIFIER_ZOOM,
            offset: DEFAULT_MAGNIFIER_OFFSET,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub success_timeout_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: DEFAULT_SUCCESS_TIMEOUT_MS,
        }
    }
}

impl PickerConfig {
    /// Reject parameter combinations the session cannot honor.
    pub fn validate(&self) -> Result<()> {
        let v = &self.viewport;
        if !(v.min_scale > 0.0) {
            return Err(invalid(format!("min_scale must be positive, got {}", v.min_scale)));
        }
        if v.min_scale > v.max_scale {
            return Err(invalid(format!(
                "min_scale {} exceeds max_scale {}",
                v.min_scale, v.max_scale
            )));
        }
        if !(v.button_zoom_factor > 1.0) {
            return Err(invalid(format!(
                "button_zoom_factor must be greater than 1, got {}",
                v.button_zoom_factor
            )));
        }
        if !(v.wheel_zoom_in > 1.0) {
            return Err(invalid(format!(
                "wheel_zoom_in must be greater than 1, got {}",
                v.wheel_zoom_in
            )));
        }
        if !(v.wheel_zoom_out > 0.0 && v.wheel_zoom_out < 1.0) {
            return Err(invalid(format!(
                "wheel_zoom_out must be between 0 and 1, got {}",
                v.wheel_zoom_out
            )));
        }

        let m = &self.magnifier;
        if m.size == 0 || m.size % 2 == 0 {
            return Err(invalid(format!("magnifier size must be odd, got {}", m.size)));
        }
        if m.zoom == 0 {
            return Err(invalid("magnifier zoom must be at least 1".to_string()));
        }
        if self.sampler.radius * 2 + 1 > m.size {
            return Err(invalid(format!(
                "sample window {0}x{0} does not fit the {1}x{1} magnifier",
                self.sampler.radius * 2 + 1,
                m.size
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> PickerError {
    PickerError::InvalidConfig(message)
}
