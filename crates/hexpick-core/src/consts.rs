/// Lower zoom bound.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

/// Upper zoom bound.
pub const DEFAULT_MAX_SCALE: f64 = 5.0;

/// Scale multiplier for the zoom in/out buttons.
pub const DEFAULT_BUTTON_ZOOM_FACTOR: f64 = 1.2;

/// Scale multiplier for one wheel step toward the viewer.
pub const DEFAULT_WHEEL_ZOOM_IN: f64 = 1.1;

/// Scale multiplier for one wheel step away from the viewer.
pub const DEFAULT_WHEEL_ZOOM_OUT: f64 = 0.9;

/// Neighborhood radius for color averaging. 1 gives a 3x3 window.
pub const DEFAULT_SAMPLE_RADIUS: u32 = 1;

/// Side of the magnifier grid in image pixels. Must be odd.
pub const DEFAULT_MAGNIFIER_SIZE: u32 = 15;

/// Screen pixels per image pixel inside the magnifier.
pub const DEFAULT_MAGNIFIER_ZOOM: u32 = 10;

/// Screen offset of the magnifier from the pointer.
pub const DEFAULT_MAGNIFIER_OFFSET: [f64; 2] = [20.0, -75.0];

/// Time a success message stays visible before the status line reverts.
pub const DEFAULT_SUCCESS_TIMEOUT_MS: u64 = 3000;

/// Neutral status text.
pub const READY_MESSAGE: &str = "Ready";

/// Base name used for exports when no CSV name is known.
pub const DEFAULT_EXPORT_BASE: &str = "colors";

/// Suffix appended to the base name of exported files.
pub const EXPORT_SUFFIX: &str = "_with_hex.csv";

/// MIME type of exported files.
pub const CSV_MIME: &str = "text/csv";

/// OMIT value marking a row as omitted.
pub const OMIT_MARKER: &str = "X";
