//! Shared engine constants: frame rate, zoom bounds, curve bounds, and the
//! configuration ranges exposed to the control surface.

/// Nominal frame rate used to discretize playback.
pub const FPS: f64 = 60.0;
pub const FRAME_DURATION_MS: f64 = 1000.0 / FPS;
/// Interval between refresh polls of the playback driver.
pub const REFRESH_INTERVAL_MS: u64 = 16;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 4.0;
pub const ZOOM_DEFAULT: f64 = 1.0;
/// Zoom change per wheel notch or zoom hotkey.
pub const ZOOM_STEP: f64 = 0.25;

/// Minimum spacing between ruler markers, in track units.
pub const MARKER_MIN_SPACING: f64 = 8.0;
/// Normalized track width the marker density is computed against.
pub const MARKER_TRACK_WIDTH: f64 = 100.0;

/// Percent of total progress jumped by Ctrl/Cmd + arrow.
pub const JUMP_PERCENT: f64 = 10.0;

pub const CURVE_X_MIN: f64 = 0.0;
pub const CURVE_X_MAX: f64 = 1.0;
pub const CURVE_Y_MIN: f64 = -0.5;
pub const CURVE_Y_MAX: f64 = 1.5;

/// Curve editor plot size in pixels (square).
pub const CURVE_GRAPH_SIZE: f64 = 240.0;
pub const CURVE_GRAPH_PADDING: f64 = 24.0;

pub const DURATION_MIN_MS: f64 = 100.0;
pub const DURATION_MAX_MS: f64 = 3000.0;
pub const DURATION_DEFAULT_MS: f64 = 500.0;
pub const DELAY_MIN_MS: f64 = 0.0;
pub const DELAY_MAX_MS: f64 = 2000.0;
pub const DELAY_DEFAULT_MS: f64 = 500.0;
pub const TOGGLE_COUNT_MIN: u32 = 1;
pub const TOGGLE_COUNT_MAX: u32 = 16;
pub const TOGGLE_COUNT_DEFAULT: u32 = 2;
pub const SPEED_MIN: f64 = 0.1;
pub const SPEED_MAX: f64 = 4.0;
pub const SPEED_DEFAULT: f64 = 1.0;

pub const SPEED_PRESETS: [(&str, f64); 6] = [
    ("0.1x", 0.1),
    ("0.25x", 0.25),
    ("0.5x", 0.5),
    ("1x", 1.0),
    ("2x", 2.0),
    ("4x", 4.0),
];

pub const COLOR_ACTIVE: &str = "#275EFE";
pub const COLOR_SUCCESS: &str = "#10B981";
pub const COLOR_WARNING: &str = "#F59E0B";
pub const COLOR_DANGER: &str = "#EF4444";
pub const COLOR_DEFAULT: &str = "#3a3a3a";
pub const COLOR_DEFAULT_HOVER: &str = "#4a4a4a";
pub const COLOR_KNOB: &str = "#ffffff";
