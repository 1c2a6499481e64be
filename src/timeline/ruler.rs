//! Frame ruler: zoom-dependent marker density.

use crate::constants::{MARKER_MIN_SPACING, MARKER_TRACK_WIDTH, ZOOM_MAX, ZOOM_MIN};
use crate::core::timeline_math::last_frame;

/// Marker frames for the ruler at one zoom level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMarkers {
    /// Strictly increasing, always starts at 0 and ends at the last frame
    pub frames: Vec<u32>,
    /// Frame distance between regular markers
    pub step: u32,
    /// Marker budget before the last frame is appended
    pub max_markers: u32,
}

/// Compute ruler markers so adjacent markers stay at least
/// `MARKER_MIN_SPACING` apart on a track `MARKER_TRACK_WIDTH * zoom` wide.
pub fn frame_markers(total_frames: u32, zoom: f64) -> FrameMarkers {
    let total_frames = total_frames.max(1);
    let zoom = if zoom.is_nan() { ZOOM_MIN } else { zoom.clamp(ZOOM_MIN, ZOOM_MAX) };
    let max_markers = ((MARKER_TRACK_WIDTH * zoom) / MARKER_MIN_SPACING).floor().max(1.0) as u32;
    let step = total_frames.div_ceil(max_markers).max(1);

    let mut frames: Vec<u32> = (0..total_frames).step_by(step as usize).collect();
    let last = last_frame(total_frames);
    if frames.last() != Some(&last) {
        frames.push(last);
    }

    FrameMarkers {
        frames,
        step,
        max_markers,
    }
}

impl FrameMarkers {
    /// Whether the marker at `frame` carries a text label.
    pub fn show_label(&self, frame: u32) -> bool {
        let last = self.frames.last().copied().unwrap_or(0);
        self.step <= 10 || frame == 0 || frame == last || frame % (self.step * 2) == 0
    }

    /// Major ticks are drawn taller.
    pub fn is_major(&self, frame: u32) -> bool {
        self.step <= 5 || frame % (self.step * 2) == 0
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Horizontal position of `frame` along the track, in percent.
pub fn position_percent(frame: u32, total_frames: u32) -> f64 {
    if total_frames <= 1 {
        return 0.0;
    }
    frame as f64 / last_frame(total_frames) as f64 * 100.0
}

/// Zoom readout, e.g. `1.5x`.
pub fn zoom_label(zoom: f64) -> String {
    format!("{:.1}x", zoom)
}

pub fn can_zoom_in(zoom: f64) -> bool {
    zoom < ZOOM_MAX
}

pub fn can_zoom_out(zoom: f64) -> bool {
    zoom > ZOOM_MIN
}
