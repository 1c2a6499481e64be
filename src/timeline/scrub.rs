//! Pointer and wheel input on the timeline track.

use crate::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use crate::core::scheduler::TickScheduler;
use crate::core::timeline_math::{clamp_frame, last_frame};
use crate::timeline::engine::Timeline;

/// Horizontal extent of the track in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the track at `client_x`, clamped to `[0, 1]`.
    pub fn percent_at(&self, client_x: f64) -> f64 {
        if self.width.is_nan() || self.width <= 0.0 {
            return 0.0;
        }
        let percent = (client_x - self.left) / self.width;
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, 1.0)
    }
}

/// Frame under the pointer, rounded to the nearest frame.
pub fn frame_at_pointer(client_x: f64, track: TrackGeometry, total_frames: u32) -> u32 {
    let percent = track.percent_at(client_x);
    let frame = (percent * last_frame(total_frames) as f64).round() as i64;
    clamp_frame(frame, total_frames)
}

/// Press-drag-release scrubbing on the track.
///
/// Every press and every move while pressed seeks the timeline, which also
/// stops playback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrubGesture {
    track: TrackGeometry,
    active: bool,
}

impl ScrubGesture {
    pub fn new(track: TrackGeometry) -> Self {
        Self {
            track,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Track moved or resized (layout change).
    pub fn set_track(&mut self, track: TrackGeometry) {
        self.track = track;
    }

    pub fn pointer_down<S: TickScheduler>(&mut self, client_x: f64, timeline: &mut Timeline<S>) -> u32 {
        self.active = true;
        self.seek(client_x, timeline)
    }

    /// Returns the committed frame, or `None` when no press is active.
    pub fn pointer_move<S: TickScheduler>(
        &mut self,
        client_x: f64,
        timeline: &mut Timeline<S>,
    ) -> Option<u32> {
        self.active.then(|| self.seek(client_x, timeline))
    }

    pub fn pointer_up(&mut self) {
        self.active = false;
    }

    fn seek<S: TickScheduler>(&self, client_x: f64, timeline: &mut Timeline<S>) -> u32 {
        let frame = frame_at_pointer(client_x, self.track, timeline.total_frames());
        timeline.set_frame(frame as i64);
        frame
    }
}

/// Zoom after one wheel event, or `None` when the gesture is not a zoom
/// (neither Ctrl nor Meta held). A handled wheel event suppresses scrolling.
pub fn wheel_zoom(zoom: f64, delta_y: f64, ctrl: bool, meta: bool) -> Option<f64> {
    if !(ctrl || meta) {
        return None;
    }
    let delta = if delta_y > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
    Some((zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX))
}
