//! Frame/progress conversions for a single fixed-rate timeline.
//!
//! Every conversion special-cases `total_frames == 1`, where the last frame is
//! also the first and progress is pinned to 0.

use crate::constants::FPS;

/// Number of addressable frames for a playback pass of `effective_duration_ms`.
///
/// Never returns less than 1.
pub fn total_frames_for(effective_duration_ms: f64) -> u32 {
    let frames = ((effective_duration_ms / 1000.0) * FPS).ceil();
    if !frames.is_finite() || frames < 1.0 {
        return 1;
    }
    if frames >= u32::MAX as f64 {
        return u32::MAX;
    }
    frames as u32
}

/// Index of the last frame.
pub fn last_frame(total_frames: u32) -> u32 {
    total_frames.max(1) - 1
}

/// Clamp any signed frame request into `[0, total_frames - 1]`.
pub fn clamp_frame(frame: i64, total_frames: u32) -> u32 {
    frame.clamp(0, last_frame(total_frames) as i64) as u32
}

/// Progress of a committed (non-ticking) frame.
pub fn progress_for_frame(frame: u32, total_frames: u32) -> f64 {
    if total_frames <= 1 {
        return 0.0;
    }
    frame.min(last_frame(total_frames)) as f64 / last_frame(total_frames) as f64
}

/// Frame reached by a continuous progress value during playback (floors).
pub fn frame_for_progress(progress: f64, total_frames: u32) -> u32 {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let frame = (progress * last_frame(total_frames) as f64).floor();
    (frame as u32).min(last_frame(total_frames))
}

/// Nearest frame for a percentage of the whole pass (rounds).
pub fn frame_for_percent(percent: f64, total_frames: u32) -> i64 {
    if percent.is_nan() {
        return 0;
    }
    ((percent / 100.0) * last_frame(total_frames) as f64).round() as i64
}

/// Convert a frame index to milliseconds into the pass.
pub fn ms_from_frames(frame: u32, effective_duration_ms: f64, total_frames: u32) -> f64 {
    progress_for_frame(frame, total_frames) * effective_duration_ms
}
