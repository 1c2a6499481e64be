//! Timeline state machine
//!
//! Owns frame, progress, play state and zoom for one single-segment timeline.
//!
//! # States
//!
//! - **Idle**: not playing, progress anywhere in `[0, 1)`
//! - **Playing**: a tick is outstanding and progress follows the clock
//! - **Completed**: progress is `1` and playback has stopped
//!
//! # Invariants
//!
//! 1. At most one tick is outstanding; `pause`, `reset`, `set_frame` and
//!    `teardown` cancel it before committing, so a late tick can never
//!    overwrite an explicit scrub.
//! 2. Outside a tick, `progress == frame / (total_frames - 1)` (0 when there
//!    is a single frame).
//! 3. Every committed frame change from `tick`, `set_frame` or `reset` calls
//!    the frame observer exactly once, synchronously.
//! 4. `play()` at completion does not rewind; callers reset first.

use tracing::{debug, trace, warn};

use crate::constants::{FPS, FRAME_DURATION_MS, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN};
use crate::core::scheduler::{FrameScheduler, TickHandle, TickScheduler};
use crate::core::timeline_math::{
    clamp_frame, frame_for_percent, frame_for_progress, last_frame, ms_from_frames,
    progress_for_frame,
};
use crate::state::TimelineConfig;

/// Frame-change observer: `(frame, progress)`.
pub type FrameObserver = Box<dyn FnMut(u32, f64)>;

/// Coarse playback state derived from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Completed,
}

/// Read-only view of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineSnapshot {
    pub current_frame: u32,
    pub total_frames: u32,
    pub progress: f64,
    pub is_playing: bool,
    pub zoom: f64,
}

/// Resumption anchor; exists only to make pause/resume drift-free.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PlaybackAnchor {
    /// Clock time (ms) at which progress 0 would have been
    start_time: Option<f64>,
    /// Progress to resume from on the next first tick
    paused_progress: f64,
}

/// Frame-accurate timeline driven by an injected tick scheduler.
pub struct Timeline<S: TickScheduler = FrameScheduler> {
    config: TimelineConfig,
    total_frames: u32,
    current_frame: u32,
    progress: f64,
    is_playing: bool,
    zoom: f64,
    anchor: PlaybackAnchor,
    pending_tick: Option<TickHandle>,
    scheduler: S,
    observer: Option<FrameObserver>,
}

impl<S: TickScheduler> std::fmt::Debug for Timeline<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("config", &self.config)
            .field("total_frames", &self.total_frames)
            .field("current_frame", &self.current_frame)
            .field("progress", &self.progress)
            .field("is_playing", &self.is_playing)
            .field("zoom", &self.zoom)
            .field("pending_tick", &self.pending_tick)
            .finish_non_exhaustive()
    }
}

impl Timeline<FrameScheduler> {
    /// Timeline on a host-driven [`FrameScheduler`].
    pub fn new(config: TimelineConfig) -> Self {
        Self::with_scheduler(config, FrameScheduler::new())
    }
}

impl<S: TickScheduler> Timeline<S> {
    pub fn with_scheduler(config: TimelineConfig, scheduler: S) -> Self {
        Self {
            config,
            total_frames: config.total_frames(),
            current_frame: 0,
            progress: 0.0,
            is_playing: false,
            zoom: ZOOM_DEFAULT,
            anchor: PlaybackAnchor::default(),
            pending_tick: None,
            scheduler,
            observer: None,
        }
    }

    /// Install the frame-change observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(u32, f64) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            current_frame: self.current_frame,
            total_frames: self.total_frames,
            progress: self.progress,
            is_playing: self.is_playing,
            zoom: self.zoom,
        }
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_playing {
            PlaybackState::Playing
        } else if self.progress >= 1.0 {
            PlaybackState::Completed
        } else {
            PlaybackState::Idle
        }
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn last_frame(&self) -> u32 {
        last_frame(self.total_frames)
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_completed(&self) -> bool {
        self.state() == PlaybackState::Completed
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn fps(&self) -> f64 {
        FPS
    }

    /// Nominal length of one frame in milliseconds.
    pub fn frame_duration_ms(&self) -> f64 {
        FRAME_DURATION_MS
    }

    /// Position of the current frame within the pass, in milliseconds.
    pub fn current_time_ms(&self) -> f64 {
        ms_from_frames(
            self.current_frame,
            self.config.effective_duration_ms(),
            self.total_frames,
        )
    }

    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    pub fn effective_duration_ms(&self) -> f64 {
        self.config.effective_duration_ms()
    }

    /// The tick this timeline is waiting for, if any.
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending_tick
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Start or resume playback from the current progress.
    ///
    /// Does not rewind a completed timeline; the first tick recomputes
    /// progress 1 and completes again.
    pub fn play(&mut self) {
        if self.is_playing {
            return;
        }
        debug!(progress = self.progress, "timeline: play");
        self.is_playing = true;
        self.anchor.start_time = None;
        self.cancel_pending();
        self.pending_tick = Some(self.scheduler.request_tick());
    }

    /// Stop playback and keep the current position for resumption.
    pub fn pause(&mut self) {
        self.cancel_pending();
        if self.is_playing {
            debug!(progress = self.progress, frame = self.current_frame, "timeline: pause");
        }
        self.anchor.paused_progress = self.progress;
        self.anchor.start_time = None;
        self.is_playing = false;
    }

    /// Return to frame 0 from any state.
    pub fn reset(&mut self) {
        self.pause();
        debug!("timeline: reset");
        self.anchor.paused_progress = 0.0;
        self.current_frame = 0;
        self.progress = 0.0;
        self.notify(0, 0.0);
    }

    /// Seek to `frame` (clamped) and stop playback.
    pub fn set_frame(&mut self, frame: i64) {
        self.cancel_pending();
        let frame = clamp_frame(frame, self.total_frames);
        let progress = progress_for_frame(frame, self.total_frames);
        trace!(frame, progress, "timeline: set_frame");

        self.current_frame = frame;
        self.progress = progress;
        self.is_playing = false;
        self.anchor.paused_progress = progress;
        self.anchor.start_time = None;
        self.notify(frame, progress);
    }

    pub fn step_forward(&mut self, frames: u32) {
        self.set_frame(self.current_frame as i64 + frames as i64);
    }

    pub fn step_backward(&mut self, frames: u32) {
        self.set_frame(self.current_frame as i64 - frames as i64);
    }

    /// Seek to the frame nearest `percent` of the pass (0-100).
    pub fn jump_to_percent(&mut self, percent: f64) {
        self.set_frame(frame_for_percent(percent, self.total_frames));
    }

    /// Set zoom, clamped to `[0.5, 4.0]`. NaN is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Replace the timing config and re-derive the frame count.
    ///
    /// While playing, the anchor is rebased on the current progress so the
    /// next tick continues from the same position under the new duration.
    pub fn set_config(&mut self, config: TimelineConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.total_frames = config.total_frames();
        debug!(
            effective_duration_ms = config.effective_duration_ms(),
            total_frames = self.total_frames,
            "timeline: config replaced"
        );

        if self.is_playing {
            self.current_frame = self.current_frame.min(last_frame(self.total_frames));
            self.anchor.paused_progress = self.progress;
            self.anchor.start_time = None;
            return;
        }

        let frame = self.current_frame.min(last_frame(self.total_frames));
        let progress = progress_for_frame(frame, self.total_frames);
        let changed = frame != self.current_frame || progress != self.progress;
        self.current_frame = frame;
        self.progress = progress;
        self.anchor.paused_progress = progress;
        if changed {
            self.notify(frame, progress);
        }
    }

    /// Advance playback for the tick `handle` at clock time `now_ms`.
    ///
    /// Returns `false` when the handle is not the outstanding tick; such a
    /// tick is stale and leaves the state untouched.
    pub fn tick(&mut self, handle: TickHandle, now_ms: f64) -> bool {
        if self.pending_tick != Some(handle) {
            warn!(tick = handle.id(), "timeline: ignoring stale tick");
            return false;
        }
        self.pending_tick = None;
        if !self.is_playing {
            return false;
        }

        let duration = self.config.effective_duration_ms();
        let start = *self
            .anchor
            .start_time
            .get_or_insert(now_ms - self.anchor.paused_progress * duration);
        let elapsed = now_ms - start;
        let progress = (elapsed / duration).clamp(0.0, 1.0);
        let frame = frame_for_progress(progress, self.total_frames);
        trace!(tick = handle.id(), frame, progress, "timeline: tick");

        self.current_frame = frame;
        self.progress = progress;
        self.notify(frame, progress);

        if progress < 1.0 {
            self.pending_tick = Some(self.scheduler.request_tick());
        } else {
            debug!("timeline: completed");
            self.is_playing = false;
            self.anchor.paused_progress = 1.0;
            self.anchor.start_time = None;
        }
        true
    }

    /// Cancel any outstanding tick; the timeline stays where it is.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.is_playing = false;
        self.anchor.paused_progress = self.progress;
        self.anchor.start_time = None;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel_tick(handle);
        }
    }

    fn notify(&mut self, frame: u32, progress: f64) {
        if let Some(observer) = self.observer.as_mut() {
            observer(frame, progress);
        }
    }
}

impl<S: TickScheduler> Drop for Timeline<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
