//! Tick scheduling
//!
//! Playback advances through a chain of "run at next refresh" requests. The
//! timeline never owns a live display clock; it asks a [`TickScheduler`] for a
//! handle and later receives that handle back together with a timestamp.
//!
//! - [`FrameScheduler`] - deterministic scheduler the host (or a test) drains
//! - [`Clock`] / [`MonotonicClock`] - timestamp source for ticks, in milliseconds

use tokio::time::Instant;

/// Handle to one requested tick.
///
/// Handles are unique per scheduler; a handle that has been cancelled or
/// superseded never matches the timeline's outstanding tick again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// "Run at next refresh" plus cancellation.
pub trait TickScheduler {
    /// Request one tick at the next refresh.
    fn request_tick(&mut self) -> TickHandle;

    /// Invalidate a handle previously returned by [`request_tick`](Self::request_tick).
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Host-driven scheduler holding at most one due tick.
///
/// The host refresh loop calls [`take_due`](Self::take_due) once per refresh
/// and forwards the handle to `Timeline::tick`.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    due: Option<TickHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tick waiting for the next refresh, if any.
    pub fn due(&self) -> Option<TickHandle> {
        self.due
    }

    /// Remove and return the due tick.
    pub fn take_due(&mut self) -> Option<TickHandle> {
        self.due.take()
    }

    pub fn has_due(&self) -> bool {
        self.due.is_some()
    }
}

impl TickScheduler for FrameScheduler {
    // A request replaces any tick still due; only the newest handle can fire.
    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.due = Some(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.due == Some(handle) {
            self.due = None;
        }
    }
}

/// Millisecond timestamp source for ticks.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock measured from its creation.
///
/// Built on `tokio::time::Instant` so paused-time tests advance it too.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
