//! Refresh-rate playback driver.
//!
//! Stands in for the display refresh: every `REFRESH_INTERVAL_MS` it hands the
//! due tick (if any) to the target with the current clock time. The target
//! is borrowed only inside one refresh, never across an await, so commands
//! from the host can interleave freely on the same thread.

use std::cell::RefCell;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::constants::REFRESH_INTERVAL_MS;
use crate::core::scheduler::{Clock, FrameScheduler};
use crate::timeline::Timeline;

/// Anything that owns a host-drained timeline and can be refreshed by the
/// driver: a bare [`Timeline`] or a whole studio session.
pub trait PlaybackTarget {
    /// Fire the due tick, if any, at `now_ms`. Returns whether one was
    /// delivered and honored.
    fn refresh(&mut self, now_ms: f64) -> bool;

    /// Stop playback and drop any outstanding tick.
    fn stop(&mut self);
}

impl PlaybackTarget for Timeline<FrameScheduler> {
    fn refresh(&mut self, now_ms: f64) -> bool {
        match self.scheduler_mut().take_due() {
            Some(handle) => self.tick(handle, now_ms),
            None => false,
        }
    }

    fn stop(&mut self) {
        self.teardown();
    }
}

/// Service one refresh: fire the due tick, if any.
///
/// Returns whether a tick was delivered and honored.
pub fn refresh<T: PlaybackTarget>(target: &RefCell<T>, clock: &impl Clock) -> bool {
    target.borrow_mut().refresh(clock.now_ms())
}

/// Drive `target` until `shutdown` fires or its sender is dropped, then
/// stop it so no tick outlives the driver.
///
/// Returns the number of ticks delivered.
pub async fn run_playback<T: PlaybackTarget>(
    target: &RefCell<T>,
    clock: &impl Clock,
    mut shutdown: oneshot::Receiver<()>,
) -> u64 {
    let mut interval = tokio::time::interval(Duration::from_millis(REFRESH_INTERVAL_MS));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut delivered = 0u64;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = interval.tick() => {
                if refresh(target, clock) {
                    delivered += 1;
                }
            }
        }
    }

    target.borrow_mut().stop();
    debug!(delivered, "playback driver stopped");
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::MonotonicClock;
    use crate::state::{AnimationConfig, ColorConfig, Studio, TimelineConfig};

    struct FixedClock(f64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_refresh_without_due_tick() {
        let timeline = RefCell::new(Timeline::new(TimelineConfig::default()));
        assert!(!refresh(&timeline, &FixedClock(0.0)));
    }

    #[test]
    fn test_refresh_delivers_due_tick() {
        let timeline = RefCell::new(Timeline::new(TimelineConfig::new(500.0, 1.0)));
        timeline.borrow_mut().play();
        assert!(refresh(&timeline, &FixedClock(0.0)));
        assert!(refresh(&timeline, &FixedClock(250.0)));
        assert_eq!(timeline.borrow().progress(), 0.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_completes_a_pass() {
        let clock = MonotonicClock::new();
        let timeline = RefCell::new(Timeline::new(TimelineConfig::new(500.0, 1.0)));
        timeline.borrow_mut().play();
        let (stop, shutdown) = oneshot::channel();

        let observed = &timeline;
        let watcher = async move {
            tokio::time::sleep(Duration::from_millis(600)).await;
            let snapshot = observed.borrow().snapshot();
            let _ = stop.send(());
            snapshot
        };
        let (delivered, snapshot) = tokio::join!(run_playback(&timeline, &clock, shutdown), watcher);

        assert!(delivered > 1);
        assert_eq!(snapshot.progress, 1.0);
        assert_eq!(snapshot.current_frame, 29);
        assert!(!snapshot.is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_tears_down_playback() {
        let clock = MonotonicClock::new();
        let timeline = RefCell::new(Timeline::new(TimelineConfig::new(3000.0, 1.0)));
        timeline.borrow_mut().play();
        let (stop, shutdown) = oneshot::channel();

        let watcher = async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = stop.send(());
        };
        tokio::join!(run_playback(&timeline, &clock, shutdown), watcher);

        let timeline = timeline.borrow();
        assert!(!timeline.is_playing());
        assert!(timeline.pending_tick().is_none());
        assert!(!timeline.scheduler().has_due());
        assert!(timeline.progress() > 0.0 && timeline.progress() < 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_runs_a_studio_session() {
        let clock = MonotonicClock::new();
        let config = AnimationConfig {
            duration: 500.0,
            ..Default::default()
        };
        let studio = RefCell::new(Studio::new(config, ColorConfig::default()));
        studio.borrow_mut().toggle_playback();
        let (stop, shutdown) = oneshot::channel();

        let observed = &studio;
        let watcher = async move {
            tokio::time::sleep(Duration::from_millis(600)).await;
            let stats = observed.borrow().stats();
            let _ = stop.send(());
            stats
        };
        let (delivered, stats) = tokio::join!(run_playback(&studio, &clock, shutdown), watcher);

        assert!(delivered > 1);
        assert_eq!(stats.progress_percent, 100);
        assert_eq!(stats.frame, stats.last_frame);
        let studio = studio.borrow();
        assert!(studio.checked());
        assert!(studio.timeline().is_completed());
        assert!(studio.timeline().pending_tick().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sender_stops_driver() {
        let clock = MonotonicClock::new();
        let timeline = RefCell::new(Timeline::new(TimelineConfig::default()));
        let (stop, shutdown) = oneshot::channel::<()>();
        drop(stop);
        assert_eq!(run_playback(&timeline, &clock, shutdown).await, 0);
    }
}
