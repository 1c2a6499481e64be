//! Animation Studio
//!
//! Frame-accurate playback of a single eased transition, with an interactive
//! cubic-bezier editor to compare an edited curve against its reference.
//!
//! - [`timeline::Timeline`]: frame/progress state machine driven by an injected
//!   [`core::scheduler::TickScheduler`]
//! - [`core::playback::run_playback`]: tokio refresh loop for a live host
//! - [`state::CurveEditor`] and [`state::CubicBezier`]: curve sampling and editing
//! - [`hotkeys`] and [`timeline::scrub`]: keyboard, pointer and wheel resolvers
//! - [`state::Studio`]: the whole session wired together
//!
//! The library never installs a `tracing` subscriber; hosts do.

pub mod constants;
pub mod core;
pub mod error;
pub mod hotkeys;
pub mod state;
pub mod timeline;
pub mod utils;

pub use error::{Result, StudioError};
pub use state::{AnimationConfig, CubicBezier, CurveEditor, Studio, TimelineConfig};
pub use timeline::{PlaybackState, Timeline, TimelineSnapshot};
