//! Timeline module
//!
//! - engine: playback state machine
//! - ruler: zoom-dependent frame markers
//! - scrub: pointer and wheel input on the track

pub mod engine;
pub mod ruler;
pub mod scrub;

pub use engine::{FrameObserver, PlaybackState, Timeline, TimelineSnapshot};
pub use ruler::{frame_markers, FrameMarkers};
pub use scrub::{frame_at_pointer, wheel_zoom, ScrubGesture, TrackGeometry};
