pub mod playback;
pub mod scheduler;
pub mod timeline_math;
