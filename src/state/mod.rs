//! State module
//!
//! Data owned by a studio session:
//! - Config: timing, animation and color settings
//! - Bezier: easing curves and presets
//! - CurveEditor: interactive curve editing against a reference
//! - Studio: the session tying timeline, editor and configs together

mod bezier;
mod config;
mod curve_editor;
mod studio;

pub use bezier::*;
pub use config::*;
pub use curve_editor::*;
pub use studio::*;
