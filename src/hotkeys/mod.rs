//! Hotkey system
//!
//! Keyboard control of the timeline.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Focus state that decides whether hotkeys are live
//! - **handle_hotkey()**: Maps key events to actions
//! - **apply_hotkey()**: Runs an action against a timeline
//!
//! Binding the physical key listener is left to the host; it forwards each key
//! press here and suppresses the default action when
//! [`HotkeyResult::prevents_default`] says so.

use dioxus::prelude::Key;
use tracing::debug;

use crate::constants::{JUMP_PERCENT, ZOOM_STEP};
use crate::core::scheduler::TickScheduler;
use crate::timeline::Timeline;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════
    /// Pause if playing, otherwise play (rewinding first when completed)
    PlayPause,
    /// Back one frame
    StepBackward,
    /// Forward one frame
    StepForward,
    /// Back ten percent of the pass
    JumpBackward,
    /// Forward ten percent of the pass
    JumpForward,
    SeekStart,
    SeekEnd,

    // ═══════════════════════════════════════════════════════════════
    // Timeline Zoom
    // ═══════════════════════════════════════════════════════════════
    TimelineZoomIn,
    TimelineZoomOut,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (suppresses all hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey handling is off (input field focused)
    Suppressed,
}

impl HotkeyResult {
    /// Whether the host must suppress the key's default browser/OS action.
    pub fn prevents_default(&self) -> bool {
        matches!(self, HotkeyResult::Action(_))
    }
}

/// Maps a key event to an action, considering the current context.
///
/// # Arguments
/// * `key` - The key that was pressed
/// * `modifiers` - Modifier keys held (shift, ctrl, alt, meta)
/// * `context` - Current focus context
///
/// # Returns
/// * `HotkeyResult::Action(action)` if a hotkey matched
/// * `HotkeyResult::NoMatch` if no binding exists
/// * `HotkeyResult::Suppressed` if input is focused
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    let jump = ctrl || meta;
    let action = match key {
        Key::ArrowLeft if jump => HotkeyAction::JumpBackward,
        Key::ArrowLeft => HotkeyAction::StepBackward,
        Key::ArrowRight if jump => HotkeyAction::JumpForward,
        Key::ArrowRight => HotkeyAction::StepForward,
        Key::Home => HotkeyAction::SeekStart,
        Key::End => HotkeyAction::SeekEnd,
        Key::Character(c) if c == " " => HotkeyAction::PlayPause,
        // Numpad +/- produce the same characters
        Key::Character(c) if c == "+" => HotkeyAction::TimelineZoomIn,
        Key::Character(c) if c == "-" => HotkeyAction::TimelineZoomOut,
        _ => return HotkeyResult::NoMatch,
    };
    HotkeyResult::Action(action)
}

/// Run `action` against `timeline`.
pub fn apply_hotkey<S: TickScheduler>(action: HotkeyAction, timeline: &mut Timeline<S>) {
    debug!(?action, "hotkey");
    match action {
        HotkeyAction::PlayPause => {
            if timeline.is_playing() {
                timeline.pause();
            } else {
                if timeline.is_completed() {
                    timeline.reset();
                }
                timeline.play();
            }
        }
        HotkeyAction::StepBackward => timeline.step_backward(1),
        HotkeyAction::StepForward => timeline.step_forward(1),
        HotkeyAction::JumpBackward => {
            let percent = (timeline.progress() * 100.0 - JUMP_PERCENT).max(0.0);
            timeline.jump_to_percent(percent);
        }
        HotkeyAction::JumpForward => {
            let percent = (timeline.progress() * 100.0 + JUMP_PERCENT).min(100.0);
            timeline.jump_to_percent(percent);
        }
        HotkeyAction::SeekStart => timeline.set_frame(0),
        HotkeyAction::SeekEnd => timeline.set_frame(timeline.last_frame() as i64),
        HotkeyAction::TimelineZoomIn => timeline.set_zoom(timeline.zoom() + ZOOM_STEP),
        HotkeyAction::TimelineZoomOut => timeline.set_zoom(timeline.zoom() - ZOOM_STEP),
    }
}
