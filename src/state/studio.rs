//! Studio session: one timeline, one curve editor and the reference/edited
//! configuration pair they are compared across.

use serde::Serialize;
use tracing::debug;

use crate::core::playback::PlaybackTarget;
use crate::hotkeys::{apply_hotkey, HotkeyAction};
use crate::state::bezier::CubicBezier;
use crate::state::config::{ActiveVariant, AnimationConfig, ColorConfig, RenderColors};
use crate::state::curve_editor::CurveEditor;
use crate::timeline::Timeline;

/// Animation inputs for one side of the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSide {
    /// Transition duration in milliseconds
    pub duration: f64,
    pub bezier: CubicBezier,
    pub colors: RenderColors,
}

/// Everything the render target needs for one refresh. Both sides share the
/// checked state and the progress value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonFrame {
    pub checked: bool,
    pub progress: f64,
    pub reference: AnimationSide,
    pub edited: AnimationSide,
}

/// Read-out for the stats panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioStats {
    pub frame: u32,
    pub last_frame: u32,
    /// Rounded to a whole percent
    pub progress_percent: u32,
    pub toggle_count: u32,
    /// `None` when looping forever
    pub toggle_limit: Option<u32>,
    pub speed: f64,
    pub effective_duration_ms: f64,
    pub base_duration_ms: f64,
}

impl StudioStats {
    /// `current / limit`, with `∞` for infinite loops.
    pub fn toggle_label(&self) -> String {
        match self.toggle_limit {
            Some(limit) => format!("{} / {}", self.toggle_count, limit),
            None => format!("{} / ∞", self.toggle_count),
        }
    }
}

pub struct Studio {
    timeline: Timeline,
    editor: CurveEditor,
    reference: AnimationConfig,
    config: AnimationConfig,
    reference_colors: ColorConfig,
    colors: ColorConfig,
    variant: ActiveVariant,
    checked: bool,
    toggle_count: u32,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(AnimationConfig::default(), ColorConfig::default())
    }
}

impl Studio {
    /// Start a session; the edited config and colors begin as copies of the
    /// reference.
    pub fn new(reference: AnimationConfig, reference_colors: ColorConfig) -> Self {
        let reference = reference.sanitized();
        Self {
            timeline: Timeline::new(reference.timeline_config()),
            editor: CurveEditor::new(reference.bezier),
            reference,
            config: reference,
            colors: reference_colors.clone(),
            reference_colors,
            variant: ActiveVariant::default(),
            checked: false,
            toggle_count: 0,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    pub fn editor(&self) -> &CurveEditor {
        &self.editor
    }

    pub fn reference(&self) -> &AnimationConfig {
        &self.reference
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn colors(&self) -> &ColorConfig {
        &self.colors
    }

    pub fn variant(&self) -> ActiveVariant {
        self.variant
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn toggle_count(&self) -> u32 {
        self.toggle_count
    }

    /// Play/pause button and Space key.
    ///
    /// Starting flips the checked state so the render target animates toward
    /// the other side; a completed pass is rewound (and unchecked) first.
    pub fn toggle_playback(&mut self) {
        if self.timeline.is_playing() {
            self.timeline.pause();
            return;
        }
        if self.timeline.is_completed() {
            self.timeline.reset();
            self.checked = false;
        }
        self.checked = !self.checked;
        self.toggle_count += 1;
        debug!(checked = self.checked, toggles = self.toggle_count, "studio: toggle");
        self.timeline.play();
    }

    pub fn reset(&mut self) {
        self.timeline.reset();
        self.checked = false;
        self.toggle_count = 0;
    }

    /// Copy-on-write edit of the configuration.
    ///
    /// The edited copy is sanitized, the timeline gets the new timing and a
    /// changed curve is pushed into the editor.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut AnimationConfig)) {
        let mut next = self.config;
        edit(&mut next);
        let next = next.sanitized();
        if next == self.config {
            return;
        }
        if next.bezier != self.config.bezier {
            self.editor.apply(next.bezier);
        }
        self.config = next;
        self.timeline.set_config(next.timeline_config());
    }

    /// Edit the curve through the editor; the result is mirrored into the
    /// configuration.
    pub fn edit_curve<R>(&mut self, edit: impl FnOnce(&mut CurveEditor) -> R) -> R {
        let result = edit(&mut self.editor);
        self.config.bezier = self.editor.edited();
        result
    }

    pub fn update_colors(&mut self, edit: impl FnOnce(&mut ColorConfig)) {
        edit(&mut self.colors);
    }

    pub fn set_variant(&mut self, variant: ActiveVariant) {
        self.variant = variant;
    }

    /// Run a keyboard action; play/pause goes through [`toggle_playback`](Self::toggle_playback).
    pub fn apply_hotkey(&mut self, action: HotkeyAction) {
        match action {
            HotkeyAction::PlayPause => self.toggle_playback(),
            other => apply_hotkey(other, &mut self.timeline),
        }
    }

    /// Inputs for the side-by-side render. The reference runs at the edited
    /// speed so only the curve and base duration differ.
    pub fn comparison(&self) -> ComparisonFrame {
        ComparisonFrame {
            checked: self.checked,
            progress: self.timeline.progress(),
            reference: AnimationSide {
                duration: self.reference.duration / self.config.speed,
                bezier: self.reference.bezier,
                colors: self.reference_colors.render_set(self.variant),
            },
            edited: AnimationSide {
                duration: self.config.effective_duration(),
                bezier: self.config.bezier,
                colors: self.colors.render_set(self.variant),
            },
        }
    }

    pub fn stats(&self) -> StudioStats {
        StudioStats {
            frame: self.timeline.current_frame(),
            last_frame: self.timeline.last_frame(),
            progress_percent: (self.timeline.progress() * 100.0).round() as u32,
            toggle_count: self.toggle_count,
            toggle_limit: self.config.toggle_limit(),
            speed: self.config.speed,
            effective_duration_ms: self.config.effective_duration(),
            base_duration_ms: self.config.duration,
        }
    }

    /// CSS transition for the edited animation.
    pub fn css(&self) -> String {
        self.config.bezier.css_transition(self.config.duration)
    }
}

impl PlaybackTarget for Studio {
    fn refresh(&mut self, now_ms: f64) -> bool {
        self.timeline.refresh(now_ms)
    }

    fn stop(&mut self) {
        self.timeline.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::bezier::{ControlPoint, EasingPreset};

    fn run_to_end(studio: &mut Studio) {
        let mut now = 0.0;
        while let Some(handle) = studio.timeline_mut().scheduler_mut().take_due() {
            studio.timeline_mut().tick(handle, now);
            now += 16.0;
        }
    }

    #[test]
    fn test_new_session() {
        let studio = Studio::default();
        assert!(!studio.checked());
        assert_eq!(studio.toggle_count(), 0);
        assert_eq!(studio.timeline().total_frames(), 30);
        assert_eq!(studio.config(), studio.reference());
    }

    #[test]
    fn test_toggle_playback_flips_checked() {
        let mut studio = Studio::default();
        studio.toggle_playback();
        assert!(studio.checked());
        assert!(studio.timeline().is_playing());
        assert_eq!(studio.toggle_count(), 1);

        studio.toggle_playback();
        assert!(!studio.timeline().is_playing());
        assert!(studio.checked());
        assert_eq!(studio.toggle_count(), 1);
    }

    #[test]
    fn test_toggle_after_completion_restarts_checked() {
        let mut studio = Studio::default();
        studio.toggle_playback();
        run_to_end(&mut studio);
        assert!(studio.timeline().is_completed());

        studio.toggle_playback();
        assert!(studio.checked());
        assert_eq!(studio.timeline().progress(), 0.0);
        assert!(studio.timeline().is_playing());
        assert_eq!(studio.toggle_count(), 2);
    }

    #[test]
    fn test_reset() {
        let mut studio = Studio::default();
        studio.toggle_playback();
        studio.reset();
        assert!(!studio.checked());
        assert_eq!(studio.toggle_count(), 0);
        assert!(!studio.timeline().is_playing());
        assert_eq!(studio.timeline().current_frame(), 0);
    }

    #[test]
    fn test_update_config_retimes_timeline() {
        let mut studio = Studio::default();
        studio.update_config(|config| config.speed = 2.0);
        assert_eq!(studio.config().effective_duration(), 250.0);
        assert_eq!(studio.timeline().total_frames(), 15);
        assert_eq!(studio.reference().speed, 1.0);

        studio.update_config(|config| config.duration = 99_999.0);
        assert_eq!(studio.config().duration, 3000.0);
    }

    #[test]
    fn test_config_curve_flows_into_editor() {
        let mut studio = Studio::default();
        studio.update_config(|config| config.bezier = CubicBezier::LINEAR);
        assert_eq!(studio.editor().edited(), CubicBezier::LINEAR);
        assert_eq!(studio.editor().reference(), CubicBezier::EASE);
    }

    #[test]
    fn test_editor_edits_flow_into_config() {
        let mut studio = Studio::default();
        studio.edit_curve(|editor| {
            editor.begin_drag(ControlPoint::P1);
            editor.drag_to(0.1, -0.3);
        });
        assert_eq!(studio.config().bezier.to_array(), [0.1, -0.3, 0.25, 1.0]);

        studio
            .edit_curve(|editor| editor.select_preset("Linear"))
            .unwrap();
        assert_eq!(studio.config().bezier, CubicBezier::LINEAR);
    }

    #[test]
    fn test_elastic_config_reaches_editor_unclamped() {
        let elastic = EasingPreset::require("Elastic").unwrap().curve;
        let mut studio = Studio::default();
        studio.update_config(|config| config.bezier = elastic);
        assert_eq!(studio.config().bezier, elastic);
        assert_eq!(studio.editor().edited(), elastic);
        assert_eq!(studio.comparison().edited.bezier, elastic);

        studio.edit_curve(|editor| editor.select_preset("Bounce")).unwrap();
        assert_eq!(studio.config().bezier.to_array(), [0.68, -0.55, 0.265, 1.55]);
    }

    #[test]
    fn test_comparison_shares_progress() {
        let mut studio = Studio::default();
        studio.update_config(|config| {
            config.speed = 2.0;
            config.duration = 800.0;
        });
        studio.update_colors(|colors| colors.active = "#000000".to_string());
        studio.timeline_mut().set_frame(12);

        let frame = studio.comparison();
        assert_eq!(frame.progress, studio.timeline().progress());
        assert_eq!(frame.reference.duration, 250.0);
        assert_eq!(frame.edited.duration, 400.0);
        assert_eq!(frame.reference.colors.active, "#275EFE");
        assert_eq!(frame.edited.colors.active, "#000000");
    }

    #[test]
    fn test_variant_selects_accent() {
        let mut studio = Studio::default();
        studio.set_variant(ActiveVariant::Warning);
        assert_eq!(studio.comparison().edited.colors.active, "#F59E0B");
    }

    #[test]
    fn test_stats() {
        let mut studio = Studio::default();
        studio.timeline_mut().set_frame(29);
        let stats = studio.stats();
        assert_eq!(stats.frame, 29);
        assert_eq!(stats.last_frame, 29);
        assert_eq!(stats.progress_percent, 100);
        assert_eq!(stats.toggle_label(), "0 / 2");

        studio.update_config(|config| config.infinite_loop = true);
        assert_eq!(studio.stats().toggle_label(), "0 / ∞");
    }

    #[test]
    fn test_space_goes_through_toggle() {
        let mut studio = Studio::default();
        studio.apply_hotkey(HotkeyAction::PlayPause);
        assert!(studio.checked());
        studio.apply_hotkey(HotkeyAction::StepForward);
        assert!(!studio.timeline().is_playing());
        assert_eq!(studio.timeline().current_frame(), 1);
    }

    #[test]
    fn test_css() {
        let studio = Studio::default();
        assert_eq!(studio.css(), "transition: all 500ms cubic-bezier(0.25, 0.1, 0.25, 1);");
    }
}
