use serde::{Deserialize, Serialize};

use crate::constants::{
    COLOR_ACTIVE, COLOR_DANGER, COLOR_DEFAULT, COLOR_DEFAULT_HOVER, COLOR_KNOB, COLOR_SUCCESS,
    COLOR_WARNING, DELAY_DEFAULT_MS, DELAY_MAX_MS, DELAY_MIN_MS, DURATION_DEFAULT_MS,
    DURATION_MAX_MS, DURATION_MIN_MS, SPEED_DEFAULT, SPEED_MAX, SPEED_MIN, SPEED_PRESETS,
    TOGGLE_COUNT_DEFAULT, TOGGLE_COUNT_MAX, TOGGLE_COUNT_MIN,
};
use crate::core::timeline_math::total_frames_for;
use crate::error::Result;
use crate::state::bezier::CubicBezier;
use crate::utils::{clamp_or, parse_f64_input};

/// Smallest duration a timeline accepts; keeps the effective duration positive.
const TIMELINE_MIN_DURATION_MS: f64 = 1.0;
const TIMELINE_MIN_SPEED: f64 = 0.001;

/// Timing inputs of one timeline.
///
/// Immutable: every edit builds a new value and hands it to
/// `Timeline::set_config`, which re-derives the frame count from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    /// Base duration in milliseconds
    duration_ms: f64,
    /// Playback speed multiplier
    speed: f64,
}

impl TimelineConfig {
    /// Build a config; non-finite or non-positive inputs fall back to minimums.
    pub fn new(duration_ms: f64, speed: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() {
            duration_ms.max(TIMELINE_MIN_DURATION_MS)
        } else {
            DURATION_DEFAULT_MS
        };
        let speed = if speed.is_finite() {
            speed.max(TIMELINE_MIN_SPEED)
        } else {
            SPEED_DEFAULT
        };
        Self { duration_ms, speed }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Wall-clock length of one playback pass.
    pub fn effective_duration_ms(&self) -> f64 {
        self.duration_ms / self.speed
    }

    pub fn total_frames(&self) -> u32 {
        total_frames_for(self.effective_duration_ms())
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::new(DURATION_DEFAULT_MS, SPEED_DEFAULT)
    }
}

/// Studio animation settings shared with the render target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Transition duration in milliseconds
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Delay between repeated toggles in milliseconds
    #[serde(default = "default_delay")]
    pub delay: f64,
    /// Number of toggles per run when not looping
    #[serde(default = "default_toggle_count")]
    pub toggle_count: u32,
    #[serde(default)]
    pub infinite_loop: bool,
    /// Easing curve
    #[serde(default)]
    pub bezier: CubicBezier,
    /// Playback speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_duration() -> f64 {
    DURATION_DEFAULT_MS
}

fn default_delay() -> f64 {
    DELAY_DEFAULT_MS
}

fn default_toggle_count() -> u32 {
    TOGGLE_COUNT_DEFAULT
}

fn default_speed() -> f64 {
    SPEED_DEFAULT
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            delay: default_delay(),
            toggle_count: default_toggle_count(),
            infinite_loop: false,
            bezier: CubicBezier::default(),
            speed: default_speed(),
        }
    }
}

impl AnimationConfig {
    /// Decode a config from JSON; missing fields take their defaults and the
    /// result is clamped into the control ranges.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnimationConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy with every field clamped into its control range. A curve equal to
    /// a built-in preset is kept as is.
    pub fn sanitized(&self) -> Self {
        Self {
            duration: clamp_or(self.duration, DURATION_MIN_MS, DURATION_MAX_MS, DURATION_DEFAULT_MS),
            delay: clamp_or(self.delay, DELAY_MIN_MS, DELAY_MAX_MS, DELAY_DEFAULT_MS),
            toggle_count: self.toggle_count.clamp(TOGGLE_COUNT_MIN, TOGGLE_COUNT_MAX),
            infinite_loop: self.infinite_loop,
            bezier: self.bezier.normalized(),
            speed: clamp_or(self.speed, SPEED_MIN, SPEED_MAX, SPEED_DEFAULT),
        }
    }

    /// `duration / speed`
    pub fn effective_duration(&self) -> f64 {
        self.duration / self.speed
    }

    pub fn timeline_config(&self) -> TimelineConfig {
        TimelineConfig::new(self.duration, self.speed)
    }

    /// Duration from the numeric field; empty or malformed text means the default.
    pub fn set_duration_text(&mut self, text: &str) {
        let value = parse_f64_input(text, DURATION_DEFAULT_MS);
        self.duration = clamp_or(value, DURATION_MIN_MS, DURATION_MAX_MS, DURATION_DEFAULT_MS);
    }

    pub fn set_delay_text(&mut self, text: &str) {
        let value = parse_f64_input(text, DELAY_DEFAULT_MS);
        self.delay = clamp_or(value, DELAY_MIN_MS, DELAY_MAX_MS, DELAY_DEFAULT_MS);
    }

    /// Speed readout, e.g. `0.25x`.
    pub fn speed_label(&self) -> String {
        SPEED_PRESETS
            .iter()
            .find(|(_, speed)| *speed == self.speed)
            .map(|(label, _)| label.to_string())
            .unwrap_or_else(|| format!("{}x", self.speed))
    }

    /// Toggle limit for one run, `None` when looping forever.
    pub fn toggle_limit(&self) -> Option<u32> {
        if self.infinite_loop {
            None
        } else {
            Some(self.toggle_count)
        }
    }
}

/// Which accent the render target uses for the checked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveVariant {
    #[default]
    Active,
    Success,
    Warning,
    Danger,
}

/// Color set handed to the render target (hex strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub active: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub default: String,
    pub default_hover: String,
    pub knob: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            active: COLOR_ACTIVE.to_string(),
            success: COLOR_SUCCESS.to_string(),
            warning: COLOR_WARNING.to_string(),
            danger: COLOR_DANGER.to_string(),
            default: COLOR_DEFAULT.to_string(),
            default_hover: COLOR_DEFAULT_HOVER.to_string(),
            knob: COLOR_KNOB.to_string(),
        }
    }
}

impl ColorConfig {
    /// Accent color for the selected variant.
    pub fn accent(&self, variant: ActiveVariant) -> &str {
        match variant {
            ActiveVariant::Active => &self.active,
            ActiveVariant::Success => &self.success,
            ActiveVariant::Warning => &self.warning,
            ActiveVariant::Danger => &self.danger,
        }
    }

    /// The three colors a render target actually draws with.
    pub fn render_set(&self, variant: ActiveVariant) -> RenderColors {
        RenderColors {
            active: self.accent(variant).to_string(),
            default: self.default.clone(),
            knob: self.knob.clone(),
        }
    }
}

/// Resolved colors for one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderColors {
    pub active: String,
    pub default: String,
    pub knob: String,
}
