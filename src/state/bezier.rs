//! Cubic-bezier easing curves with fixed `(0,0)` and `(1,1)` anchors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CURVE_X_MAX, CURVE_X_MIN, CURVE_Y_MAX, CURVE_Y_MIN};
use crate::error::{Result, StudioError};

/// Y of the curve at parameter `t`, given the control points' Y values.
///
/// `t` is the global progress, not the curve parameter solved from X. The
/// preview dots are defined on this direct sampling, so it is kept as is.
pub fn bezier_y(t: f64, p1y: f64, p2y: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1y + 3.0 * mt * t * t * p2y + t * t * t
}

pub fn clamp_curve_x(x: f64) -> f64 {
    if x.is_nan() {
        return CURVE_X_MIN;
    }
    x.clamp(CURVE_X_MIN, CURVE_X_MAX)
}

pub fn clamp_curve_y(y: f64) -> f64 {
    if y.is_nan() {
        return 0.0;
    }
    y.clamp(CURVE_Y_MIN, CURVE_Y_MAX)
}

/// The two interior control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    P1,
    P2,
}

/// One of the four scalars of a curve, in `x1, y1, x2, y2` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveCoordinate {
    X1,
    Y1,
    X2,
    Y2,
}

impl CurveCoordinate {
    pub const ALL: [CurveCoordinate; 4] = [
        CurveCoordinate::X1,
        CurveCoordinate::Y1,
        CurveCoordinate::X2,
        CurveCoordinate::Y2,
    ];

    pub fn index(self) -> usize {
        match self {
            CurveCoordinate::X1 => 0,
            CurveCoordinate::Y1 => 1,
            CurveCoordinate::X2 => 2,
            CurveCoordinate::Y2 => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CurveCoordinate::X1 => "x1",
            CurveCoordinate::Y1 => "y1",
            CurveCoordinate::X2 => "x2",
            CurveCoordinate::Y2 => "y2",
        }
    }

    pub fn is_x(self) -> bool {
        matches!(self, CurveCoordinate::X1 | CurveCoordinate::X2)
    }

    /// Clamp a value into this coordinate's axis range.
    pub fn clamp(self, value: f64) -> f64 {
        if self.is_x() {
            clamp_curve_x(value)
        } else {
            clamp_curve_y(value)
        }
    }
}

/// Cubic bezier `(x1, y1, x2, y2)`; serialized as a four-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Copy with X in `[0, 1]` and Y in `[-0.5, 1.5]`.
    pub fn clamped(self) -> Self {
        Self {
            x1: clamp_curve_x(self.x1),
            y1: clamp_curve_y(self.y1),
            x2: clamp_curve_x(self.x2),
            y2: clamp_curve_y(self.y2),
        }
    }

    /// Validation for a whole-curve replacement.
    ///
    /// A built-in preset is kept exactly, even where its Y leaves
    /// `[-0.5, 1.5]` (Bounce, Elastic); any other curve is clamped per axis.
    pub fn normalized(self) -> Self {
        if self.matching_preset().is_some() {
            self
        } else {
            self.clamped()
        }
    }

    pub fn get(&self, coordinate: CurveCoordinate) -> f64 {
        self.to_array()[coordinate.index()]
    }

    /// Copy with one coordinate replaced (clamped to its axis).
    pub fn with(self, coordinate: CurveCoordinate, value: f64) -> Self {
        let mut values = self.to_array();
        values[coordinate.index()] = coordinate.clamp(value);
        Self::from_array(values)
    }

    pub fn point(&self, point: ControlPoint) -> (f64, f64) {
        match point {
            ControlPoint::P1 => (self.x1, self.y1),
            ControlPoint::P2 => (self.x2, self.y2),
        }
    }

    /// Copy with one control point moved (clamped); the other is untouched.
    pub fn with_point(self, point: ControlPoint, x: f64, y: f64) -> Self {
        let (x, y) = (clamp_curve_x(x), clamp_curve_y(y));
        match point {
            ControlPoint::P1 => Self { x1: x, y1: y, ..self },
            ControlPoint::P2 => Self { x2: x, y2: y, ..self },
        }
    }

    /// Sampled output at progress `t` (see [`bezier_y`]).
    pub fn sample_y(&self, t: f64) -> f64 {
        bezier_y(t, self.y1, self.y2)
    }

    /// CSS `cubic-bezier(...)` with two decimals per value.
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({:.2}, {:.2}, {:.2}, {:.2})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// `transition` declaration for a duration in milliseconds.
    pub fn css_transition(&self, duration_ms: f64) -> String {
        format!(
            "transition: all {}ms cubic-bezier({}, {}, {}, {});",
            duration_ms, self.x1, self.y1, self.x2, self.y2
        )
    }

    /// The built-in preset with exactly these values, if any.
    pub fn matching_preset(&self) -> Option<&'static EasingPreset> {
        EASING_PRESETS.iter().find(|preset| preset.curve == *self)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::EASE
    }
}

impl From<[f64; 4]> for CubicBezier {
    fn from(values: [f64; 4]) -> Self {
        Self::from_array(values)
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(curve: CubicBezier) -> Self {
        curve.to_array()
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl FromStr for CubicBezier {
    type Err = StudioError;

    /// Parse `cubic-bezier(x1, y1, x2, y2)` or a bare `x1, y1, x2, y2` list.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix("cubic-bezier") {
            Some(rest) => rest
                .trim()
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or_else(|| StudioError::Curve(trimmed.to_string()))?,
            None => trimmed,
        };

        let values = inner
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| StudioError::Curve(trimmed.to_string()))?;
        let values: [f64; 4] = values
            .try_into()
            .map_err(|_| StudioError::Curve(trimmed.to_string()))?;
        if values.iter().any(|v| !v.is_finite()) {
            return Err(StudioError::Curve(trimmed.to_string()));
        }
        Ok(Self::from_array(values).normalized())
    }
}

/// Named easing curve offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingPreset {
    pub name: &'static str,
    pub curve: CubicBezier,
}

impl EasingPreset {
    /// Case-insensitive lookup by name.
    pub fn find(name: &str) -> Option<&'static EasingPreset> {
        let name = name.trim();
        EASING_PRESETS
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    pub fn require(name: &str) -> Result<&'static EasingPreset> {
        Self::find(name).ok_or_else(|| StudioError::UnknownPreset(name.to_string()))
    }
}

pub static EASING_PRESETS: [EasingPreset; 7] = [
    EasingPreset { name: "Linear", curve: CubicBezier::LINEAR },
    EasingPreset { name: "Ease", curve: CubicBezier::EASE },
    EasingPreset { name: "Ease In", curve: CubicBezier::new(0.42, 0.0, 1.0, 1.0) },
    EasingPreset { name: "Ease Out", curve: CubicBezier::new(0.0, 0.0, 0.58, 1.0) },
    EasingPreset { name: "Ease In Out", curve: CubicBezier::new(0.42, 0.0, 0.58, 1.0) },
    EasingPreset { name: "Bounce", curve: CubicBezier::new(0.68, -0.55, 0.265, 1.55) },
    EasingPreset { name: "Elastic", curve: CubicBezier::new(0.68, -0.6, 0.32, 1.6) },
];
