//! Interactive editing of one easing curve against a frozen reference.

use tracing::debug;

use crate::constants::{CURVE_GRAPH_PADDING, CURVE_GRAPH_SIZE};
use crate::state::bezier::{
    clamp_curve_x, clamp_curve_y, ControlPoint, CubicBezier, CurveCoordinate, EasingPreset,
};
use crate::utils::parse_f64_input;

/// Plot geometry of the curve editor: a square with equal padding on every
/// side, curve `(0,0)` at the bottom-left of the padded area and `(1,1)` at
/// its top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGraph {
    pub size: f64,
    pub padding: f64,
}

impl Default for CurveGraph {
    fn default() -> Self {
        Self {
            size: CURVE_GRAPH_SIZE,
            padding: CURVE_GRAPH_PADDING,
        }
    }
}

impl CurveGraph {
    /// Side length of the unit square in plot pixels.
    pub fn graph_size(&self) -> f64 {
        self.size - self.padding * 2.0
    }

    pub fn to_plot_x(&self, x: f64) -> f64 {
        self.padding + x * self.graph_size()
    }

    pub fn to_plot_y(&self, y: f64) -> f64 {
        self.size - self.padding - y * self.graph_size()
    }

    pub fn to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        (self.to_plot_x(x), self.to_plot_y(y))
    }

    /// Plot x back to curve x, clamped to `[0, 1]`.
    pub fn from_plot_x(&self, px: f64) -> f64 {
        clamp_curve_x((px - self.padding) / self.graph_size())
    }

    /// Plot y back to curve y, clamped to `[-0.5, 1.5]`.
    pub fn from_plot_y(&self, py: f64) -> f64 {
        clamp_curve_y((self.size - self.padding - py) / self.graph_size())
    }

    /// SVG path data for the curve between its fixed anchors.
    pub fn path(&self, curve: &CubicBezier) -> String {
        let (sx, sy) = self.to_plot(0.0, 0.0);
        let (c1x, c1y) = self.to_plot(curve.x1, curve.y1);
        let (c2x, c2y) = self.to_plot(curve.x2, curve.y2);
        let (ex, ey) = self.to_plot(1.0, 1.0);
        format!("M {sx} {sy} C {c1x} {c1y}, {c2x} {c2y}, {ex} {ey}")
    }
}

/// Where both curves sit at one shared progress value, in curve space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressDots {
    pub progress: f64,
    pub reference_y: f64,
    pub edited_y: f64,
}

/// Editor for one curve, compared against a reference that never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveEditor {
    reference: CubicBezier,
    edited: CubicBezier,
    dragging: Option<ControlPoint>,
    graph: CurveGraph,
}

impl CurveEditor {
    /// Start editing; the edited curve begins as a copy of the reference.
    pub fn new(reference: CubicBezier) -> Self {
        let reference = reference.normalized();
        Self {
            reference,
            edited: reference,
            dragging: None,
            graph: CurveGraph::default(),
        }
    }

    pub fn reference(&self) -> CubicBezier {
        self.reference
    }

    pub fn edited(&self) -> CubicBezier {
        self.edited
    }

    pub fn graph(&self) -> CurveGraph {
        self.graph
    }

    pub fn dragging(&self) -> Option<ControlPoint> {
        self.dragging
    }

    pub fn is_modified(&self) -> bool {
        self.edited != self.reference
    }

    pub fn begin_drag(&mut self, point: ControlPoint) {
        self.dragging = Some(point);
    }

    /// Move the dragged control point to curve coordinates (clamped per axis).
    ///
    /// Returns the new curve, or `None` when no drag is in progress.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<CubicBezier> {
        let point = self.dragging?;
        self.edited = self.edited.with_point(point, x, y);
        Some(self.edited)
    }

    /// Same as [`drag_to`](Self::drag_to) with pointer coordinates relative
    /// to the plot's top-left corner.
    pub fn drag_to_plot(&mut self, px: f64, py: f64) -> Option<CubicBezier> {
        let (x, y) = (self.graph.from_plot_x(px), self.graph.from_plot_y(py));
        self.drag_to(x, y)
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Replace all four values at once; any drag in progress ends.
    ///
    /// Presets are assigned as they are; other curves are clamped per axis.
    pub fn apply(&mut self, curve: CubicBezier) -> CubicBezier {
        self.dragging = None;
        self.edited = curve.normalized();
        self.edited
    }

    /// Apply a built-in preset by name, unclamped.
    pub fn select_preset(&mut self, name: &str) -> crate::error::Result<CubicBezier> {
        let preset = EasingPreset::require(name)?;
        debug!(preset = preset.name, "curve editor: preset applied");
        self.dragging = None;
        self.edited = preset.curve;
        Ok(self.edited)
    }

    /// Numeric entry for one coordinate; unparsable text counts as `0`.
    pub fn set_coordinate(&mut self, coordinate: CurveCoordinate, text: &str) -> CubicBezier {
        let value = parse_f64_input(text, 0.0);
        self.edited = self.edited.with(coordinate, value);
        self.edited
    }

    /// Drop all edits.
    pub fn revert(&mut self) -> CubicBezier {
        self.apply(self.reference)
    }

    /// Name of the preset the edited curve equals, if any.
    pub fn active_preset(&self) -> Option<&'static str> {
        self.edited.matching_preset().map(|preset| preset.name)
    }

    /// Sample both curves at `progress`.
    pub fn sample(&self, progress: f64) -> ProgressDots {
        ProgressDots {
            progress,
            reference_y: self.reference.sample_y(progress),
            edited_y: self.edited.sample_y(progress),
        }
    }

    /// Progress dots, shown only strictly inside the pass.
    pub fn progress_dots(&self, progress: f64) -> Option<ProgressDots> {
        (progress > 0.0 && progress < 1.0).then(|| self.sample(progress))
    }

    /// Plot x of the vertical progress guide, shown once playback has moved.
    pub fn progress_guide_x(&self, progress: f64) -> Option<f64> {
        (progress > 0.0).then(|| self.graph.to_plot_x(progress.min(1.0)))
    }

    pub fn reference_path(&self) -> String {
        self.graph.path(&self.reference)
    }

    pub fn edited_path(&self) -> String {
        self.graph.path(&self.edited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_mapping() {
        let graph = CurveGraph::default();
        assert_eq!(graph.graph_size(), 192.0);
        assert_eq!(graph.to_plot(0.0, 0.0), (24.0, 216.0));
        assert_eq!(graph.to_plot(1.0, 1.0), (216.0, 24.0));
        assert_eq!(graph.from_plot_x(120.0), 0.5);
        assert_eq!(graph.from_plot_y(120.0), 0.5);
    }

    #[test]
    fn test_graph_inverse_clamps() {
        let graph = CurveGraph::default();
        assert_eq!(graph.from_plot_x(-100.0), 0.0);
        assert_eq!(graph.from_plot_x(1000.0), 1.0);
        assert_eq!(graph.from_plot_y(1000.0), -0.5);
        assert_eq!(graph.from_plot_y(-1000.0), 1.5);
    }

    #[test]
    fn test_svg_path() {
        let graph = CurveGraph::default();
        assert_eq!(
            graph.path(&CubicBezier::LINEAR),
            "M 24 216 C 24 216, 216 24, 216 24"
        );
    }

    #[test]
    fn test_drag_then_preset_is_atomic() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        editor.begin_drag(ControlPoint::P1);
        let dragged = editor.drag_to(0.1, -0.3).unwrap();
        assert_eq!(dragged.to_array(), [0.1, -0.3, 0.25, 1.0]);

        let applied = editor.select_preset("Linear").unwrap();
        assert_eq!(applied.to_array(), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(editor.dragging(), None);
        assert_eq!(editor.drag_to(0.5, 0.5), None);
        assert_eq!(editor.edited(), CubicBezier::LINEAR);
    }

    #[test]
    fn test_out_of_range_presets_apply_exactly() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        for name in ["Bounce", "Elastic"] {
            let preset = EasingPreset::require(name).unwrap().curve;
            editor.begin_drag(ControlPoint::P2);
            let applied = editor.select_preset(name).unwrap();
            assert_eq!(applied, preset);
            assert_eq!(editor.active_preset(), Some(name));
            assert_eq!(editor.dragging(), None);
            assert_eq!(editor.sample(0.25).edited_y, preset.sample_y(0.25));
        }
    }

    #[test]
    fn test_dragging_a_bounce_point_clamps_it() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        editor.select_preset("Bounce").unwrap();
        editor.begin_drag(ControlPoint::P1);
        let curve = editor.drag_to(0.68, -0.55).unwrap();
        assert_eq!(curve.point(ControlPoint::P1), (0.68, -0.5));
        assert_eq!(curve.point(ControlPoint::P2), (0.265, 1.55));
        assert_eq!(editor.active_preset(), None);
    }

    #[test]
    fn test_drag_clamps_per_axis() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        editor.begin_drag(ControlPoint::P2);
        let curve = editor.drag_to(1.7, -2.0).unwrap();
        assert_eq!(curve.to_array(), [0.25, 0.1, 1.0, -0.5]);
        editor.end_drag();
        assert_eq!(editor.drag_to(0.0, 0.0), None);
    }

    #[test]
    fn test_drag_in_plot_space() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        editor.begin_drag(ControlPoint::P1);
        let curve = editor.drag_to_plot(120.0, 216.0).unwrap();
        assert_eq!(curve.point(ControlPoint::P1), (0.5, 0.0));
    }

    #[test]
    fn test_reference_is_never_mutated() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        editor.begin_drag(ControlPoint::P1);
        editor.drag_to(0.9, 1.4);
        editor.set_coordinate(CurveCoordinate::Y2, "1.2");
        assert_eq!(editor.reference(), CubicBezier::EASE);
        assert!(editor.is_modified());
        editor.revert();
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_numeric_entry() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        assert_eq!(editor.set_coordinate(CurveCoordinate::X1, "0.42").x1, 0.42);
        assert_eq!(editor.set_coordinate(CurveCoordinate::X1, "oops").x1, 0.0);
        assert_eq!(editor.set_coordinate(CurveCoordinate::X2, "3").x2, 1.0);
        assert_eq!(editor.set_coordinate(CurveCoordinate::Y1, "-9").y1, -0.5);
        assert_eq!(editor.set_coordinate(CurveCoordinate::Y2, "").y2, 0.0);
    }

    #[test]
    fn test_numeric_entry_reads_prefix() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        assert_eq!(editor.set_coordinate(CurveCoordinate::X1, "0.5px").x1, 0.5);
        assert_eq!(editor.set_coordinate(CurveCoordinate::Y1, "Infinity").y1, 1.5);
        assert_eq!(editor.set_coordinate(CurveCoordinate::Y2, "-Infinity").y2, -0.5);
    }

    #[test]
    fn test_unknown_preset_leaves_curve() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        assert!(editor.select_preset("Wobble").is_err());
        assert_eq!(editor.edited(), CubicBezier::EASE);
        assert_eq!(editor.active_preset(), Some("Ease"));
    }

    #[test]
    fn test_progress_dots_only_inside_pass() {
        let mut editor = CurveEditor::new(CubicBezier::EASE);
        editor.apply(CubicBezier::LINEAR);
        assert!(editor.progress_dots(0.0).is_none());
        assert!(editor.progress_dots(1.0).is_none());

        let dots = editor.progress_dots(0.5).unwrap();
        assert_eq!(dots.edited_y, 0.5);
        assert_eq!(dots.reference_y, bezier_reference_half());
    }

    fn bezier_reference_half() -> f64 {
        crate::state::bezier::bezier_y(0.5, 0.1, 1.0)
    }

    #[test]
    fn test_progress_guide() {
        let editor = CurveEditor::new(CubicBezier::EASE);
        assert_eq!(editor.progress_guide_x(0.0), None);
        assert_eq!(editor.progress_guide_x(1.0), Some(216.0));
    }
}
