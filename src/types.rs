use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometry::LineEquation;

/// A position in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinates as a nalgebra vector for the geometry primitives.
    #[inline]
    pub fn coords(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

/// Drawable canvas extent; guidelines are clipped to this rectangle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

/// One user-drawn line: the two anchor endpoints of the intended cube
/// edge plus the ordered free-hand sample trace between them.
///
/// Strokes are immutable once captured. The caller supplies exactly one
/// stroke per cube edge, and strokes 0, 1, 2 must be the three edges
/// converging at the nearest corner (the externally-enforced drawing
/// order).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stroke {
    pub start: Point,
    pub end: Point,
    pub points: Vec<Point>,
}

/// Per-stroke analysis output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysedLine {
    /// Guideline endpoints: the stroke's line extended to the canvas
    /// border, for overlay rendering.
    pub start: Point,
    pub end: Point,
    /// The original stroke anchors.
    pub box_start: Point,
    pub box_end: Point,
    pub equation: LineEquation,
    /// Mean perpendicular distance of the sampled trace points to the
    /// guideline; 0 = perfectly straight.
    pub average_deviation: f32,
    /// Parallel-group id the stroke was assigned to.
    pub group_idx: usize,
}

/// Aggregate result of one analysis run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchAnalysis {
    pub analysed_lines: Vec<AnalysedLine>,
    pub corner_distance_matrix: Vec<Vec<f32>>,
    pub average_corner_distance: f32,
    pub average_line_deviation: f32,
    pub overall_perspective_score: f32,
}
