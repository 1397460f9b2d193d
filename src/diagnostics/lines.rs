use serde::Serialize;

use crate::geometry::LineEquation;

/// Intermediate per-stroke values exposed for diagnostics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDetail {
    pub line: usize,
    pub equation: LineEquation,
    pub average_deviation: f32,
    /// Average distance of this stroke's matched corner candidates.
    pub average_corner_distance: f32,
    /// Strokes inferred to share a vertex (duplicates expected).
    pub connections: Vec<usize>,
    pub group_idx: usize,
}
