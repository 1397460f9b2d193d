//! Incrementally built matrix of corner-to-corner distances.

use serde::Serialize;

use crate::geometry::distance;
use crate::types::Stroke;

use super::corner_position;

/// Symmetric matrix of Euclidean distances between every observed
/// corner (stroke endpoint), indexed by corner id.
///
/// The matrix grows by exactly two rows and columns per stroke, in
/// ascending stroke order; both `matrix[i][j]` and `matrix[j][i]` are
/// written in the same step, so the matrix is symmetric by construction
/// and square after every stroke.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CornerDistanceMatrix {
    rows: Vec<Vec<f32>>,
}

impl CornerDistanceMatrix {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Builds the complete matrix for a stroke list.
    pub fn build(strokes: &[Stroke]) -> Self {
        let mut matrix = Self::new();
        for line_idx in 0..strokes.len() {
            matrix.extend_with_stroke(strokes, line_idx);
        }
        matrix
    }

    /// Appends the two corners of `strokes[line_idx]`. Strokes must be
    /// appended in ascending index order; later passes assume earlier
    /// rows are complete.
    pub fn extend_with_stroke(&mut self, strokes: &[Stroke], line_idx: usize) {
        debug_assert_eq!(
            self.rows.len(),
            line_idx * 2,
            "strokes must be appended in ascending index order"
        );
        for corner in [line_idx * 2, line_idx * 2 + 1] {
            let position = corner_position(strokes, corner);
            let mut row = Vec::with_capacity(corner + 1);
            for other in 0..corner {
                let dist = distance(position, corner_position(strokes, other));
                row.push(dist);
                self.rows[other].push(dist);
            }
            row.push(0.0);
            self.rows.push(row);
        }
    }

    /// Number of observed corners: twice the strokes appended so far.
    pub fn corner_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distances from one corner to every corner, indexed by corner id.
    pub fn row(&self, corner: usize) -> &[f32] {
        &self.rows[corner]
    }

    /// Consumes the matrix into plain rows for the final report.
    pub fn into_rows(self) -> Vec<Vec<f32>> {
        self.rows
    }
}
