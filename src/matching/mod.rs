//! Corner matching: collapse the two observed corners per stroke onto
//! shared cube vertices and derive which strokes meet which.
//!
//! Every stroke endpoint is a "corner" identified by
//! `line * 2 + endpoint` (0 = start, 1 = end). Twelve strokes yield 24
//! observed corners that matching collapses onto at most eight true
//! vertices. Pass 1 selects candidates from the distance matrix; pass 2
//! resolves corners whose candidates span more than two strokes (two
//! cube vertices drawn close together) through a pluggable
//! [`Disambiguate`] strategy.

pub mod disambiguation;
mod distance_matrix;

pub use disambiguation::{Disambiguate, ThirdOrderFrequency};
pub use distance_matrix::CornerDistanceMatrix;

use log::debug;

use crate::types::{Point, Stroke};

/// Two corners are considered to meet at a shared vertex when they are
/// closer than this many pixel units.
pub const MAX_CORNER_DISTANCE: f32 = 10.0;

/// The stroke owning a corner.
#[inline]
pub fn line_of(corner: usize) -> usize {
    corner / 2
}

/// The corner at the other end of the same stroke.
#[inline]
pub fn opposite_corner(corner: usize) -> usize {
    corner ^ 1
}

/// Anchor position of a corner.
pub(crate) fn corner_position(strokes: &[Stroke], corner: usize) -> Point {
    let stroke = &strokes[line_of(corner)];
    if corner % 2 == 0 {
        stroke.start
    } else {
        stroke.end
    }
}

/// Per-corner candidate lists: for each corner, the other corners within
/// [`MAX_CORNER_DISTANCE`], sorted ascending by distance.
#[derive(Clone, Debug, Default)]
pub struct CornerConnectionMap {
    connections: Vec<Vec<usize>>,
}

impl CornerConnectionMap {
    /// Builds a map from explicit per-corner candidate lists. Intended
    /// for tools and tests exercising [`Disambiguate`] strategies
    /// directly; [`match_corners`] builds the map from the distance
    /// matrix.
    pub fn from_connections(connections: Vec<Vec<usize>>) -> Self {
        Self { connections }
    }

    pub fn connections(&self, corner: usize) -> &[usize] {
        &self.connections[corner]
    }

    pub fn corner_count(&self) -> usize {
        self.connections.len()
    }
}

/// Raised when the sketch cannot be matched into a closed wireframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A corner has no neighbour within [`MAX_CORNER_DISTANCE`]; the
    /// edges do not close and the sketch must be redrawn.
    CornersNotCloseEnough { corner: usize, line: usize },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::CornersNotCloseEnough { corner, line } => {
                write!(f, "corners not close enough (corner {corner} of stroke {line})")
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Outcome of corner matching.
#[derive(Clone, Debug)]
pub struct CornerMatch {
    /// Stroke index → strokes inferred to share a vertex with it.
    /// Duplicates are expected: a neighbour can be reached from both
    /// corners of a stroke, or through both passes.
    pub line_connections: Vec<Vec<usize>>,
    /// The corner-level candidates behind the line connections.
    pub corner_connections: CornerConnectionMap,
    /// Average matched candidate distance per stroke, for diagnostics.
    pub per_line_corner_distance: Vec<f32>,
    /// Candidate distance total and pairing count over all corners, for
    /// the overall average.
    pub total_corner_distance: f32,
    pub matched_pair_count: usize,
}

/// Matches corners with the default [`ThirdOrderFrequency`] strategy.
pub fn match_corners(matrix: &CornerDistanceMatrix) -> Result<CornerMatch, MatchError> {
    match_corners_with(matrix, &ThirdOrderFrequency)
}

/// Matches corners with an explicit disambiguation strategy.
pub fn match_corners_with(
    matrix: &CornerDistanceMatrix,
    strategy: &impl Disambiguate,
) -> Result<CornerMatch, MatchError> {
    let corner_count = matrix.corner_count();
    let line_count = corner_count / 2;

    let mut connections: Vec<Vec<usize>> = Vec::with_capacity(corner_count);
    let mut per_line_totals = vec![(0.0f32, 0usize); line_count];
    let mut total_corner_distance = 0.0f32;
    let mut matched_pair_count = 0usize;

    for corner in 0..corner_count {
        let mut candidates: Vec<(usize, f32)> = matrix
            .row(corner)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(other, dist)| other != corner && dist < MAX_CORNER_DISTANCE)
            .collect();
        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        if candidates.is_empty() {
            return Err(MatchError::CornersNotCloseEnough {
                corner,
                line: line_of(corner),
            });
        }

        let distance_sum: f32 = candidates.iter().map(|c| c.1).sum();
        total_corner_distance += distance_sum;
        matched_pair_count += candidates.len();
        let (line_total, line_pairs) = &mut per_line_totals[line_of(corner)];
        *line_total += distance_sum;
        *line_pairs += candidates.len();

        connections.push(candidates.into_iter().map(|c| c.0).collect());
    }

    let corner_connections = CornerConnectionMap { connections };

    // Pass 1: corners whose candidates span at most two strokes project
    // straight onto line connections; the rest wait for the full map.
    let mut line_connections: Vec<Vec<usize>> = vec![Vec::new(); line_count];
    let mut ambiguous: Vec<usize> = Vec::new();
    for corner in 0..corner_count {
        let owners: Vec<usize> = corner_connections
            .connections(corner)
            .iter()
            .map(|&c| line_of(c))
            .collect();
        let mut distinct = owners.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() <= 2 {
            line_connections[line_of(corner)].extend(owners);
        } else {
            debug!(
                "matcher: corner {corner} is ambiguous ({} candidate strokes)",
                distinct.len()
            );
            ambiguous.push(corner);
        }
    }

    // Pass 2: resolve the ambiguous clusters.
    for &corner in &ambiguous {
        let accepted = strategy.disambiguate(corner, &corner_connections);
        line_connections[line_of(corner)].extend(accepted);
    }

    let per_line_corner_distance = per_line_totals
        .iter()
        .map(|&(total, pairs)| total / pairs as f32)
        .collect();

    Ok(CornerMatch {
        line_connections,
        corner_connections,
        per_line_corner_distance,
        total_corner_distance,
        matched_pair_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(start: (f32, f32), end: (f32, f32)) -> Stroke {
        Stroke {
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
            points: vec![Point::new(
                (start.0 + end.0) / 2.0,
                (start.1 + end.1) / 2.0,
            )],
        }
    }

    #[test]
    fn corner_id_helpers() {
        assert_eq!(line_of(0), 0);
        assert_eq!(line_of(7), 3);
        assert_eq!(opposite_corner(4), 5);
        assert_eq!(opposite_corner(5), 4);
    }

    #[test]
    fn closed_triangle_matches_every_corner() {
        let strokes = vec![
            stroke((0.0, 0.0), (100.0, 0.0)),
            stroke((100.0, 0.0), (50.0, 80.0)),
            stroke((50.0, 80.0), (0.0, 0.0)),
        ];
        let matrix = CornerDistanceMatrix::build(&strokes);
        let matched = match_corners(&matrix).expect("triangle closes");

        // Each corner coincides exactly with one neighbour.
        for corner in 0..matrix.corner_count() {
            assert_eq!(matched.corner_connections.connections(corner).len(), 1);
        }
        // Each stroke is connected to its two neighbours, once per end.
        for line in 0..strokes.len() {
            assert_eq!(matched.line_connections[line].len(), 2);
        }
        assert_eq!(matched.matched_pair_count, 6);
        assert!(matched.total_corner_distance == 0.0);
    }

    #[test]
    fn distant_corner_is_rejected() {
        // The third stroke is pulled 15 units away from both vertices it
        // should close against; threshold is 10. The first corner left
        // without a candidate reports the failure.
        let strokes = vec![
            stroke((0.0, 0.0), (100.0, 0.0)),
            stroke((100.0, 0.0), (50.0, 80.0)),
            stroke((65.0, 80.0), (15.0, 0.0)),
        ];
        let matrix = CornerDistanceMatrix::build(&strokes);
        let err = match_corners(&matrix).expect_err("edges do not close");
        assert_eq!(
            err,
            MatchError::CornersNotCloseEnough { corner: 0, line: 0 }
        );
    }

    #[test]
    fn candidates_sort_ascending_by_distance() {
        // Corner 0 sees line 1's start at distance 3 and line 2's start
        // at distance 5; both ends of those strokes stay far away.
        let strokes = vec![
            stroke((0.0, 0.0), (100.0, 0.0)),
            stroke((3.0, 0.0), (60.0, 80.0)),
            stroke((0.0, 5.0), (-60.0, 80.0)),
            stroke((100.0, 0.0), (60.0, 80.0)),
            stroke((-60.0, 80.0), (60.0, 80.0)),
        ];
        let matrix = CornerDistanceMatrix::build(&strokes);
        let matched = match_corners(&matrix).expect("sketch closes");
        assert_eq!(matched.corner_connections.connections(0), &[2, 4]);
    }
}
