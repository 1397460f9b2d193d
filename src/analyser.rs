//! Top-level sketch analysis pipeline.
//!
//! Drives the stages in order (geometry, corner matching, parallel
//! grouping, perspective scoring) over one immutable stroke snapshot
//! and assembles the final report. Each invocation owns private scratch
//! state, so independent sketches can be analysed concurrently with
//! [`analyse_batch`].

use log::debug;
use rayon::prelude::*;

use crate::diagnostics::{AnalysisReport, AnalysisTrace, GroupDetail, InputDescriptor, LineDetail};
use crate::geometry::{extend_to_canvas, point_to_line_distance, LineEquation};
use crate::grouping::group_parallel_lines;
use crate::matching::{match_corners, CornerDistanceMatrix, MatchError};
use crate::scoring::{closeness_for_group, overall_score, score_group};
use crate::types::{AnalysedLine, CanvasSize, Point, SketchAnalysis, Stroke};

/// A cube sketch needs at least the three edges converging at the
/// nearest corner.
const MIN_STROKES: usize = 3;

/// Reasons a sketch cannot be analysed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyseError {
    /// Fewer strokes than the input contract allows.
    TooFewStrokes { found: usize, minimum: usize },
    /// A stroke carries no sampled trace points.
    EmptyStrokeTrace { line: usize },
    /// A corner has no neighbour within the matching threshold; the
    /// edges do not close and the user must redraw.
    CornersNotCloseEnough { line: usize, corner: usize },
}

impl std::fmt::Display for AnalyseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyseError::TooFewStrokes { found, minimum } => {
                write!(f, "too few strokes ({found} < {minimum})")
            }
            AnalyseError::EmptyStrokeTrace { line } => {
                write!(f, "stroke {line} has no sampled points")
            }
            AnalyseError::CornersNotCloseEnough { line, corner } => {
                write!(f, "corners not close enough (corner {corner} of stroke {line})")
            }
        }
    }
}

impl std::error::Error for AnalyseError {}

impl From<MatchError> for AnalyseError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::CornersNotCloseEnough { corner, line } => {
                AnalyseError::CornersNotCloseEnough { line, corner }
            }
        }
    }
}

/// Analyses one sketch: reconstructs the shared-vertex structure,
/// partitions the strokes into parallel-edge groups, and scores how
/// well the drawing obeys perspective.
///
/// The computation is pure and deterministic; identical input produces
/// an identical report.
pub fn analyse(strokes: &[Stroke], canvas: CanvasSize) -> Result<AnalysisReport, AnalyseError> {
    if strokes.len() < MIN_STROKES {
        return Err(AnalyseError::TooFewStrokes {
            found: strokes.len(),
            minimum: MIN_STROKES,
        });
    }
    if let Some(line) = strokes.iter().position(|s| s.points.is_empty()) {
        return Err(AnalyseError::EmptyStrokeTrace { line });
    }

    // Geometry pass: line equations, guidelines and straightness, with
    // the corner-distance matrix growing alongside in stroke order.
    let mut matrix = CornerDistanceMatrix::new();
    let mut analysed_lines = Vec::with_capacity(strokes.len());
    let mut total_deviation = 0.0f32;
    for (line_idx, stroke) in strokes.iter().enumerate() {
        matrix.extend_with_stroke(strokes, line_idx);
        let equation = LineEquation::of_segment(stroke.start, stroke.end);
        let (start, end) = extend_to_canvas(stroke.start, &equation, canvas);
        let average_deviation = average_point_deviation(&stroke.points, start, end);
        total_deviation += average_deviation;
        analysed_lines.push(AnalysedLine {
            start,
            end,
            box_start: stroke.start,
            box_end: stroke.end,
            equation,
            average_deviation,
            group_idx: 0,
        });
    }

    let matched = match_corners(&matrix)?;

    let groups = group_parallel_lines(&matched.line_connections);
    for (group_idx, members) in groups.iter().enumerate() {
        for &member in members {
            analysed_lines[member].group_idx = group_idx;
        }
    }
    debug!(
        "analyser: {} strokes partitioned into {} groups",
        strokes.len(),
        groups.len()
    );

    let mut group_details = Vec::with_capacity(groups.len());
    let mut scores = Vec::with_capacity(groups.len());
    for (group_idx, members) in groups.iter().enumerate() {
        let member_lines: Vec<&AnalysedLine> =
            members.iter().map(|&m| &analysed_lines[m]).collect();
        let closeness = closeness_for_group(&member_lines);
        let score = score_group(&closeness);
        scores.push(score);
        group_details.push(GroupDetail {
            group_idx,
            members: members.clone(),
            closeness,
            score,
        });
    }

    let line_details: Vec<LineDetail> = analysed_lines
        .iter()
        .enumerate()
        .map(|(idx, line)| LineDetail {
            line: idx,
            equation: line.equation,
            average_deviation: line.average_deviation,
            average_corner_distance: matched.per_line_corner_distance[idx],
            connections: matched.line_connections[idx].clone(),
            group_idx: line.group_idx,
        })
        .collect();

    let sketch = SketchAnalysis {
        average_corner_distance: matched.total_corner_distance
            / matched.matched_pair_count as f32,
        average_line_deviation: total_deviation / strokes.len() as f32,
        overall_perspective_score: overall_score(&scores),
        corner_distance_matrix: matrix.into_rows(),
        analysed_lines,
    };

    Ok(AnalysisReport {
        sketch,
        trace: AnalysisTrace {
            input: InputDescriptor {
                stroke_count: strokes.len(),
                canvas,
            },
            lines: line_details,
            groups: group_details,
        },
    })
}

/// Analyses many independent sketches in parallel. Each call owns its
/// scratch state, so no synchronization is needed beyond the pool.
pub fn analyse_batch(
    inputs: &[(Vec<Stroke>, CanvasSize)],
) -> Vec<Result<AnalysisReport, AnalyseError>> {
    inputs
        .par_iter()
        .map(|(strokes, canvas)| analyse(strokes, *canvas))
        .collect()
}

fn average_point_deviation(points: &[Point], line_start: Point, line_end: Point) -> f32 {
    let total: f32 = points
        .iter()
        .map(|&p| point_to_line_distance(p, line_start, line_end))
        .sum();
    total / points.len() as f32
}
