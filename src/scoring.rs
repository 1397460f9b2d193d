//! Perspective-closeness scoring for parallel-edge groups.
//!
//! A well-drawn group either keeps its edges parallel on-canvas (zero
//! angle spread) or converges tightly toward one vanishing point (small,
//! consistent intersection distances). Parallel pairings are a
//! recognized state that switches the scoring formula, never an error.

use log::debug;
use serde::Serialize;

use crate::angle::{angle_pair_degrees, closest_representation};
use crate::geometry::{distance, intersection};
use crate::types::AnalysedLine;

/// How tightly a group's member lines converge, or how strictly they
/// stay parallel, plus the angle spread used by the parallel branch.
///
/// The distance aggregates are `None` when the group produced no
/// pairwise intersections at all: every pairing was parallel, or the
/// group has a single member. Such groups score through the angle
/// branch.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosenessDetails {
    pub has_parallel_lines: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_distance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_range: Option<f32>,
    pub angle_diff_degrees: f32,
    /// Both angle representations per member line, in degrees.
    pub line_angles: Vec<[f32; 2]>,
}

/// Computes pairwise intersection closeness for a group's member lines.
/// The group must have at least one member.
pub fn closeness_for_group(lines: &[&AnalysedLine]) -> ClosenessDetails {
    let mut has_parallel_lines = false;
    let mut per_line_distances: Vec<Vec<f32>> = Vec::with_capacity(lines.len());
    let mut line_angles: Vec<[f32; 2]> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        line_angles.push(angle_pair_degrees(line.box_start, line.box_end));
        let mut distances = Vec::new();
        for (j, other) in lines.iter().enumerate() {
            if i == j {
                continue;
            }
            match intersection(&line.equation, &other.equation) {
                Ok(point) => {
                    // closest-corner distance: the nearer of the two
                    // anchor endpoints to the crossing point
                    let from_box =
                        distance(line.box_start, point).min(distance(line.box_end, point));
                    distances.push(from_box);
                }
                Err(_) => has_parallel_lines = true,
            }
        }
        per_line_distances.push(distances);
    }

    let mut min_distance: Option<f32> = None;
    let mut max_distance: Option<f32> = None;
    let mut total_average = 0.0f32;
    let mut total_range = 0.0f32;

    for distances in &per_line_distances {
        if distances.is_empty() {
            continue;
        }
        let mut line_min = f32::INFINITY;
        let mut line_max = f32::NEG_INFINITY;
        let mut line_total = 0.0f32;
        for &dist in distances {
            line_total += dist;
            line_min = line_min.min(dist);
            line_max = line_max.max(dist);
        }
        min_distance = Some(min_distance.map_or(line_min, |m| m.min(line_min)));
        max_distance = Some(max_distance.map_or(line_max, |m| m.max(line_max)));
        total_average += line_total / distances.len() as f32;
        // Legacy aggregate kept for score compatibility with earlier
        // graders: only the min term is divided by the pairing count.
        total_range += line_max - line_min / distances.len() as f32;
    }

    // Gradient equality is transitive, so either every member had a
    // crossing or none did; dividing by the member count matches the
    // per-line averages above.
    let (average_distance, average_range) = if min_distance.is_some() {
        let count = lines.len() as f32;
        (Some(total_average / count), Some(total_range / count))
    } else {
        (None, None)
    };

    // Anchor on the first line's smaller representation, then compare
    // each line through whichever of its representations sits closest.
    let reference = line_angles[0][0].min(line_angles[0][1]);
    let chosen: Vec<f32> = line_angles
        .iter()
        .map(|&pair| closest_representation(pair, reference))
        .collect();
    let max_angle = chosen.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let min_angle = chosen.iter().copied().fold(f32::INFINITY, f32::min);

    ClosenessDetails {
        has_parallel_lines,
        min_distance,
        max_distance,
        average_distance,
        average_range,
        angle_diff_degrees: max_angle - min_angle,
        line_angles,
    }
}

/// Scores one group on the 0-100 scale.
///
/// Groups containing a parallel pairing (and groups with no pairings at
/// all) are judged on angle spread: well-drawn parallel edges have
/// near-zero spread. Convergent groups are judged on how tightly and
/// consistently they meet near one vanishing point; the square root
/// dampens the effect of a small minimum distance.
pub fn score_group(closeness: &ClosenessDetails) -> f32 {
    if closeness.has_parallel_lines {
        return 100.0 - closeness.angle_diff_degrees.min(100.0);
    }
    match (closeness.average_range, closeness.min_distance) {
        (Some(average_range), Some(min_distance)) => {
            100.0 - (average_range / min_distance.sqrt()).min(100.0)
        }
        _ => 100.0 - closeness.angle_diff_degrees.min(100.0),
    }
}

/// Arithmetic mean of the group scores.
pub fn overall_score(scores: &[f32]) -> f32 {
    debug!("scoring: group scores {scores:?}");
    scores.iter().sum::<f32>() / scores.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{extend_to_canvas, LineEquation};
    use crate::types::{CanvasSize, Point};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn line(box_start: (f32, f32), box_end: (f32, f32)) -> AnalysedLine {
        let box_start = Point::new(box_start.0, box_start.1);
        let box_end = Point::new(box_end.0, box_end.1);
        let equation = LineEquation::of_segment(box_start, box_end);
        let canvas = CanvasSize {
            width: 2000.0,
            height: 2000.0,
        };
        let (start, end) = extend_to_canvas(box_start, &equation, canvas);
        AnalysedLine {
            start,
            end,
            box_start,
            box_end,
            equation,
            average_deviation: 0.0,
            group_idx: 0,
        }
    }

    #[test]
    fn crossing_pair_scores_full_marks() {
        // Both lines meet at (5, 5); with one pairing each, the legacy
        // range collapses to zero and the convergent branch yields 100.
        let a = line((0.0, 0.0), (10.0, 10.0));
        let b = line((0.0, 10.0), (10.0, 0.0));
        let closeness = closeness_for_group(&[&a, &b]);
        assert!(!closeness.has_parallel_lines);
        assert!(approx_eq(closeness.min_distance.unwrap(), 50.0f32.sqrt()));
        assert!(approx_eq(closeness.max_distance.unwrap(), 50.0f32.sqrt()));
        assert!(approx_eq(closeness.average_range.unwrap(), 0.0));
        assert!(approx_eq(score_group(&closeness), 100.0));
    }

    #[test]
    fn parallel_group_scores_by_angle_spread() {
        // Two exactly parallel edges plus one tilted by 5°: the parallel
        // pairing switches to the angle branch and the spread is the
        // tilt.
        let a = line((0.0, 0.0), (10.0, 10.0));
        let b = line((0.0, 20.0), (10.0, 30.0));
        let tilt = 50.0f32.to_radians().tan() * 10.0;
        let c = line((0.0, 0.0), (10.0, tilt));
        let closeness = closeness_for_group(&[&a, &b, &c]);
        assert!(closeness.has_parallel_lines);
        assert!(approx_eq(closeness.angle_diff_degrees, 5.0));
        assert!(approx_eq(score_group(&closeness), 95.0));
    }

    #[test]
    fn fully_parallel_group_has_no_distances() {
        let a = line((0.0, 0.0), (10.0, 0.0));
        let b = line((0.0, 20.0), (10.0, 20.0));
        let closeness = closeness_for_group(&[&a, &b]);
        assert!(closeness.has_parallel_lines);
        assert_eq!(closeness.min_distance, None);
        assert_eq!(closeness.average_range, None);
        assert!(approx_eq(score_group(&closeness), 100.0));
    }

    #[test]
    fn singleton_group_scores_by_angle() {
        let a = line((0.0, 0.0), (10.0, 10.0));
        let closeness = closeness_for_group(&[&a]);
        assert!(!closeness.has_parallel_lines);
        assert_eq!(closeness.min_distance, None);
        assert!(approx_eq(closeness.angle_diff_degrees, 0.0));
        assert!(approx_eq(score_group(&closeness), 100.0));
    }

    #[test]
    fn legacy_average_range_is_preserved() {
        // Three lines converging exactly at (100, 0). Nearest anchors:
        // (10, 0) at 90, and (10, +/-90) at sqrt(16200) for the tilted
        // pair. Per-line contribution is max - min / 2, not
        // (max - min) / 2.
        let a = line((0.0, 0.0), (10.0, 0.0));
        let b = line((0.0, -100.0), (10.0, -90.0));
        let c = line((0.0, 100.0), (10.0, 90.0));
        let closeness = closeness_for_group(&[&a, &b, &c]);
        assert!(!closeness.has_parallel_lines);

        let diag = 16200.0f32.sqrt();
        let expected_range = (90.0 - 90.0 / 2.0 + 2.0 * (diag - diag / 2.0)) / 3.0;
        assert!(approx_eq(closeness.min_distance.unwrap(), 90.0));
        assert!(approx_eq(closeness.max_distance.unwrap(), diag));
        assert!(approx_eq(closeness.average_range.unwrap(), expected_range));

        let expected_score = 100.0 - expected_range / 90.0f32.sqrt();
        assert!(approx_eq(score_group(&closeness), expected_score));
    }

    #[test]
    fn overall_score_is_the_mean() {
        assert!(approx_eq(overall_score(&[100.0, 90.0, 95.0]), 95.0));
    }
}
