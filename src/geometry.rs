//! Planar geometry primitives for stroke analysis.
//!
//! All functions here are pure and total, with one exception:
//! [`intersection`] signals [`ParallelLines`] when the operands share a
//! gradient. That is a recognized state consumed by the scorer, not a
//! failure.

use nalgebra::Vector2;
use serde::Serialize;

use crate::types::{CanvasSize, Point};

/// Slope-intercept form of the infinite line through a stroke.
///
/// A stroke with zero horizontal extent has no finite gradient; that
/// case is carried as an explicit variant instead of a NaN sentinel so
/// the parallel check in [`intersection`] stays an ordinary match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LineEquation {
    Sloped { gradient: f32, y_intercept: f32 },
    Vertical { x: f32 },
}

impl LineEquation {
    /// Fits the line through a stroke's anchor endpoints. The gradient
    /// is taken rightmost-minus-leftmost so its sign does not depend on
    /// the drawing direction; the intercept is computed from `start`.
    pub fn of_segment(start: Point, end: Point) -> Self {
        if end.x == start.x {
            return LineEquation::Vertical { x: start.x };
        }
        let (left, right) = if start.x < end.x {
            (start, end)
        } else {
            (end, start)
        };
        let gradient = (right.y - left.y) / (right.x - left.x);
        LineEquation::Sloped {
            gradient,
            y_intercept: start.y - gradient * start.x,
        }
    }
}

/// Euclidean distance between two canvas points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (b.coords() - a.coords()).norm()
}

/// Offset that maps `a` onto `b`.
#[inline]
pub fn translation(a: Point, b: Point) -> Vector2<f32> {
    b.coords() - a.coords()
}

/// Translates a point by the given offset.
#[inline]
pub fn translate(point: Point, offset: Vector2<f32>) -> Point {
    Point::new(point.x + offset.x, point.y + offset.y)
}

/// Perpendicular distance from a point to the infinite line through
/// `line_start` and `line_end`. The endpoints must be distinct.
pub fn point_to_line_distance(point: Point, line_start: Point, line_end: Point) -> f32 {
    let dir = line_end.coords() - line_start.coords();
    let rel = point.coords() - line_start.coords();
    dir.perp(&rel).abs() / dir.norm()
}

/// Extends a stroke's line to the canvas rectangle and returns the two
/// border crossing points. This is the guideline drawn for visual
/// feedback.
///
/// Border candidates are evaluated in the fixed order x=0, x=width,
/// y=0, y=height; the first two that land inside the canvas become the
/// guideline endpoints. Divisions by a zero gradient produce non-finite
/// candidates that the bounds filter discards.
pub fn extend_to_canvas(start: Point, equation: &LineEquation, canvas: CanvasSize) -> (Point, Point) {
    match *equation {
        LineEquation::Vertical { x } => (Point::new(x, 0.0), Point::new(x, canvas.height)),
        LineEquation::Sloped {
            gradient,
            y_intercept,
        } => {
            let candidates = [
                Point::new(0.0, y_intercept),
                Point::new(canvas.width, gradient * canvas.width + y_intercept),
                Point::new(-y_intercept / gradient, 0.0),
                Point::new((canvas.height - y_intercept) / gradient, canvas.height),
            ];
            let mut in_bounds = candidates.iter().filter(|p| {
                p.x >= 0.0 && p.x <= canvas.width && p.y >= 0.0 && p.y <= canvas.height
            });
            let first = in_bounds.next().copied();
            let second = in_bounds.next().copied();
            debug_assert!(
                second.is_some(),
                "stroke line must cross the canvas border twice"
            );
            (first.unwrap_or(start), second.unwrap_or(start))
        }
    }
}

/// Signal raised by [`intersection`] when two lines share a gradient
/// (including the both-vertical case) and therefore never cross.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelLines;

impl std::fmt::Display for ParallelLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lines are parallel")
    }
}

impl std::error::Error for ParallelLines {}

/// Crossing point of two lines.
///
/// A single vertical operand is resolved by substituting its x into the
/// other equation; two sloped operands solve the pair of slope-intercept
/// equations directly.
pub fn intersection(a: &LineEquation, b: &LineEquation) -> Result<Point, ParallelLines> {
    use LineEquation::{Sloped, Vertical};
    match (*a, *b) {
        (Vertical { .. }, Vertical { .. }) => Err(ParallelLines),
        (
            Vertical { x },
            Sloped {
                gradient,
                y_intercept,
            },
        )
        | (
            Sloped {
                gradient,
                y_intercept,
            },
            Vertical { x },
        ) => Ok(Point::new(x, gradient * x + y_intercept)),
        (
            Sloped {
                gradient: gradient_a,
                y_intercept: intercept_a,
            },
            Sloped {
                gradient: gradient_b,
                y_intercept: intercept_b,
            },
        ) => {
            if gradient_a == gradient_b {
                return Err(ParallelLines);
            }
            let x = (intercept_b - intercept_a) / (gradient_a - gradient_b);
            Ok(Point::new(x, gradient_a * x + intercept_a))
        }
    }
}
