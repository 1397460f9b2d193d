//! Synthetic stroke fixtures for the integration tests.

use cube_grader::{CanvasSize, Point, Stroke};

pub const CANVAS: CanvasSize = CanvasSize {
    width: 640.0,
    height: 480.0,
};

/// A stroke whose trace samples lie exactly on the anchor line.
pub fn straight_stroke(start: (f32, f32), end: (f32, f32)) -> Stroke {
    let start = Point::new(start.0, start.1);
    let end = Point::new(end.0, end.1);
    let points = (1..4)
        .map(|i| {
            let t = i as f32 / 4.0;
            Point::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            )
        })
        .collect();
    Stroke { start, end, points }
}

/// Twelve strokes tracing an exact oblique wireframe cube: a front
/// square, a back square offset by (40, -40), and the four connecting
/// edges. Endpoint positions are reused exactly across edges, so every
/// matched corner distance is zero. The first three strokes are the
/// edges meeting at the front-top-left corner, per the drawing-order
/// contract.
pub fn exact_cube() -> Vec<Stroke> {
    let a = (100.0, 100.0);
    let b = (200.0, 100.0);
    let c = (200.0, 200.0);
    let d = (100.0, 200.0);
    let a_back = (140.0, 60.0);
    let b_back = (240.0, 60.0);
    let c_back = (240.0, 160.0);
    let d_back = (140.0, 160.0);
    vec![
        straight_stroke(a, b),           // 0: front top
        straight_stroke(a, d),           // 1: front left
        straight_stroke(a, a_back),      // 2: connector at the nearest corner
        straight_stroke(b, c),           // 3: front right
        straight_stroke(d, c),           // 4: front bottom
        straight_stroke(b, b_back),      // 5: connector
        straight_stroke(d, d_back),      // 6: connector
        straight_stroke(a_back, b_back), // 7: back top
        straight_stroke(a_back, d_back), // 8: back left
        straight_stroke(b_back, c_back), // 9: back right
        straight_stroke(d_back, c_back), // 10: back bottom
        straight_stroke(c, c_back),      // 11: connector
    ]
}

/// A one-point-perspective cube: the front face is drawn square, the
/// back face sits 40% of the way toward the vanishing point (320, 240),
/// so the four connecting edges all converge exactly there while the
/// front/back horizontals and verticals stay parallel.
pub fn perspective_cube() -> Vec<Stroke> {
    let a = (200.0, 140.0);
    let b = (440.0, 140.0);
    let c = (440.0, 380.0);
    let d = (200.0, 380.0);
    let a_back = (248.0, 180.0);
    let b_back = (392.0, 180.0);
    let c_back = (392.0, 324.0);
    let d_back = (248.0, 324.0);
    vec![
        straight_stroke(a, b),
        straight_stroke(a, d),
        straight_stroke(a, a_back),
        straight_stroke(b, c),
        straight_stroke(d, c),
        straight_stroke(b, b_back),
        straight_stroke(d, d_back),
        straight_stroke(a_back, b_back),
        straight_stroke(a_back, d_back),
        straight_stroke(b_back, c_back),
        straight_stroke(d_back, c_back),
        straight_stroke(c, c_back),
    ]
}

/// The exact cube with the last connector slid 15 units to the right:
/// both of its corners end up farther than the matching threshold from
/// every other corner, so the sketch no longer closes.
pub fn unclosed_cube() -> Vec<Stroke> {
    let mut strokes = exact_cube();
    strokes[11] = straight_stroke((215.0, 200.0), (255.0, 160.0));
    strokes
}
