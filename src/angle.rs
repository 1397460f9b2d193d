//! Undirected segment angles in degrees.
//!
//! A stroke has no inherent direction, so its on-canvas angle has two
//! equivalent representations 180° apart. The scorer compares angles
//! across a group by picking, per line, whichever representation sits
//! closest to a shared reference; carrying the principal value in
//! [0, 180) together with its shifted twin keeps that comparison stable
//! for lines straddling the 0°/180° wrap.

use crate::types::Point;

/// Both angle representations of the segment from `start` to `end`: the
/// principal value in [0, 180) and the same direction shifted by -180°.
#[inline]
pub fn angle_pair_degrees(start: Point, end: Point) -> [f32; 2] {
    let raw = (end.y - start.y).atan2(end.x - start.x).to_degrees();
    let principal = raw.rem_euclid(180.0);
    [principal, principal - 180.0]
}

/// Picks the representation numerically closest to `reference`. Ties
/// resolve to the shifted twin.
#[inline]
pub fn closest_representation(pair: [f32; 2], reference: f32) -> f32 {
    if (reference - pair[0]).abs() < (reference - pair[1]).abs() {
        pair[0]
    } else {
        pair[1]
    }
}
