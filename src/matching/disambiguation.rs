//! Second-pass disambiguation for ambiguous corner clusters.
//!
//! When two cube vertices land close together on-canvas, a corner's
//! candidate set spans more than two strokes and the direct projection
//! onto line connections would wire unrelated edges together. The
//! default strategy anchors on the opposite end of the same stroke and
//! exploits the fixed cube topology (exactly three edges per vertex) to
//! pick out the true connections.

use log::debug;

use super::{line_of, opposite_corner, CornerConnectionMap};

/// Strategy for resolving a corner whose candidates span more than two
/// strokes. Returns the stroke indices accepted as the corner's true
/// connections.
pub trait Disambiguate {
    fn disambiguate(&self, corner: usize, corners: &CornerConnectionMap) -> Vec<usize>;
}

/// Default strategy: third-order connection frequencies from the
/// opposite-end anchor.
///
/// The anchor corner's direct connections are followed across their
/// strokes (second order), then across once more (third order). A
/// stroke seen in all three third-order branches is structurally
/// confirmed: two ambiguous candidate edges sharing a third common edge
/// is strong evidence of the true vertex structure. When exactly two
/// strokes are confirmed, only those are accepted; otherwise candidates
/// already reachable through the second-order set are excluded, so a
/// path established from the opposite end is not counted twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThirdOrderFrequency;

impl Disambiguate for ThirdOrderFrequency {
    fn disambiguate(&self, corner: usize, corners: &CornerConnectionMap) -> Vec<usize> {
        let line_count = corners.corner_count() / 2;
        let anchor = opposite_corner(corner);

        let second_order: Vec<usize> = corners
            .connections(anchor)
            .iter()
            .flat_map(|&c| corners.connections(opposite_corner(c)).iter().copied())
            .collect();
        let second_order_lines: Vec<usize> =
            second_order.iter().map(|&c| line_of(c)).collect();

        let mut frequencies = vec![0usize; line_count];
        for &c in &second_order {
            for &third in corners.connections(opposite_corner(c)) {
                frequencies[line_of(third)] += 1;
            }
        }
        let confirmed: Vec<usize> = (0..line_count)
            .filter(|&line| frequencies[line] == 3)
            .collect();

        let accepted: Vec<usize> = corners
            .connections(corner)
            .iter()
            .map(|&c| line_of(c))
            .filter(|line| {
                if confirmed.len() == 2 {
                    confirmed.contains(line)
                } else {
                    !second_order_lines.contains(line)
                }
            })
            .collect();
        debug!(
            "matcher: corner {corner} resolved with {} confirmed strokes, accepting {:?}",
            confirmed.len(),
            accepted
        );
        accepted
    }
}
