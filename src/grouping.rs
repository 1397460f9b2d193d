//! Partition strokes into parallel-edge groups.
//!
//! Two strokes bound the same cube face, and therefore run parallel on
//! the real cube, exactly when their connection lists share two entries
//! (the two edges joining them). Group membership follows that relation
//! transitively.

use std::collections::VecDeque;

use log::debug;

/// Number of entries of `reference` that also appear in `other`.
/// Duplicate entries in `reference` are counted each time they match,
/// mirroring how connection lists keep duplicate sightings.
fn shared_connections(reference: &[usize], other: &[usize]) -> usize {
    reference.iter().filter(|idx| other.contains(idx)).count()
}

/// Groups strokes whose connection lists share exactly two entries,
/// transitively from each newly added stroke.
///
/// Seeds are taken in ascending stroke order and expansion uses an
/// explicit work-list, so the partition is deterministic and every
/// stroke lands in exactly one group. Membership is binary: ties in
/// "exactly two shared connections" need no further break.
pub fn group_parallel_lines(line_connections: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let count = line_connections.len();
    let mut group_of: Vec<Option<usize>> = vec![None; count];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for seed in 0..count {
        if group_of[seed].is_some() {
            continue;
        }
        let group_idx = groups.len();
        group_of[seed] = Some(group_idx);
        let mut members = vec![seed];
        let mut queue = VecDeque::from([seed]);
        while let Some(current) = queue.pop_front() {
            for candidate in 0..count {
                if group_of[candidate].is_some() {
                    continue;
                }
                let shared =
                    shared_connections(&line_connections[current], &line_connections[candidate]);
                if shared == 2 {
                    group_of[candidate] = Some(group_idx);
                    members.push(candidate);
                    queue.push_back(candidate);
                }
            }
        }
        debug!("grouping: group {group_idx} holds strokes {members:?}");
        groups.push(members);
    }
    groups
}
