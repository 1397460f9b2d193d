use serde::Serialize;

use crate::scoring::ClosenessDetails;

/// Per-group closeness details and score.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    pub group_idx: usize,
    pub members: Vec<usize>,
    pub closeness: ClosenessDetails,
    pub score: f32,
}
