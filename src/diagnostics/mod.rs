//! Serializable report structures returned by the analyser.
//!
//! [`AnalysisReport`] bundles the user-facing result
//! ([`SketchAnalysis`]) with an [`AnalysisTrace`] describing the
//! intermediate per-line and per-group computations. The trace is an
//! explicit output channel for diagnostics; nothing in it is needed for
//! correctness.

pub mod groups;
pub mod lines;

pub use groups::GroupDetail;
pub use lines::LineDetail;

use serde::Serialize;

use crate::types::{CanvasSize, SketchAnalysis};

/// Result produced by [`analyse`](crate::analyse).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub sketch: SketchAnalysis,
    pub trace: AnalysisTrace,
}

/// End-to-end trace of one analysis run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTrace {
    pub input: InputDescriptor,
    pub lines: Vec<LineDetail>,
    pub groups: Vec<GroupDetail>,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub stroke_count: usize,
    pub canvas: CanvasSize,
}
