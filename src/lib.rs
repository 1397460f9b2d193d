#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyser;
pub mod config;
pub mod diagnostics;
pub mod types;

// Pipeline stages – still public for tools and tests, but considered
// unstable internals.
pub mod angle;
pub mod geometry;
pub mod grouping;
pub mod matching;
pub mod scoring;

// --- High-level re-exports -------------------------------------------------

// Main entry points + input/result types.
pub use crate::analyser::{analyse, analyse_batch, AnalyseError};
pub use crate::types::{AnalysedLine, CanvasSize, Point, SketchAnalysis, Stroke};

// High-level diagnostics returned by the analyser.
pub use crate::diagnostics::{AnalysisReport, AnalysisTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{
        analyse, AnalyseError, AnalysisReport, CanvasSize, Point, SketchAnalysis, Stroke,
    };
}
