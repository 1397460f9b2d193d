//! JSON-backed inputs for the demo binaries.

pub mod sketch;

pub use sketch::{load_sketch, SketchFile};
