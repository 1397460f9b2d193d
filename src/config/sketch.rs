use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::types::{CanvasSize, Stroke};

/// On-disk sketch: the canvas extent plus the drawn strokes in drawing
/// order.
#[derive(Debug, Deserialize)]
pub struct SketchFile {
    pub canvas: CanvasSize,
    pub strokes: Vec<Stroke>,
}

pub fn load_sketch(path: &Path) -> Result<SketchFile, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read sketch {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse sketch {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_sketch() {
        let json = r#"{
            "canvas": { "width": 640.0, "height": 480.0 },
            "strokes": [
                {
                    "start": { "x": 0.0, "y": 0.0 },
                    "end": { "x": 10.0, "y": 0.0 },
                    "points": [{ "x": 5.0, "y": 0.1 }]
                }
            ]
        }"#;
        let sketch: SketchFile = serde_json::from_str(json).expect("valid sketch json");
        assert_eq!(sketch.strokes.len(), 1);
        assert_eq!(sketch.canvas.width, 640.0);
        assert_eq!(sketch.strokes[0].points[0].y, 0.1);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_sketch(Path::new("/nonexistent/sketch.json")).expect_err("no such file");
        assert!(err.contains("/nonexistent/sketch.json"));
    }
}
