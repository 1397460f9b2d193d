use cube_grader::analyse;
use cube_grader::config::load_sketch;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let sketch_path = env::args().nth(1).ok_or_else(usage)?;
    let sketch = load_sketch(Path::new(&sketch_path))?;
    let report = analyse(&sketch.strokes, sketch.canvas).map_err(|e| e.to_string())?;

    println!(
        "strokes={} groups={} score={:.1} avg_deviation={:.2} avg_corner_distance={:.2}",
        report.sketch.analysed_lines.len(),
        report.trace.groups.len(),
        report.sketch.overall_perspective_score,
        report.sketch.average_line_deviation,
        report.sketch.average_corner_distance,
    );
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to serialize report: {e}"))?;
    println!("{json}");
    Ok(())
}

fn usage() -> String {
    "Usage: analyse_demo <sketch.json>".to_string()
}
