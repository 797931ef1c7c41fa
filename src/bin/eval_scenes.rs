use plane_proposals::config::{load_config, EvalConfig};
use plane_proposals::image::write_json_file;
use plane_proposals::render::{NullSink, OverlaySink, RenderSink};
use plane_proposals::types::SceneReport;
use plane_proposals::{RansacPlaneFitter, SceneEvaluator};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "eval_scenes".to_string());
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| format!("Usage: {program} <config.json>"))?;
    let config = load_config(Path::new(&config_path))?;

    let fitter = RansacPlaneFitter::new(config.plane_fit);
    let evaluator = SceneEvaluator::new(&config, &fitter);

    let mut sink: Box<dyn RenderSink> = match &config.output.overlay_dir {
        Some(dir) => Box::new(OverlaySink::new(dir)),
        None => Box::new(NullSink),
    };

    let reports = evaluator.run(sink.as_mut())?;
    print_summary(&config, &reports);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &reports)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn print_summary(config: &EvalConfig, reports: &[SceneReport]) {
    println!("Evaluation summary");
    println!("  scenes_root: {}", config.scenes_root.display());
    println!("  scenes: {}", reports.len());
    for scene in reports {
        let kept: usize = scene.frames.iter().map(|f| f.result.kept.len()).sum();
        let total_ms: f64 = scene.frames.iter().map(|f| f.result.timing.total_ms).sum();
        println!(
            "  {}: frames={} skipped={} kept_total={} time_ms={:.1}",
            scene.scene,
            scene.frames.len(),
            scene.skipped_frames,
            kept,
            total_ms
        );
    }
}
