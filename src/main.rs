use plane_proposals::anchors::AnchorPyramidParams;
use plane_proposals::config::EvalConfig;
use plane_proposals::image::DepthImageF32;
use plane_proposals::{RansacPlaneFitter, SceneEvaluator};

fn main() {
    // Demo stub: scores a synthetic flat-wall depth frame with a reduced
    // anchor pyramid and prints the surviving proposals
    let w = 640usize;
    let h = 480usize;
    let mut depth = DepthImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            depth.set(x, y, 2.0);
        }
    }

    let config = EvalConfig {
        anchors: AnchorPyramidParams {
            scales: vec![128.0, 256.0],
            backbone_shapes: vec![[30, 40], [15, 20]],
            backbone_strides: vec![16, 32],
            ..Default::default()
        },
        ..Default::default()
    };
    let fitter = RansacPlaneFitter::new(config.plane_fit);
    let evaluator = SceneEvaluator::new(&config, &fitter);

    let result = evaluator.evaluate_frame(&depth);
    println!(
        "anchors={} kept={} latency_ms={:.3}",
        result.num_anchors,
        result.kept.len(),
        result.timing.total_ms
    );
    for anchor in result.kept.iter().take(5) {
        println!(
            "  #{:<6} score={:.3} rect=({:.0}, {:.0}, {:.0}, {:.0})",
            anchor.index, anchor.score, anchor.rect.y1, anchor.rect.x1, anchor.rect.y2, anchor.rect.x2
        );
    }
}
