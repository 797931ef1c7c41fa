use nalgebra::Matrix3;
use plane_proposals::anchors::AnchorPyramidParams;
use plane_proposals::config::{EvalConfig, EvalParams};
use plane_proposals::image::DepthImageF32;

/// Depth map of a flat frontal wall at distance `z` metres.
pub fn flat_wall_depth(w: usize, h: usize, z: f32) -> DepthImageF32 {
    DepthImageF32::from_raw(w, h, vec![z; w * h])
}

/// Depth map with the right half missing (zero depth).
pub fn half_missing_depth(w: usize, h: usize, z: f32) -> DepthImageF32 {
    let mut depth = DepthImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w / 2 {
            depth.set(x, y, z);
        }
    }
    depth
}

/// Configuration sized for a 64x48 synthetic frame: a two-level anchor
/// pyramid and a small pooling grid to keep test runtime down.
pub fn small_frame_config() -> EvalConfig {
    EvalConfig {
        kmtx: Matrix3::new(100.0, 0.0, 32.0, 0.0, 100.0, 24.0, 0.0, 0.0, 1.0),
        anchors: AnchorPyramidParams {
            scales: vec![16.0, 32.0],
            ratios: vec![0.5, 1.0, 2.0],
            backbone_shapes: vec![[6, 8], [3, 4]],
            backbone_strides: vec![8, 16],
            anchor_stride: 1,
        },
        eval: EvalParams {
            pool_shape: [7, 7],
            ..Default::default()
        },
        ..Default::default()
    }
}
