//! Multi-scale anchor pyramid generation.
//!
//! One anchor scale per backbone level; every level spans its feature map
//! with one anchor group per (subsampled) cell and one anchor per aspect
//! ratio. Deterministic for fixed parameters, so the set is generated once
//! per run and reused for every frame.
use crate::types::AnchorBox;
use serde::Deserialize;

/// Parameters of the anchor pyramid.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AnchorPyramidParams {
    /// Anchor side length in pixels, one per backbone level.
    pub scales: Vec<f32>,
    /// Width/height aspect ratios shared by all levels.
    pub ratios: Vec<f32>,
    /// Feature-map shape (rows, cols) per backbone level.
    pub backbone_shapes: Vec<[usize; 2]>,
    /// Feature-map stride in pixels per backbone level.
    pub backbone_strides: Vec<usize>,
    /// Subsampling step over feature-map cells (1 = every cell).
    pub anchor_stride: usize,
}

impl Default for AnchorPyramidParams {
    /// Five-level pyramid matching a 640x480 frame with strides 4..64.
    fn default() -> Self {
        Self {
            scales: vec![32.0, 64.0, 128.0, 256.0, 512.0],
            ratios: vec![0.5, 1.0, 2.0],
            backbone_shapes: vec![[120, 160], [60, 80], [30, 40], [15, 20], [8, 10]],
            backbone_strides: vec![4, 8, 16, 32, 64],
            anchor_stride: 1,
        }
    }
}

/// Generate the full anchor set, levels concatenated in scale order.
///
/// Anchor order within a level is row-major over cell centers, then by
/// ratio; the index of each anchor is its position in the returned vector
/// and stays fixed through scoring and suppression.
pub fn generate_pyramid_anchors(params: &AnchorPyramidParams) -> Vec<AnchorBox> {
    let mut anchors = Vec::new();
    for (level, &scale) in params.scales.iter().enumerate() {
        let shape = params.backbone_shapes[level];
        let stride = params.backbone_strides[level];
        push_level_anchors(
            scale,
            &params.ratios,
            shape,
            stride,
            params.anchor_stride,
            &mut anchors,
        );
    }
    anchors
}

fn push_level_anchors(
    scale: f32,
    ratios: &[f32],
    shape: [usize; 2],
    stride: usize,
    anchor_stride: usize,
    out: &mut Vec<AnchorBox>,
) {
    for row in (0..shape[0]).step_by(anchor_stride) {
        let cy = (row * stride) as f32;
        for col in (0..shape[1]).step_by(anchor_stride) {
            let cx = (col * stride) as f32;
            for &ratio in ratios {
                let h = scale / ratio.sqrt();
                let w = scale * ratio.sqrt();
                out.push(AnchorBox::new(
                    cy - 0.5 * h,
                    cx - 0.5 * w,
                    cy + 0.5 * h,
                    cx + 0.5 * w,
                ));
            }
        }
    }
}
