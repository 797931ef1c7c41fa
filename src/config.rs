//! Runtime configuration for scene evaluation.
//!
//! One immutable structure, deserialized from a JSON file. Every knob has a
//! default sized for the capture rig (640x480 frames, millimetre
//! depth, suppression threshold 0.3), so a minimal config only names the
//! scenes root.
use crate::anchors::AnchorPyramidParams;
use crate::plane::PlaneFitParams;
use nalgebra::Matrix3;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Scene-evaluation configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct EvalConfig {
    /// Directory containing one sub-directory per scene.
    pub scenes_root: PathBuf,
    /// Camera intrinsics, constant across all frames.
    #[serde(default = "default_kmtx")]
    pub kmtx: Matrix3<f32>,
    #[serde(default)]
    pub anchors: AnchorPyramidParams,
    #[serde(default)]
    pub plane_fit: PlaneFitParams,
    #[serde(default)]
    pub eval: EvalParams,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            scenes_root: PathBuf::from("scenes"),
            kmtx: default_kmtx(),
            anchors: AnchorPyramidParams::default(),
            plane_fit: PlaneFitParams::default(),
            eval: EvalParams::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Knobs for patch pooling and suppression.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    /// Pooled patch shape (rows, cols) sampled inside each anchor.
    pub pool_shape: [usize; 2],
    /// Jaccard overlap above which the lower-scoring anchor is discarded.
    pub nms_threshold: f32,
    /// Depth-unit scale applied on load (stored millimetres → metres).
    pub depth_scale: f32,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            pool_shape: [28, 28],
            nms_threshold: 0.3,
            depth_scale: 1e-3,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Per-frame overlay PNGs are written under this directory when set.
    pub overlay_dir: Option<PathBuf>,
    /// Aggregated scene reports are written here when set.
    pub report_json: Option<PathBuf>,
}

/// Intrinsics of the 640x480 capture rig.
fn default_kmtx() -> Matrix3<f32> {
    Matrix3::new(554.256, 0.0, 320.0, 0.0, 579.411, 240.0, 0.0, 0.0, 1.0)
}

pub fn load_config(path: &Path) -> Result<EvalConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: EvalConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let config: EvalConfig = serde_json::from_str(r#"{ "scenes_root": "/data" }"#)
            .expect("minimal config should parse");
        assert_eq!(config.scenes_root, PathBuf::from("/data"));
        assert_eq!(config.eval.nms_threshold, 0.3);
        assert_eq!(config.eval.pool_shape, [28, 28]);
        assert_eq!(config.plane_fit.seed, 13);
        assert!((config.kmtx[(0, 0)] - 554.256).abs() < 1e-3);
        assert!(config.output.overlay_dir.is_none());
    }

    #[test]
    fn fields_can_be_overridden_individually() {
        let config: EvalConfig = serde_json::from_str(
            r#"{
                "scenes_root": "/data",
                "eval": { "nms_threshold": 0.5 },
                "plane_fit": { "seed": 7 }
            }"#,
        )
        .expect("override config should parse");
        assert_eq!(config.eval.nms_threshold, 0.5);
        assert_eq!(config.plane_fit.seed, 7);
        // untouched fields keep their defaults
        assert_eq!(config.eval.depth_scale, 1e-3);
    }
}
