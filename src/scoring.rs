//! Per-anchor plane-consistency scoring.
use crate::plane::PlaneFitter;
use nalgebra::Vector3;

/// Points with a norm at or below this are treated as missing depth.
pub const MIN_POINT_NORM: f32 = 1e-3;

/// Score one pooled point patch against its best-fit plane.
///
/// Near-zero points are filtered out before fitting; an empty or all-invalid
/// patch scores `0.0` without touching the fitter. The denominator is the
/// full pooled patch size, invalid samples included, so anchors dominated by
/// missing depth score low even when every valid point lies on the plane.
///
/// Pure function of the patch; safe to call concurrently for independent
/// patches.
pub fn score_patch<F: PlaneFitter + ?Sized>(fitter: &F, patch: &[Vector3<f32>]) -> f32 {
    if patch.is_empty() {
        return 0.0;
    }
    let valid: Vec<Vector3<f32>> = patch
        .iter()
        .copied()
        .filter(|p| p.norm() > MIN_POINT_NORM)
        .collect();
    if valid.is_empty() {
        return 0.0;
    }
    let mask = fitter.fit(&valid);
    let inliers = mask.iter().filter(|&&m| m).count();
    inliers as f32 / patch.len() as f32
}
