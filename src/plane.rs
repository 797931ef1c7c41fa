//! Robust plane fitting via RANSAC.
//!
//! Samples 3-point minimal subsets, forms the plane through them, and keeps
//! the model with the most inliers by absolute point-to-plane distance. The
//! RNG is seeded from the configuration, never from process-wide state, so
//! fitting is reproducible and safe to run from a worker pool.
use nalgebra::Vector3;
use rand::prelude::*;
use serde::Deserialize;

/// RANSAC schedule for the plane fitter.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PlaneFitParams {
    /// Number of minimal-subset hypotheses to try.
    pub max_iters: usize,
    /// Absolute point-to-plane distance (metres) below which a point is an inlier.
    pub inlier_threshold: f32,
    /// Seed for the per-fit RNG.
    pub seed: u64,
}

impl Default for PlaneFitParams {
    fn default() -> Self {
        Self {
            max_iters: 100,
            inlier_threshold: 0.01,
            seed: 13,
        }
    }
}

/// Boolean inlier mask produced by a plane-fitting backend.
///
/// `Sync` so that per-anchor scoring can share one fitter across workers.
pub trait PlaneFitter: Sync {
    /// Inlier mask of the same length as `points`.
    ///
    /// Degenerate input (`n < 3`, or every sampled triple collinear) yields
    /// an all-false mask rather than an error.
    fn fit(&self, points: &[Vector3<f32>]) -> Vec<bool>;
}

/// Seeded RANSAC plane fitter.
#[derive(Clone, Copy, Debug, Default)]
pub struct RansacPlaneFitter {
    params: PlaneFitParams,
}

impl RansacPlaneFitter {
    pub fn new(params: PlaneFitParams) -> Self {
        Self { params }
    }
}

impl PlaneFitter for RansacPlaneFitter {
    fn fit(&self, points: &[Vector3<f32>]) -> Vec<bool> {
        let n = points.len();
        if n < 3 {
            return vec![false; n];
        }

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let mut best_count = 0usize;
        let mut best_mask = vec![false; n];

        for _ in 0..self.params.max_iters {
            let sample = sample_indices(&mut rng, n, 3);
            let p0 = points[sample[0]];
            let normal = (points[sample[1]] - p0).cross(&(points[sample[2]] - p0));
            let norm = normal.norm();
            if norm < 1e-9 {
                // collinear triple
                continue;
            }
            let normal = normal / norm;
            let offset = -normal.dot(&p0);

            let mut count = 0usize;
            let mut mask = vec![false; n];
            for (i, p) in points.iter().enumerate() {
                if (normal.dot(p) + offset).abs() < self.params.inlier_threshold {
                    mask[i] = true;
                    count += 1;
                }
            }

            if count > best_count {
                best_count = count;
                best_mask = mask;

                // Early exit: if >90% of points are inliers, stop searching
                if best_count * 10 > n * 9 {
                    break;
                }
            }
        }

        best_mask
    }
}

/// Sample `k` distinct indices from `0..n` using a Fisher–Yates partial shuffle.
fn sample_indices(rng: &mut impl Rng, n: usize, k: usize) -> Vec<usize> {
    debug_assert!(k <= n);
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}
