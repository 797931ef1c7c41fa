//! Depth back-projection and per-anchor point pooling.
//!
//! A [`PointField`] holds one 3D point per depth pixel, obtained by pinhole
//! back-projection through the camera intrinsics. Pixels with missing depth
//! map to the zero vector, which the scorer later treats as invalid. Pooling
//! samples the field on a fixed-size grid of bin centers inside an anchor's
//! footprint so every anchor yields a patch of the same length.
use crate::image::DepthImageF32;
use crate::types::AnchorBox;
use nalgebra::{Matrix3, Vector3};

/// Dense 3D point field, one point per depth pixel, row-major.
#[derive(Clone, Debug)]
pub struct PointField {
    pub w: usize,
    pub h: usize,
    points: Vec<Vector3<f32>>,
}

impl PointField {
    /// Back-project a depth map through `kmtx` (pinhole intrinsics).
    ///
    /// `X = (u - cx) z / fx`, `Y = (v - cy) z / fy`, `Z = z`; zero depth
    /// yields the zero vector.
    pub fn from_depth(depth: &DepthImageF32, kmtx: &Matrix3<f32>) -> Self {
        let fx = kmtx[(0, 0)];
        let fy = kmtx[(1, 1)];
        let cx = kmtx[(0, 2)];
        let cy = kmtx[(1, 2)];

        let mut points = Vec::with_capacity(depth.w * depth.h);
        for v in 0..depth.h {
            let row = depth.row(v);
            for (u, &z) in row.iter().enumerate() {
                if z > 0.0 {
                    points.push(Vector3::new(
                        (u as f32 - cx) * z / fx,
                        (v as f32 - cy) * z / fy,
                        z,
                    ));
                } else {
                    points.push(Vector3::zeros());
                }
            }
        }
        Self {
            w: depth.w,
            h: depth.h,
            points,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Vector3<f32> {
        self.points[y * self.w + x]
    }

    /// Pool the field over `rect` on a `pool_h × pool_w` grid of bin centers
    /// with nearest-pixel sampling.
    ///
    /// Bin centers falling outside the frame contribute the zero vector, so
    /// anchors hanging off the image edge are penalized by the scorer's
    /// full-patch denominator. The returned patch always has length
    /// `pool_h * pool_w`.
    pub fn pool_patch(&self, rect: &AnchorBox, pool_h: usize, pool_w: usize) -> Vec<Vector3<f32>> {
        let bin_h = rect.height() / pool_h as f32;
        let bin_w = rect.width() / pool_w as f32;

        let mut patch = Vec::with_capacity(pool_h * pool_w);
        for by in 0..pool_h {
            let sy = rect.y1 + (by as f32 + 0.5) * bin_h;
            for bx in 0..pool_w {
                let sx = rect.x1 + (bx as f32 + 0.5) * bin_w;
                if sx < 0.0 || sy < 0.0 || sx >= self.w as f32 || sy >= self.h as f32 {
                    patch.push(Vector3::zeros());
                } else {
                    patch.push(self.get(sx as usize, sy as usize));
                }
            }
        }
        patch
    }
}
