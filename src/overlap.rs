//! Jaccard overlap between axis-aligned boxes.
use crate::types::AnchorBox;

/// Overlap ratio (intersection area over union area) of two boxes.
///
/// The intersection width and height are clamped at zero, so disjoint boxes
/// report exactly `0.0` instead of a phantom negative area. Two boxes whose
/// union has zero area also report `0.0`.
///
/// Symmetric: `overlap(a, b) == overlap(b, a)`.
pub fn overlap(a: &AnchorBox, b: &AnchorBox) -> f32 {
    let y1 = a.y1.max(b.y1);
    let y2 = a.y2.min(b.y2);
    let x1 = a.x1.max(b.x1);
    let x2 = a.x2.min(b.x2);

    let intersection = (y2 - y1).max(0.0) * (x2 - x1).max(0.0);
    let union = a.area() + b.area() - intersection;
    if union <= 0.0 {
        return 0.0;
    }
    intersection / union
}
