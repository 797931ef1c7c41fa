//! Greedy non-maximum suppression over scored anchors.
//!
//! The highest-scoring anchor is kept and every still-eligible anchor whose
//! overlap with it exceeds the threshold is discarded; the process repeats on
//! the remainder. Kept pairs therefore never overlap by more than the
//! threshold, and each discarded anchor loses to a kept anchor of equal or
//! higher score.
use crate::overlap::overlap;
use crate::types::AnchorBox;
use std::cmp::Ordering;

/// Greedy descending-score suppression.
///
/// Returns the kept indices, best score first. Equal scores are processed in
/// original-index order, so the result is deterministic. Re-running on the
/// kept subset with the same threshold returns it unchanged.
pub fn suppress(anchors: &[AnchorBox], scores: &[f32], threshold: f32) -> Vec<usize> {
    debug_assert_eq!(anchors.len(), scores.len());

    let mut order: Vec<usize> = (0..anchors.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });

    let mut eligible = vec![true; anchors.len()];
    let mut kept = Vec::new();
    for (pos, &k) in order.iter().enumerate() {
        if !eligible[k] {
            continue;
        }
        eligible[k] = false;
        kept.push(k);
        for &j in &order[pos + 1..] {
            if eligible[j] && overlap(&anchors[k], &anchors[j]) > threshold {
                eligible[j] = false;
            }
        }
    }
    kept
}
