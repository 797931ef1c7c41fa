#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod driver;
pub mod image;
pub mod render;
pub mod types;

// Core algorithm modules.
pub mod anchors;
pub mod overlap;
pub mod plane;
pub mod pointfield;
pub mod scoring;
pub mod suppress;

// --- High-level re-exports -------------------------------------------------

// Main entry points: evaluator + results.
pub use crate::driver::SceneEvaluator;
pub use crate::types::{AnchorBox, FrameResult, ScoredAnchor};

// Core operations, usable without the driver.
pub use crate::overlap::overlap;
pub use crate::plane::{PlaneFitParams, PlaneFitter, RansacPlaneFitter};
pub use crate::scoring::score_patch;
pub use crate::suppress::suppress;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use plane_proposals::prelude::*;
///
/// # fn main() {
/// let config = EvalConfig::default();
/// let fitter = RansacPlaneFitter::new(config.plane_fit);
/// let evaluator = SceneEvaluator::new(&config, &fitter);
///
/// let depth = plane_proposals::image::DepthImageF32::new(640, 480);
/// let result = evaluator.evaluate_frame(&depth);
/// println!("kept={} latency_ms={:.3}", result.kept.len(), result.timing.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::anchors::{generate_pyramid_anchors, AnchorPyramidParams};
    pub use crate::config::EvalConfig;
    pub use crate::render::{NullSink, OverlaySink, RenderSink};
    pub use crate::{
        overlap, score_patch, suppress, AnchorBox, FrameResult, PlaneFitParams, PlaneFitter,
        RansacPlaneFitter, SceneEvaluator, ScoredAnchor,
    };
}
