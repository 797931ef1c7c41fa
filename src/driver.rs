//! Scene/frame evaluation driver.
//!
//! Orchestration only: for every frame the driver back-projects the depth
//! map, pools one point patch per anchor, scores the patches, suppresses
//! overlapping anchors and hands the survivors to the render sink. The
//! anchor set is generated once and shared by every frame; nothing else
//! crosses frame boundaries.
use crate::anchors::generate_pyramid_anchors;
use crate::config::EvalConfig;
use crate::image::{load_color_image, load_depth_image, DepthImageF32};
use crate::plane::PlaneFitter;
use crate::pointfield::PointField;
use crate::render::RenderSink;
use crate::scoring::score_patch;
use crate::suppress::suppress;
use crate::types::{AnchorBox, FrameReport, FrameResult, FrameTiming, SceneReport, ScoredAnchor};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Evaluates every frame of every scene under the configured root.
pub struct SceneEvaluator<'a, F: PlaneFitter> {
    config: &'a EvalConfig,
    fitter: &'a F,
    anchors: Vec<AnchorBox>,
}

impl<'a, F: PlaneFitter> SceneEvaluator<'a, F> {
    /// Create an evaluator, generating the frame-invariant anchor set.
    pub fn new(config: &'a EvalConfig, fitter: &'a F) -> Self {
        let anchors = generate_pyramid_anchors(&config.anchors);
        debug!("SceneEvaluator::new anchors={}", anchors.len());
        Self {
            config,
            fitter,
            anchors,
        }
    }

    /// The anchor sequence shared by every frame, in index order.
    pub fn anchors(&self) -> &[AnchorBox] {
        &self.anchors
    }

    /// Evaluate one frame given its depth map.
    ///
    /// Deterministic for a fixed configuration; each score lands in the slot
    /// of its anchor regardless of worker scheduling.
    pub fn evaluate_frame(&self, depth: &DepthImageF32) -> FrameResult {
        let total_start = Instant::now();

        let projection_start = Instant::now();
        let field = PointField::from_depth(depth, &self.config.kmtx);
        let projection_ms = projection_start.elapsed().as_secs_f64() * 1000.0;

        let scoring_start = Instant::now();
        let scores = self.score_anchors(&field);
        let scoring_ms = scoring_start.elapsed().as_secs_f64() * 1000.0;

        let suppression_start = Instant::now();
        let keep = suppress(&self.anchors, &scores, self.config.eval.nms_threshold);
        let suppression_ms = suppression_start.elapsed().as_secs_f64() * 1000.0;

        let kept: Vec<ScoredAnchor> = keep
            .iter()
            .map(|&i| ScoredAnchor {
                index: i,
                rect: self.anchors[i],
                score: scores[i],
            })
            .collect();

        debug!(
            "evaluate_frame anchors={} kept={} projection_ms={:.3} scoring_ms={:.3} suppression_ms={:.3}",
            self.anchors.len(),
            kept.len(),
            projection_ms,
            scoring_ms,
            suppression_ms
        );

        FrameResult {
            num_anchors: self.anchors.len(),
            kept,
            timing: FrameTiming {
                total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
                projection_ms,
                scoring_ms,
                suppression_ms,
                render_ms: 0.0,
            },
        }
    }

    #[cfg(feature = "parallel")]
    fn score_anchors(&self, field: &PointField) -> Vec<f32> {
        use rayon::prelude::*;

        let [pool_h, pool_w] = self.config.eval.pool_shape;
        self.anchors
            .par_iter()
            .map(|rect| score_patch(self.fitter, &field.pool_patch(rect, pool_h, pool_w)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_anchors(&self, field: &PointField) -> Vec<f32> {
        let [pool_h, pool_w] = self.config.eval.pool_shape;
        self.anchors
            .iter()
            .map(|rect| score_patch(self.fitter, &field.pool_patch(rect, pool_h, pool_w)))
            .collect()
    }

    /// Walk `scenes_root` in sorted order and evaluate every frame pair.
    pub fn run(&self, sink: &mut dyn RenderSink) -> Result<Vec<SceneReport>, String> {
        let scene_ids = sorted_dir_names(&self.config.scenes_root, |entry| entry.is_dir())?;
        let mut reports = Vec::with_capacity(scene_ids.len());
        for scene_id in &scene_ids {
            reports.push(self.run_scene(scene_id, sink)?);
        }
        Ok(reports)
    }

    /// Evaluate every color/depth pair of one scene.
    ///
    /// Frames with an unreadable color or depth file are logged and skipped;
    /// the scene continues.
    pub fn run_scene(&self, scene_id: &str, sink: &mut dyn RenderSink) -> Result<SceneReport, String> {
        let frames_dir = self.config.scenes_root.join(scene_id).join("frames");
        let color_dir = frames_dir.join("color_left");
        let depth_dir = frames_dir.join("depth_left");
        let frame_stems = sorted_dir_names(&color_dir, |entry| entry.is_file())?;

        let mut frames = Vec::with_capacity(frame_stems.len());
        let mut skipped_frames = 0usize;
        for stem_ext in &frame_stems {
            let stem = match Path::new(stem_ext).file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => {
                    warn!("scene {scene_id}: ignoring unnamed entry {stem_ext}");
                    continue;
                }
            };
            let color_path = color_dir.join(stem_ext);
            let depth_path = depth_dir.join(format!("{stem}.png"));
            match self.process_frame(scene_id, &stem, &color_path, &depth_path, sink) {
                Ok(report) => frames.push(report),
                Err(err) => {
                    warn!("scene {scene_id}: skipping frame {stem}: {err}");
                    skipped_frames += 1;
                }
            }
        }

        Ok(SceneReport {
            scene: scene_id.to_string(),
            frames,
            skipped_frames,
        })
    }

    fn process_frame(
        &self,
        scene_id: &str,
        stem: &str,
        color_path: &Path,
        depth_path: &Path,
        sink: &mut dyn RenderSink,
    ) -> Result<FrameReport, String> {
        let color = load_color_image(color_path)?;
        let depth = load_depth_image(depth_path, self.config.eval.depth_scale)?;
        if depth.w != color.width() as usize || depth.h != color.height() as usize {
            return Err(format!(
                "depth size {}x{} does not match color size {}x{}",
                depth.w,
                depth.h,
                color.width(),
                color.height()
            ));
        }

        let mut result = self.evaluate_frame(&depth);

        let render_start = Instant::now();
        sink.present(scene_id, stem, &color, &result.kept)?;
        let render_ms = render_start.elapsed().as_secs_f64() * 1000.0;
        result.timing.render_ms = render_ms;
        result.timing.total_ms += render_ms;

        Ok(FrameReport {
            frame: stem.to_string(),
            result,
        })
    }
}

/// Sorted names of the entries of `dir` matching `filter`.
fn sorted_dir_names(dir: &Path, filter: impl Fn(&Path) -> bool) -> Result<Vec<String>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read {}: {e}", dir.display()))?;
        if !filter(&entry.path()) {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
