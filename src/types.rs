use serde::{Deserialize, Serialize};

/// Axis-aligned box in image pixel coordinates, stored as `(y1, x1, y2, x2)`.
///
/// Producers guarantee `y1 <= y2` and `x1 <= x2`; the overlap and suppression
/// code relies on that ordering without re-checking it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorBox {
    pub y1: f32,
    pub x1: f32,
    pub y2: f32,
    pub x2: f32,
}

impl AnchorBox {
    pub fn new(y1: f32, x1: f32, y2: f32, x2: f32) -> Self {
        Self { y1, x1, y2, x2 }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

/// An anchor bound to its plane-consistency score and original index.
///
/// Binding the three together avoids the positional coupling of parallel
/// arrays once scoring runs on a worker pool.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAnchor {
    /// Index into the frame-invariant anchor sequence.
    pub index: usize,
    pub rect: AnchorBox,
    /// Fraction of patch points consistent with the best-fit plane, in [0, 1].
    pub score: f32,
}

/// Wall-clock timing of one frame's evaluation stages.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTiming {
    pub total_ms: f64,
    pub projection_ms: f64,
    pub scoring_ms: f64,
    pub suppression_ms: f64,
    pub render_ms: f64,
}

/// Outcome of evaluating one RGB-D frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResult {
    /// Size of the evaluated anchor set.
    pub num_anchors: usize,
    /// Surviving anchors, best score first.
    pub kept: Vec<ScoredAnchor>,
    pub timing: FrameTiming,
}

/// One evaluated frame inside a scene report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    /// Frame file stem shared by the color/depth pair.
    pub frame: String,
    pub result: FrameResult,
}

/// All frames of one scene, in sorted frame order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneReport {
    pub scene: String,
    pub frames: Vec<FrameReport>,
    /// Frames dropped because their color or depth file was unreadable.
    pub skipped_frames: usize,
}
