mod common;

use common::synthetic_frame::small_frame_config;
use image::{ImageBuffer, Luma, Rgb, RgbImage};
use plane_proposals::render::{NullSink, OverlaySink};
use plane_proposals::{RansacPlaneFitter, SceneEvaluator};
use std::fs;
use std::path::Path;

fn write_color(path: &Path, w: u32, h: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbImage::from_pixel(w, h, Rgb([90, 90, 90]))
        .save(path)
        .unwrap();
}

fn write_depth(path: &Path, w: u32, h: u32, millimetres: u16) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    ImageBuffer::<Luma<u16>, Vec<u16>>::from_pixel(w, h, Luma([millimetres]))
        .save(path)
        .unwrap();
}

#[test]
fn walks_scenes_and_skips_frames_without_depth() {
    let root = tempfile::tempdir().unwrap();
    let scene = root.path().join("scene_0000");
    write_color(&scene.join("frames/color_left/0000.jpg"), 64, 48);
    write_depth(&scene.join("frames/depth_left/0000.png"), 64, 48, 2000);
    // second frame has a color image but no matching depth file
    write_color(&scene.join("frames/color_left/0001.jpg"), 64, 48);

    let mut config = small_frame_config();
    config.scenes_root = root.path().to_path_buf();

    let fitter = RansacPlaneFitter::new(config.plane_fit);
    let evaluator = SceneEvaluator::new(&config, &fitter);
    let reports = evaluator.run(&mut NullSink).unwrap();

    assert_eq!(reports.len(), 1);
    let scene_report = &reports[0];
    assert_eq!(scene_report.scene, "scene_0000");
    assert_eq!(scene_report.frames.len(), 1);
    assert_eq!(scene_report.skipped_frames, 1);

    let frame = &scene_report.frames[0];
    assert_eq!(frame.frame, "0000");
    assert!(!frame.result.kept.is_empty());
    assert!(frame.result.kept[0].score > 0.9, "2m wall should fit a plane");
}

#[test]
fn overlay_sink_writes_one_png_per_frame() {
    let root = tempfile::tempdir().unwrap();
    let scene = root.path().join("scene_0000");
    write_color(&scene.join("frames/color_left/0000.jpg"), 64, 48);
    write_depth(&scene.join("frames/depth_left/0000.png"), 64, 48, 1500);

    let overlays = tempfile::tempdir().unwrap();
    let mut config = small_frame_config();
    config.scenes_root = root.path().to_path_buf();

    let fitter = RansacPlaneFitter::new(config.plane_fit);
    let evaluator = SceneEvaluator::new(&config, &fitter);
    let mut sink = OverlaySink::new(overlays.path());
    evaluator.run(&mut sink).unwrap();

    let overlay = overlays.path().join("scene_0000/0000.png");
    assert!(overlay.is_file(), "missing overlay {}", overlay.display());
    let written = image::open(&overlay).unwrap().into_rgb8();
    assert_eq!((written.width(), written.height()), (64, 48));
}

#[test]
fn missing_scenes_root_is_a_run_error() {
    let mut config = small_frame_config();
    config.scenes_root = Path::new("/nonexistent/scenes_root").to_path_buf();

    let fitter = RansacPlaneFitter::new(config.plane_fit);
    let evaluator = SceneEvaluator::new(&config, &fitter);
    let err = evaluator.run(&mut NullSink).unwrap_err();
    assert!(err.contains("Failed to read"), "unexpected error: {err}");
}
