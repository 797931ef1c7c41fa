//! Render sinks for kept-anchor overlays.
use crate::image::save_rgb_image;
use crate::types::{AnchorBox, ScoredAnchor};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Destination for the surviving anchors of one frame.
///
/// Implementations may write files, feed a UI, or discard frames entirely;
/// the driver guarantees only that `kept` arrives in descending score order.
pub trait RenderSink {
    fn present(
        &mut self,
        scene: &str,
        frame: &str,
        image: &RgbImage,
        kept: &[ScoredAnchor],
    ) -> Result<(), String>;
}

/// Sink that discards every frame; used by batch runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(
        &mut self,
        _scene: &str,
        _frame: &str,
        _image: &RgbImage,
        _kept: &[ScoredAnchor],
    ) -> Result<(), String> {
        Ok(())
    }
}

/// Sink that rasterizes kept anchors onto the color frame and writes one PNG
/// per frame under `out_dir/<scene>/<frame>.png`.
#[derive(Clone, Debug)]
pub struct OverlaySink {
    out_dir: PathBuf,
    color: Rgb<u8>,
    thickness: u32,
}

impl OverlaySink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            color: Rgb([255, 0, 0]),
            thickness: 2,
        }
    }
}

impl RenderSink for OverlaySink {
    fn present(
        &mut self,
        scene: &str,
        frame: &str,
        image: &RgbImage,
        kept: &[ScoredAnchor],
    ) -> Result<(), String> {
        let mut overlay = image.clone();
        for anchor in kept {
            draw_rect(&mut overlay, &anchor.rect, self.color, self.thickness);
        }
        let path = self.out_dir.join(scene).join(format!("{frame}.png"));
        save_rgb_image(&path, &overlay)
    }
}

/// Draw a rectangle outline, silently clipping at the image border.
pub fn draw_rect(image: &mut RgbImage, rect: &AnchorBox, color: Rgb<u8>, thickness: u32) {
    let y1 = rect.y1.round() as i64;
    let x1 = rect.x1.round() as i64;
    let y2 = rect.y2.round() as i64;
    let x2 = rect.x2.round() as i64;

    for t in 0..thickness as i64 {
        for x in x1..=x2 {
            put_px(image, x, y1 + t, color);
            put_px(image, x, y2 - t, color);
        }
        for y in y1..=y2 {
            put_px(image, x1 + t, y, color);
            put_px(image, x2 - t, y, color);
        }
    }
}

#[inline]
fn put_px(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_rect_paints_the_outline() {
        let mut img = RgbImage::new(20, 20);
        let rect = AnchorBox::new(2.0, 3.0, 10.0, 12.0);
        draw_rect(&mut img, &rect, Rgb([255, 0, 0]), 1);
        assert_eq!(*img.get_pixel(3, 2), Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(12, 10), Rgb([255, 0, 0]));
        // interior untouched
        assert_eq!(*img.get_pixel(7, 6), Rgb([0, 0, 0]));
    }

    #[test]
    fn draw_rect_clips_out_of_bounds_boxes() {
        let mut img = RgbImage::new(8, 8);
        let rect = AnchorBox::new(-5.0, -5.0, 20.0, 20.0);
        draw_rect(&mut img, &rect, Rgb([0, 255, 0]), 2);
        // no panic; frame interior still black
        assert_eq!(*img.get_pixel(4, 4), Rgb([0, 0, 0]));
    }

    #[test]
    fn null_sink_always_succeeds() {
        let img = RgbImage::new(4, 4);
        assert!(NullSink.present("scene", "frame", &img, &[]).is_ok());
    }
}
