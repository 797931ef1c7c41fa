//! I/O helpers for frame files and JSON reports.
//!
//! - `load_color_image`: read a JPEG/PNG color frame into an owned RGB buffer.
//! - `load_depth_image`: read a 16-bit grayscale depth frame, rescaling the
//!   stored integer units (millimetres in the reference layout) into metres.
//! - `save_rgb_image`: write an RGB overlay to disk, creating parent dirs.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::DepthImageF32;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a color frame from disk as 8-bit RGB.
pub fn load_color_image(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    Ok(img)
}

/// Load a depth frame from disk, scaling stored units by `depth_scale`.
///
/// Depth files are single-channel PNGs with unsigned integer values; a pixel
/// value of zero stays zero and marks missing depth.
pub fn load_depth_image(path: &Path, depth_scale: f32) -> Result<DepthImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma16();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| v as f32 * depth_scale)
        .collect();
    Ok(DepthImageF32::from_raw(w, h, data))
}

/// Save an RGB buffer to `path`, creating parent directories.
pub fn save_rgb_image(path: &Path, image: &RgbImage) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
