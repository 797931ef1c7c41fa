//! Owned image buffers and file I/O for color/depth frame pairs.
pub mod depth;
pub mod io;

pub use depth::DepthImageF32;
pub use io::{load_color_image, load_depth_image, save_rgb_image, write_json_file};
