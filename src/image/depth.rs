//! Owned single-channel f32 depth map in row-major layout, metres.
#[derive(Clone, Debug)]
pub struct DepthImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl DepthImageF32 {
    /// Construct a zero-initialized (all depth missing) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_raw(w: usize, h: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), w * h);
        Self { w, h, data }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Depth in metres at (x, y); `0.0` means missing.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the depth value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y`.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_all_missing() {
        let d = DepthImageF32::new(4, 3);
        assert_eq!(d.data.len(), 12);
        assert!(d.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut d = DepthImageF32::new(4, 3);
        d.set(2, 1, 1.5);
        assert_eq!(d.get(2, 1), 1.5);
        assert_eq!(d.row(1)[2], 1.5);
    }
}
