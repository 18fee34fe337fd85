use super::PixelPoint;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a camera frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: usize,
    pub height: usize,
}

impl FrameSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Largest valid column index.
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.width as i32 - 1
    }

    /// Largest valid row index.
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Geometric center `(w/2, h/2)` in image coordinates.
    #[inline]
    pub fn center(&self) -> [f32; 2] {
        [self.width as f32 * 0.5, self.height as f32 * 0.5]
    }

    /// Distance from the center to a corner; the largest offset a line can
    /// have from the center while still crossing the frame.
    #[inline]
    pub fn half_diagonal(&self) -> f32 {
        let [cx, cy] = self.center();
        (cx * cx + cy * cy).sqrt()
    }

    #[inline]
    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= 0 && p.y >= 0 && p.x <= self.max_x() && p.y <= self.max_y()
    }
}
