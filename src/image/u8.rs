use super::ImageView;
use crate::geometry::FrameSize;
use std::ops::Range;

/// Borrowed 8-bit image; used for the binary edge map (non-zero = edge).
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Counts edge pixels inside the half-open window, clipped to the image.
    pub fn count_edges(&self, xs: Range<i32>, ys: Range<i32>) -> usize {
        let x0 = xs.start.max(0) as usize;
        let x1 = xs.end.clamp(0, self.w as i32) as usize;
        let y0 = ys.start.max(0) as usize;
        let y1 = ys.end.clamp(0, self.h as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return 0;
        }
        (y0..y1)
            .map(|y| self.row(y)[x0..x1].iter().filter(|&&px| px != 0).count())
            .sum()
    }

    pub fn frame_size(&self) -> FrameSize {
        FrameSize::new(self.w, self.h)
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
