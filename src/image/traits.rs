/// Read-only, row-addressable view over a 2D pixel buffer.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    /// Pixels of row `y`, without the stride padding.
    fn row(&self, y: usize) -> &[Self::Pixel];
}
