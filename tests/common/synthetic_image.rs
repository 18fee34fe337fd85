use std::ops::Range;
use tape_navigator::geometry::Line;
use tape_navigator::image::ImageU8;
use std::f32::consts::FRAC_PI_2;

/// Binary edge map with tape edges painted as 2-px wide strokes, plus the
/// Hough lines a detector would report for them.
pub struct TapeScene {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
    pub lines: Vec<Line>,
}

impl TapeScene {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            data: vec![0u8; width * height],
            lines: Vec::new(),
        }
    }

    /// Vertical edge at column `x` covering `rows`.
    pub fn vertical_edge(&mut self, x: usize, rows: Range<usize>) -> &mut Self {
        for y in rows {
            self.data[y * self.width + x] = 255;
            self.data[y * self.width + x + 1] = 255;
        }
        self.lines.push(Line::new(x as f32, 0.0));
        self
    }

    /// Horizontal edge at row `y` covering `cols`.
    pub fn horizontal_edge(&mut self, y: usize, cols: Range<usize>) -> &mut Self {
        for x in cols {
            self.data[y * self.width + x] = 255;
            self.data[(y + 1) * self.width + x] = 255;
        }
        self.lines.push(Line::new(y as f32, FRAC_PI_2));
        self
    }

    /// Adds a duplicate detection of the last edge, offset by `drho` pixels.
    pub fn duplicate_last(&mut self, drho: f32) -> &mut Self {
        if let Some(&last) = self.lines.last() {
            self.lines.push(Line::new(last.rho + drho, last.theta));
        }
        self
    }

    pub fn view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Frame size used by the scenes below.
pub const W: usize = 640;
pub const H: usize = 480;

/// One vertical strip of tape, 120 px wide, centred on column `center`.
pub fn corridor(center: usize) -> TapeScene {
    let mut scene = TapeScene::new(W, H);
    scene
        .vertical_edge(center - 60, 0..H)
        .duplicate_last(1.0)
        .vertical_edge(center + 60, 0..H)
        .duplicate_last(-1.0);
    scene
}

/// Four-way crossing of two 120 px strips centred on `(320, row)`; edges
/// are interrupted where the strips overlap.
pub fn crossing(row: usize) -> TapeScene {
    let (left, right) = (260, 380);
    let (top, bottom) = (row - 60, row + 60);
    let mut scene = TapeScene::new(W, H);
    scene
        .vertical_edge(left, 0..top + 2)
        .vertical_edge(left, bottom..H)
        .vertical_edge(right, 0..top + 2)
        .vertical_edge(right, bottom..H)
        .horizontal_edge(top, 0..left + 2)
        .horizontal_edge(top, right..W)
        .horizontal_edge(bottom, 0..left + 2)
        .horizontal_edge(bottom, right..W);
    scene
}

/// T-junction: the vertical strip arrives from the bottom and ends at the
/// horizontal strip centred on `row`.
pub fn t_junction(row: usize) -> TapeScene {
    let (left, right) = (260, 380);
    let (top, bottom) = (row - 60, row + 60);
    let mut scene = TapeScene::new(W, H);
    scene
        .vertical_edge(left, bottom..H)
        .vertical_edge(right, bottom..H)
        .horizontal_edge(top, 0..W)
        .horizontal_edge(bottom, 0..left + 2)
        .horizontal_edge(bottom, right..W);
    scene
}
