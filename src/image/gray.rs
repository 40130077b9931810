//! Owned single-channel u8 grid in row-major layout (stride == width).
//!
//! The working buffer of every pipeline stage: intensity grids hold values
//! in `[0, 255]`, binary grids hold `{0, 1}` or `{0, 255}` with foreground
//! defined as any strictly positive value. Each stage allocates a fresh
//! `GrayImage` for its output and never mutates its input.
#[derive(Clone, Debug)]
pub struct GrayImage {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Number of u8 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Construct a zero-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0u8; w * h],
        }
    }

    /// Take ownership of raw row-major bytes.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), w * h);
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Borrow as a read-only [`ImageU8`](crate::image::ImageU8) view.
    pub fn as_view(&self) -> crate::image::ImageU8<'_> {
        crate::image::ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Number of strictly positive cells (binary-grid foreground size).
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0).count()
    }
}

impl crate::image::traits::ImageView for GrayImage {
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

impl crate::image::traits::ImageViewMut for GrayImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
