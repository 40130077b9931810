//! Owned u32 label grid produced by connected-component labeling.
//!
//! `0` marks background/unlabeled; `k ≥ 1` identifies the k-th discovered
//! component. A cell's label, once set non-zero, never changes. Label ids
//! grow without a fixed cap, so `u32` rather than `u8`.
#[derive(Clone, Debug)]
pub struct LabelImage {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Number of u32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u32>,
}

impl LabelImage {
    /// Construct an all-background grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0u32; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the label at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the label at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: u32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for LabelImage {
    type Pixel = u32;

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
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for LabelImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
