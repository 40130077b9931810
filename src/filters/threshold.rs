//! Fixed-threshold binarization.
//!
//! Cells below the cutoff become `0`, all others `255`. The cutoff defaults
//! to 150 (`PlateParams::threshold`), tuned for the normalized variability
//! response of plate-like contrast.
use crate::image::{GrayImage, ImageView, ImageViewMut};

/// Split `input` into `{0, 255}` at `threshold`.
pub fn binarize(input: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = GrayImage::new(input.w, input.h);
    for y in 0..input.h {
        let in_row = input.row(y);
        let out_row = out.row_mut(y);
        for (o, &v) in out_row.iter_mut().zip(in_row) {
            *o = if v < threshold { 0 } else { 255 };
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_strictly_binary() {
        let grid = GrayImage::from_raw(6, 1, vec![0, 149, 150, 151, 200, 255]);
        let out = binarize(&grid, 150);
        assert_eq!(out.data, vec![0, 0, 255, 255, 255, 255]);
    }

    #[test]
    fn raising_a_cell_never_clears_foreground() {
        let grid = GrayImage::from_raw(4, 1, vec![10, 150, 180, 255]);
        let base = binarize(&grid, 150);
        for i in 0..grid.data.len() {
            let mut brighter = grid.clone();
            brighter.data[i] = brighter.data[i].saturating_add(40);
            let out = binarize(&brighter, 150);
            for (b, o) in base.data.iter().zip(&out.data) {
                assert!(!(*b == 255 && *o == 0));
            }
        }
    }
}
