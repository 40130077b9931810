//! Contrast stretch of a grid's value range onto the full `[0, 255]`.
//!
//! Cells equal to the observed minimum map to exactly `0` and cells equal to
//! the maximum to exactly `255`, skipping the floating-point mapping so the
//! extremes never drift by rounding. A flat grid (`min == max`) cannot be
//! normalized and is returned as an unchanged copy; callers must tolerate
//! the no-op.
use crate::image::{GrayImage, ImageView, ImageViewMut};

/// Observed value range of a normalization pass.
#[derive(Clone, Copy, Debug)]
pub struct NormalizeInfo {
    pub min: u8,
    pub max: u8,
    /// True when `min == max` and the stretch degenerated to a copy.
    pub flat: bool,
}

/// Stretch `input` onto `[0, 255]`, returning the fresh grid and the
/// observed range.
pub fn normalize_range(input: &GrayImage) -> (GrayImage, NormalizeInfo) {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for row in input.rows() {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }

    if min == max {
        return (
            input.clone(),
            NormalizeInfo {
                min,
                max,
                flat: true,
            },
        );
    }

    let scale = 255.0 / (max - min) as f64;
    let mut out = GrayImage::new(input.w, input.h);
    for y in 0..input.h {
        let in_row = input.row(y);
        let out_row = out.row_mut(y);
        for (o, &v) in out_row.iter_mut().zip(in_row) {
            *o = if v == min {
                0
            } else if v == max {
                255
            } else {
                (scale * (v - min) as f64).round() as u8
            };
        }
    }
    (
        out,
        NormalizeInfo {
            min,
            max,
            flat: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_exactly() {
        let grid = GrayImage::from_raw(4, 1, vec![10, 20, 100, 200]);
        let (out, info) = normalize_range(&grid);
        assert!(!info.flat);
        assert_eq!((info.min, info.max), (10, 200));
        assert_eq!(out.get(0, 0), 0);
        assert_eq!(out.get(3, 0), 255);
        // 255/190 * 10 = 13.42 -> 13, 255/190 * 90 = 120.79 -> 121
        assert_eq!(out.get(1, 0), 13);
        assert_eq!(out.get(2, 0), 121);
    }

    #[test]
    fn flat_grid_is_returned_unchanged() {
        let grid = GrayImage::from_raw(3, 2, vec![7; 6]);
        let (out, info) = normalize_range(&grid);
        assert!(info.flat);
        assert_eq!(out.data, grid.data);
    }

    #[test]
    fn second_application_is_a_no_op() {
        let grid = GrayImage::from_raw(5, 1, vec![3, 50, 90, 130, 250]);
        let (once, _) = normalize_range(&grid);
        let (twice, _) = normalize_range(&once);
        assert_eq!(once.data, twice.data);
    }

    #[test]
    fn input_is_left_untouched() {
        let grid = GrayImage::from_raw(3, 1, vec![0, 128, 200]);
        let before = grid.data.clone();
        let _ = normalize_range(&grid);
        assert_eq!(grid.data, before);
    }
}
