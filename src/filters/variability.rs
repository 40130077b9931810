//! Local-variability (texture) response: per-pixel population standard
//! deviation of a fixed 5×5 neighborhood.
//!
//! Every cell gathers the 25 samples at relative offsets
//! `{-2,-1,0,1,2} × {-2,-1,0,1,2}`; offsets landing outside the grid
//! contribute the value `0` (zero-padding, not clamping), so the sample set
//! is always 25 strong. Output cell = `round(pstdev(samples))`. The filter
//! responds strongly to the repetitive stroke pattern of printed characters
//! and stays near zero over smooth regions.
//!
//! Rows are independent; with the `parallel` feature the row loop runs on
//! the rayon pool.
use crate::image::{GrayImage, ImageView};

const WINDOW_RADIUS: isize = 2;
const WINDOW_SAMPLES: f64 = 25.0;

/// Compute the 5×5 population standard deviation response of `input`.
pub fn variability_response(input: &GrayImage) -> GrayImage {
    let mut out = GrayImage::new(input.w, input.h);
    fill_rows(input, &mut out.data);
    out
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(input: &GrayImage, out: &mut [u8]) {
    let w = input.w;
    for (y, out_row) in out.chunks_mut(w).enumerate() {
        fill_row(input, y, out_row);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(input: &GrayImage, out: &mut [u8]) {
    use rayon::prelude::*;

    let w = input.w;
    out.par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| fill_row(input, y, out_row));
}

fn fill_row(input: &GrayImage, y: usize, out_row: &mut [u8]) {
    let w = input.w as isize;
    let h = input.h as isize;
    let yy = y as isize;
    for (x, out_px) in out_row.iter_mut().enumerate() {
        let xx = x as isize;
        // Out-of-range samples stay 0, so only in-range cells contribute
        // to the sums while the sample count remains 25.
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for dy in -WINDOW_RADIUS..=WINDOW_RADIUS {
            let sy = yy + dy;
            if sy < 0 || sy >= h {
                continue;
            }
            let row = input.row(sy as usize);
            for dx in -WINDOW_RADIUS..=WINDOW_RADIUS {
                let sx = xx + dx;
                if sx < 0 || sx >= w {
                    continue;
                }
                let v = row[sx as usize] as f64;
                sum += v;
                sum_sq += v * v;
            }
        }
        let mean = sum / WINDOW_SAMPLES;
        let variance = (sum_sq / WINDOW_SAMPLES - mean * mean).max(0.0);
        *out_px = variance.sqrt().round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_grid_has_zero_response_everywhere() {
        // Identical samples everywhere, padded cells included.
        let grid = GrayImage::new(9, 7);
        let out = variability_response(&grid);
        assert!(out.data.iter().all(|&v| v == 0), "{:?}", out.data);
    }

    #[test]
    fn uniform_grid_has_zero_response_in_the_interior() {
        // Interior windows see 25 identical samples; border windows mix in
        // padded zeros and are covered by the test below.
        let grid = GrayImage::from_raw(9, 7, vec![123; 63]);
        let out = variability_response(&grid);
        for y in 2..5 {
            for x in 2..7 {
                assert_eq!(out.get(x, y), 0, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn zero_padding_applies_at_borders() {
        // All-255 grid: interior windows are uniform (response 0), but border
        // windows mix in padded zeros and respond.
        let grid = GrayImage::from_raw(9, 9, vec![255; 81]);
        let out = variability_response(&grid);
        assert_eq!(out.get(4, 4), 0);
        // Corner window holds 9 in-range samples of 255 and 16 padded zeros:
        // mean = 91.8, pstdev = sqrt(255^2*9/25 - 91.8^2) = 122.4 -> 122.
        assert_eq!(out.get(0, 0), 122);
        assert!(out.get(4, 0) > 0);
    }

    #[test]
    fn isolated_bright_pixel_responds() {
        // 25 samples, one of them 255: mean 10.2, pstdev ~49.97 -> 50.
        let mut grid = GrayImage::new(7, 7);
        grid.set(3, 3, 255);
        let out = variability_response(&grid);
        assert_eq!(out.get(3, 3), 50);
        assert_eq!(out.get(1, 1), 50);
        // Window centered 3 away no longer sees the pixel.
        assert_eq!(out.get(0, 6), 0);
    }
}
