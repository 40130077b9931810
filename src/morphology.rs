//! Morphological smoothing of the binary grid: iterative dilation to merge
//! fragmented foreground into solid blobs, then iterative erosion to shave
//! the growth and the noise back off.
//!
//! Foreground is any strictly positive value; outputs are `{0, 1}` grids.
//!
//! Border handling is asymmetric, and the asymmetry is contractual: it
//! decides how close to the image border a plate can sit before detection
//! fails.
//! - **dilation** excludes out-of-range neighbors from consideration, so a
//!   border cell sees a smaller window rather than padded zeros;
//! - **erosion** never visits border cells at all; the outer one-pixel frame
//!   of its output is always `0` regardless of input.
use crate::image::{GrayImage, ImageViewMut};

const NEIGH_OFFSETS: [(isize, isize); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One dilation pass: a cell becomes foreground if any in-range cell of its
/// 3×3 neighborhood (self included) is foreground.
pub fn dilate(input: &GrayImage) -> GrayImage {
    let w = input.w as isize;
    let h = input.h as isize;
    let mut out = GrayImage::new(input.w, input.h);
    for y in 0..input.h {
        let out_row = out.row_mut(y);
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let mut any_fg = false;
            for (dx, dy) in NEIGH_OFFSETS {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                if input.get(nx as usize, ny as usize) > 0 {
                    any_fg = true;
                    break;
                }
            }
            *out_px = any_fg as u8;
        }
    }
    out
}

/// One erosion pass over interior cells only: a cell stays foreground iff
/// all 9 cells of its 3×3 neighborhood are foreground. Border cells are
/// never visited and come out `0`.
pub fn erode(input: &GrayImage) -> GrayImage {
    let mut out = GrayImage::new(input.w, input.h);
    if input.w < 3 || input.h < 3 {
        return out;
    }
    for y in 1..input.h - 1 {
        for x in 1..input.w - 1 {
            let all_fg = NEIGH_OFFSETS.iter().all(|&(dx, dy)| {
                input.get((x as isize + dx) as usize, (y as isize + dy) as usize) > 0
            });
            out.set(x, y, all_fg as u8);
        }
    }
    out
}

/// Apply `dilate_passes` dilations followed by `erode_passes` erosions, each
/// pass consuming the previous output.
pub fn smooth(input: &GrayImage, dilate_passes: usize, erode_passes: usize) -> GrayImage {
    let mut grid = input.clone();
    for _ in 0..dilate_passes {
        grid = dilate(&grid);
    }
    for _ in 0..erode_passes {
        grid = erode(&grid);
    }
    grid
}
