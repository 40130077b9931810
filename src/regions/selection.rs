//! Plate-shape region selection over the labeled components.
//!
//! Repeatedly takes the most populous remaining label, computes its bounding
//! box by a full-grid scan, and gates it on the bounding-box aspect ratio
//! (width span over height span). A rejected label has its count zeroed and
//! the search repeats; the loop terminates deterministically once no
//! candidate remains. Ties in the max-count search resolve to the smallest
//! label id, a fixed contract so repeated runs agree.
use crate::error::DetectError;
use crate::image::ImageView;
use crate::regions::labeling::Labeling;
use crate::types::BoundingBox;
use serde::Serialize;

/// A candidate that failed the shape test, kept for diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct RejectedRegion {
    pub label: u32,
    pub pixel_count: u32,
    /// `None` when the region was one pixel tall and the ratio undefined.
    pub aspect_ratio: Option<f32>,
}

/// Accepted region with the rejection trail that led to it.
#[derive(Clone, Debug)]
pub struct Selection {
    pub bbox: BoundingBox,
    pub label: u32,
    pub pixel_count: u32,
    pub rejected: Vec<RejectedRegion>,
}

/// Pick the best plate-like component of `labeling`.
///
/// Accepts the first candidate whose aspect ratio lies in
/// `min_aspect..=max_aspect`; fails with [`DetectError::NoPlateRegion`] when
/// every component has been tried and rejected.
pub fn select_plate_region(
    labeling: &Labeling,
    min_aspect: f32,
    max_aspect: f32,
) -> Result<Selection, DetectError> {
    let mut remaining = labeling.counts.clone();
    let mut rejected: Vec<RejectedRegion> = Vec::new();

    loop {
        let Some((idx, &count)) = pick_max(&remaining) else {
            return Err(DetectError::NoPlateRegion {
                considered: rejected.len(),
            });
        };
        let label = idx as u32 + 1;
        let bbox = bounding_box_of(labeling, label);
        let ratio = bbox.aspect_ratio();

        // A one-pixel-tall region has an undefined ratio and is rejected
        // outright rather than dividing by zero.
        if let Some(r) = ratio {
            if r >= min_aspect && r <= max_aspect {
                return Ok(Selection {
                    bbox,
                    label,
                    pixel_count: count,
                    rejected,
                });
            }
        }
        rejected.push(RejectedRegion {
            label,
            pixel_count: count,
            aspect_ratio: ratio,
        });
        remaining[idx] = 0;
    }
}

/// Index and value of the largest strictly positive count; first index wins
/// ties.
fn pick_max(counts: &[u32]) -> Option<(usize, &u32)> {
    let mut best: Option<(usize, &u32)> = None;
    for (idx, count) in counts.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        match best {
            Some((_, &b)) if b >= *count => {}
            _ => best = Some((idx, count)),
        }
    }
    best
}

/// Tightest box around all cells carrying `label`, by full-grid scan.
fn bounding_box_of(labeling: &Labeling, label: u32) -> BoundingBox {
    let grid = &labeling.labels;
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0usize;
    let mut max_y = 0usize;
    for (y, row) in grid.rows().enumerate() {
        for (x, &id) in row.iter().enumerate() {
            if id != label {
                continue;
            }
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    BoundingBox {
        max_x,
        min_x,
        max_y,
        min_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImage;
    use crate::regions::labeling::label_components;

    fn labeled(w: usize, h: usize, fill: impl Fn(usize, usize) -> bool) -> Labeling {
        let mut binary = GrayImage::new(w, h);
        for y in 0..h {
            for x in 0..w {
                if fill(x, y) {
                    binary.set(x, y, 1);
                }
            }
        }
        label_components(&binary, None).unwrap()
    }

    #[test]
    fn rejects_the_bigger_square_for_the_plate_shaped_rectangle() {
        // 10x10 square (ratio 1.0, 100 cells) vs 3-row x 10-col rectangle
        // (ratio 4.5, 30 cells). The square wins the count race but fails
        // the shape test; the rectangle must be returned.
        let labeling = labeled(30, 20, |x, y| {
            let square = (2..12).contains(&x) && (2..12).contains(&y);
            let rect = (15..25).contains(&x) && (15..18).contains(&y);
            square || rect
        });
        let sel = select_plate_region(&labeling, 1.5, 5.0).unwrap();
        assert_eq!(
            sel.bbox,
            BoundingBox {
                max_x: 24,
                min_x: 15,
                max_y: 17,
                min_y: 15,
            }
        );
        assert_eq!(sel.pixel_count, 30);
        assert_eq!(sel.rejected.len(), 1);
        assert_eq!(sel.rejected[0].aspect_ratio, Some(1.0));
    }

    #[test]
    fn one_pixel_tall_region_is_rejected_not_divided() {
        // A lone horizontal line and a proper plate-shaped block; the line
        // has more cells but an undefined ratio.
        let labeling = labeled(40, 20, |x, y| {
            let line = y == 2 && (0..35).contains(&x);
            let block = (5..13).contains(&x) && (10..14).contains(&y);
            line || block
        });
        let sel = select_plate_region(&labeling, 1.5, 5.0).unwrap();
        assert_eq!(sel.bbox.min_y, 10);
        assert_eq!(sel.rejected.len(), 1);
        assert_eq!(sel.rejected[0].aspect_ratio, None);
    }

    #[test]
    fn exhausting_all_candidates_fails_typed() {
        // Only a square: every candidate fails, the loop must terminate.
        let labeling = labeled(12, 12, |x, y| (2..8).contains(&x) && (2..8).contains(&y));
        let err = select_plate_region(&labeling, 1.5, 5.0).unwrap_err();
        assert_eq!(err, DetectError::NoPlateRegion { considered: 1 });
    }

    #[test]
    fn empty_labeling_fails_typed() {
        let labeling = labeled(8, 8, |_, _| false);
        let err = select_plate_region(&labeling, 1.5, 5.0).unwrap_err();
        assert_eq!(err, DetectError::NoPlateRegion { considered: 0 });
    }

    #[test]
    fn count_ties_resolve_to_the_smaller_label() {
        // Two identical plate-shaped blocks; label 1 is discovered first in
        // scan order and must win the tie.
        let labeling = labeled(30, 12, |x, y| {
            let top = (1..11).contains(&x) && (1..4).contains(&y);
            let bottom = (15..25).contains(&x) && (6..9).contains(&y);
            top || bottom
        });
        assert_eq!(labeling.counts, vec![30, 30]);
        let sel = select_plate_region(&labeling, 1.5, 5.0).unwrap();
        assert_eq!(sel.label, 1);
        assert_eq!(sel.bbox.min_y, 1);
    }
}
