//! Public input/output types of the detector.
use crate::error::DetectError;
use crate::image::ImageU8;
use serde::Serialize;

/// Three same-shaped 8-bit channel views over caller-owned pixel data.
#[derive(Clone, Debug)]
pub struct Channels<'a> {
    pub red: ImageU8<'a>,
    pub green: ImageU8<'a>,
    pub blue: ImageU8<'a>,
}

impl<'a> Channels<'a> {
    /// Validate that all three channels agree in shape and are non-empty,
    /// returning the common `(width, height)`.
    pub fn dims(&self) -> Result<(usize, usize), DetectError> {
        let (w, h) = (self.red.w, self.red.h);
        if self.green.w != w || self.green.h != h || self.blue.w != w || self.blue.h != h {
            return Err(DetectError::ChannelSizeMismatch {
                rw: self.red.w,
                rh: self.red.h,
                gw: self.green.w,
                gh: self.green.h,
                bw: self.blue.w,
                bh: self.blue.h,
            });
        }
        if w == 0 || h == 0 {
            return Err(DetectError::EmptyImage {
                width: w,
                height: h,
            });
        }
        Ok((w, h))
    }
}

/// Tightest axis-aligned rectangle containing all cells of the chosen label.
///
/// All four coordinates are inclusive pixel indices: `min_x..=max_x` columns,
/// `min_y..=max_y` rows, with `max_x >= min_x` and `max_y >= min_y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub max_x: usize,
    pub min_x: usize,
    pub max_y: usize,
    pub min_y: usize,
}

impl BoundingBox {
    /// Column span `max_x - min_x`.
    pub fn span_x(&self) -> usize {
        self.max_x - self.min_x
    }

    /// Row span `max_y - min_y`.
    pub fn span_y(&self) -> usize {
        self.max_y - self.min_y
    }

    /// Width/height ratio used by the plate-shape heuristic.
    ///
    /// `None` for regions one pixel tall, where the ratio is undefined.
    pub fn aspect_ratio(&self) -> Option<f32> {
        let dy = self.span_y();
        (dy > 0).then(|| self.span_x() as f32 / dy as f32)
    }
}

/// Final output of a successful detection.
#[derive(Clone, Debug, Serialize)]
pub struct PlateResult {
    /// Bounding box of the accepted region, in image coordinates.
    pub bbox: BoundingBox,
    /// Label id of the accepted connected component.
    pub label: u32,
    /// Number of foreground cells carrying that label.
    pub pixel_count: u32,
    /// Candidates rejected by the shape test before acceptance.
    pub regions_rejected: usize,
    /// Wall-clock time of the full pipeline run.
    pub latency_ms: f64,
}
