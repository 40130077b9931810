#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage-level modules – public for tools and tests, considered internals.
pub mod config;
pub mod filters;
pub mod morphology;
pub mod regions;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{GrayscalePolicy, PlateDetector, PlateParams};
pub use crate::error::DetectError;
pub use crate::types::{BoundingBox, Channels, PlateResult};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use plate_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let buf = vec![0u8; w * h];
/// let view = ImageU8 { w, h, stride: w, data: &buf };
/// let channels = Channels {
///     red: view.clone(),
///     green: view.clone(),
///     blue: view,
/// };
///
/// let detector = PlateDetector::new(PlateParams::default());
/// match detector.process(&channels) {
///     Ok(res) => println!("box={:?} latency_ms={:.3}", res.bbox, res.latency_ms),
///     Err(err) => eprintln!("{err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImage, ImageU8, LabelImage};
    pub use crate::{BoundingBox, Channels, DetectError, PlateDetector, PlateParams, PlateResult};
}
