//! Per-pixel filtering stages of the pipeline.
//!
//! Each filter is a pure function from one grid (plus dimensions) to a fresh
//! output grid of identical shape; inputs are never mutated.

pub mod grayscale;
pub mod normalize;
pub mod threshold;
pub mod variability;

pub use grayscale::{grayscale_luminance, grayscale_uniform};
pub use normalize::{normalize_range, NormalizeInfo};
pub use threshold::binarize;
pub use variability::variability_response;
