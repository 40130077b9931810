//! Typed errors for the detection pipeline.
//!
//! The pipeline is deterministic, so no failure here is retryable; every
//! variant propagates to the immediate caller as-is.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectError {
    #[error("Empty image: {width}x{height} (both dimensions must be positive)")]
    EmptyImage { width: usize, height: usize },

    #[error("Channel size mismatch: red {rw}x{rh}, green {gw}x{gh}, blue {bw}x{bh}")]
    ChannelSizeMismatch {
        rw: usize,
        rh: usize,
        gw: usize,
        gh: usize,
        bw: usize,
        bh: usize,
    },

    #[error("Label capacity exceeded: more than {limit} connected components")]
    LabelCapacityExceeded { limit: usize },

    #[error("No plate-like region found: all {considered} candidate regions failed the aspect-ratio test")]
    NoPlateRegion { considered: usize },
}
