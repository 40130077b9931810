//! Structured per-stage diagnostics for the detection pipeline.
//!
//! Every stage report carries the scalar statistics worth putting in a JSON
//! report plus its wall-clock share; the intermediate grids themselves ride
//! along in [`PipelineGrids`] for inspection and PNG dumps but are skipped
//! during serialization.
use crate::image::{GrayImage, LabelImage};
use crate::regions::RejectedRegion;
use crate::types::PlateResult;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct GrayscaleStage {
    pub policy: &'static str,
    pub mean_intensity: f32,
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct NormalizeStage {
    /// Smallest value observed in the grid *fed to* the stretch.
    pub input_min: u8,
    /// Largest value observed in the grid *fed to* the stretch; the output
    /// range is always `[0, 255]` unless `flat`.
    pub input_max: u8,
    /// True when the grid was flat and normalization degenerated to a copy.
    pub flat: bool,
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct VariabilityStage {
    pub peak_response: u8,
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BinarizeStage {
    pub threshold: u8,
    pub foreground: usize,
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MorphologyStage {
    pub dilate_passes: usize,
    pub erode_passes: usize,
    pub foreground_in: usize,
    pub foreground_out: usize,
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct LabelingStage {
    pub components: usize,
    pub foreground: u64,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SelectionStage {
    pub accepted_label: u32,
    pub rejected: Vec<RejectedRegion>,
    pub elapsed_ms: f64,
}

/// Coarse wall-clock split of a pipeline run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub filtering_ms: f64,
    pub morphology_ms: f64,
    pub labeling_ms: f64,
    pub selection_ms: f64,
    pub total_ms: f64,
}

/// Serializable stage-by-stage account of one pipeline run.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub grayscale: GrayscaleStage,
    pub normalize: NormalizeStage,
    pub variability: VariabilityStage,
    pub renormalize: NormalizeStage,
    pub binarize: BinarizeStage,
    pub morphology: MorphologyStage,
    pub labeling: LabelingStage,
    pub selection: SelectionStage,
    pub timing: TimingBreakdown,
}

/// Owned intermediate grids, one per stage output.
#[derive(Clone, Debug)]
pub struct PipelineGrids {
    pub grayscale: GrayImage,
    pub normalized: GrayImage,
    pub variability: GrayImage,
    pub renormalized: GrayImage,
    pub binary: GrayImage,
    pub smoothed: GrayImage,
    pub labels: LabelImage,
}

/// Full detection output: the result, the trace, and the grids.
#[derive(Clone, Debug, Serialize)]
pub struct DetectionReport {
    pub result: PlateResult,
    pub trace: PipelineTrace,
    #[serde(skip)]
    pub grids: PipelineGrids,
}
