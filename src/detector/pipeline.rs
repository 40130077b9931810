//! Detector pipeline driving plate localization end-to-end.
//!
//! The [`PlateDetector`] exposes a simple API: feed three channel views and
//! get the bounding box of the most plate-like region. Internally it runs
//! the fixed stage chain (intensity reduction, contrast stretch, local
//! variability, a second stretch, binarization, dilate/erode smoothing,
//! component labeling, aspect-ratio selection), timing each stage and
//! keeping every intermediate grid for inspection.
//!
//! Typical usage:
//! ```no_run
//! use plate_detector::{PlateDetector, PlateParams};
//! # use plate_detector::types::Channels;
//!
//! # fn example(channels: Channels) -> Result<(), plate_detector::DetectError> {
//! let detector = PlateDetector::new(PlateParams::default());
//! let result = detector.process(&channels)?;
//! println!("plate box: {:?}", result.bbox);
//! # Ok(())
//! # }
//! ```
use super::options::{GrayscalePolicy, PlateParams};
use crate::diagnostics::{
    BinarizeStage, DetectionReport, GrayscaleStage, InputDescriptor, LabelingStage,
    MorphologyStage, NormalizeStage, PipelineGrids, PipelineTrace, SelectionStage,
    TimingBreakdown, VariabilityStage,
};
use crate::error::DetectError;
use crate::filters::{
    binarize, grayscale_luminance, grayscale_uniform, normalize_range, variability_response,
};
use crate::image::GrayImage;
use crate::morphology;
use crate::regions::{label_components, select_plate_region};
use crate::types::{Channels, PlateResult};
use log::debug;
use std::time::Instant;

/// Plate detector orchestrating the fixed filter/morphology/region chain.
///
/// The pipeline is pure: `process` holds no state across calls and the same
/// input always yields the same output.
pub struct PlateDetector {
    params: PlateParams,
}

impl PlateDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: PlateParams) -> Self {
        Self { params }
    }

    /// The parameters this detector runs with.
    pub fn params(&self) -> &PlateParams {
        &self.params
    }

    /// Run the detector, returning only the compact result.
    pub fn process(&self, channels: &Channels<'_>) -> Result<PlateResult, DetectError> {
        self.process_with_diagnostics(channels).map(|r| r.result)
    }

    /// Run the detector and return the result together with per-stage
    /// diagnostics and every intermediate grid.
    pub fn process_with_diagnostics(
        &self,
        channels: &Channels<'_>,
    ) -> Result<DetectionReport, DetectError> {
        let (width, height) = channels.dims()?;
        debug!(
            "PlateDetector::process start w={} h={} policy={}",
            width,
            height,
            self.params.grayscale.as_str()
        );
        let total_start = Instant::now();

        // 1) Intensity reduction
        let stage_start = Instant::now();
        let grayscale = match self.params.grayscale {
            GrayscalePolicy::Uniform => grayscale_uniform(channels),
            GrayscalePolicy::Luminance => grayscale_luminance(channels),
        };
        let grayscale_stage = GrayscaleStage {
            policy: self.params.grayscale.as_str(),
            mean_intensity: mean_intensity(&grayscale),
            elapsed_ms: elapsed_ms(stage_start),
        };

        // 2) Contrast stretch
        let stage_start = Instant::now();
        let (normalized, norm_info) = normalize_range(&grayscale);
        let normalize_stage = NormalizeStage {
            input_min: norm_info.min,
            input_max: norm_info.max,
            flat: norm_info.flat,
            elapsed_ms: elapsed_ms(stage_start),
        };
        if norm_info.flat {
            debug!("flat intensity grid: contrast stretch is a no-op");
        }

        // 3) Local variability (texture response), then stretch it too
        let stage_start = Instant::now();
        let variability = variability_response(&normalized);
        let variability_stage = VariabilityStage {
            peak_response: variability.data.iter().copied().max().unwrap_or(0),
            elapsed_ms: elapsed_ms(stage_start),
        };

        let stage_start = Instant::now();
        let (renormalized, renorm_info) = normalize_range(&variability);
        let renormalize_stage = NormalizeStage {
            input_min: renorm_info.min,
            input_max: renorm_info.max,
            flat: renorm_info.flat,
            elapsed_ms: elapsed_ms(stage_start),
        };

        // 4) Binarization
        let stage_start = Instant::now();
        let binary = binarize(&renormalized, self.params.threshold);
        let binarize_stage = BinarizeStage {
            threshold: self.params.threshold,
            foreground: binary.foreground_count(),
            elapsed_ms: elapsed_ms(stage_start),
        };
        let filtering_ms = elapsed_ms(total_start);

        // 5) Morphological smoothing
        let stage_start = Instant::now();
        let smoothed = morphology::smooth(
            &binary,
            self.params.dilate_passes,
            self.params.erode_passes,
        );
        let morphology_stage = MorphologyStage {
            dilate_passes: self.params.dilate_passes,
            erode_passes: self.params.erode_passes,
            foreground_in: binarize_stage.foreground,
            foreground_out: smoothed.foreground_count(),
            elapsed_ms: elapsed_ms(stage_start),
        };
        debug!(
            "morphology: foreground {} -> {}",
            morphology_stage.foreground_in, morphology_stage.foreground_out
        );

        // 6) Component labeling
        let stage_start = Instant::now();
        let labeling = label_components(&smoothed, self.params.max_labels)?;
        let labeling_stage = LabelingStage {
            components: labeling.component_count(),
            foreground: labeling.foreground_total(),
            elapsed_ms: elapsed_ms(stage_start),
        };
        debug!("labeling: {} components", labeling_stage.components);

        // 7) Shape-based selection
        let stage_start = Instant::now();
        let selection = select_plate_region(
            &labeling,
            self.params.selection.min_aspect,
            self.params.selection.max_aspect,
        )?;
        let selection_ms = elapsed_ms(stage_start);
        let total_ms = elapsed_ms(total_start);
        debug!(
            "selected label {} after {} rejections, bbox {:?}",
            selection.label,
            selection.rejected.len(),
            selection.bbox
        );

        let result = PlateResult {
            bbox: selection.bbox,
            label: selection.label,
            pixel_count: selection.pixel_count,
            regions_rejected: selection.rejected.len(),
            latency_ms: total_ms,
        };
        let trace = PipelineTrace {
            input: InputDescriptor { width, height },
            grayscale: grayscale_stage,
            normalize: normalize_stage,
            variability: variability_stage,
            renormalize: renormalize_stage,
            binarize: binarize_stage,
            morphology: morphology_stage,
            labeling: labeling_stage,
            selection: SelectionStage {
                accepted_label: selection.label,
                rejected: selection.rejected,
                elapsed_ms: selection_ms,
            },
            timing: TimingBreakdown {
                filtering_ms,
                morphology_ms: morphology_stage.elapsed_ms,
                labeling_ms: labeling_stage.elapsed_ms,
                selection_ms,
                total_ms,
            },
        };
        Ok(DetectionReport {
            result,
            trace,
            grids: PipelineGrids {
                grayscale,
                normalized,
                variability,
                renormalized,
                binary,
                smoothed,
                labels: labeling.labels,
            },
        })
    }
}

fn mean_intensity(grid: &GrayImage) -> f32 {
    if grid.data.is_empty() {
        return 0.0;
    }
    let sum: u64 = grid.data.iter().map(|&v| v as u64).sum();
    sum as f32 / grid.data.len() as f32
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
