//! Parameter types configuring the detector stages.
//!
//! Defaults: luminance grayscale, cutoff at 150 on the renormalized
//! variability response, five dilations followed by five erosions, and
//! plate acceptance between aspect ratios 1.5 and 5.
//! For tuning, start with the threshold and the morphology pass counts; on
//! small frames the defaults erode everything (each erosion zeroes the
//! border ring).

use serde::Deserialize;

/// Policy for collapsing three color channels into one intensity grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrayscalePolicy {
    /// Unweighted channel average `r/3 + g/3 + b/3`.
    Uniform,
    /// Rec. 601 luminance weights `0.299r + 0.587g + 0.114b`.
    #[default]
    Luminance,
}

impl GrayscalePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrayscalePolicy::Uniform => "uniform",
            GrayscalePolicy::Luminance => "luminance",
        }
    }
}

/// Detector-wide parameters controlling the pipeline stages.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlateParams {
    /// Color-to-intensity reduction policy.
    pub grayscale: GrayscalePolicy,
    /// Binarization cutoff applied to the normalized variability response.
    pub threshold: u8,
    /// Dilation passes merging fragmented strokes into blobs.
    pub dilate_passes: usize,
    /// Erosion passes shaving the blobs and the noise back down.
    pub erode_passes: usize,
    /// Region acceptance gate on bounding-box aspect ratio.
    pub selection: SelectionOptions,
    /// Optional hard cap on distinct component labels. `None` grows without
    /// bound; `Some(n)` fails the run when component `n + 1` is found.
    pub max_labels: Option<usize>,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            grayscale: GrayscalePolicy::default(),
            threshold: 150,
            dilate_passes: 5,
            erode_passes: 5,
            selection: SelectionOptions::default(),
            max_labels: None,
        }
    }
}

/// Aspect-ratio acceptance window for the region selector.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    /// Minimum accepted width/height ratio.
    pub min_aspect: f32,
    /// Maximum accepted width/height ratio.
    pub max_aspect: f32,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            min_aspect: 1.5,
            max_aspect: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_deserialize_with_partial_overrides() {
        let json = r#"{ "grayscale": "uniform", "threshold": 120, "max_labels": 100 }"#;
        let params: PlateParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.grayscale, GrayscalePolicy::Uniform);
        assert_eq!(params.threshold, 120);
        assert_eq!(params.max_labels, Some(100));
        // Untouched knobs keep their defaults.
        assert_eq!(params.dilate_passes, 5);
        assert_eq!(params.selection.min_aspect, 1.5);
    }
}
