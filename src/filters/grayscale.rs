//! Color-to-intensity reduction (three channels into one).
//!
//! Two weighting policies:
//! - **uniform**: plain channel average, `r/3 + g/3 + b/3`;
//! - **luminance**: Rec. 601 weights `0.299·r + 0.587·g + 0.114·b`.
//!
//! Each cell is rounded to the nearest integer and clamped to `[0, 255]`.
//! Output shape equals input shape; inputs are never touched.
use crate::image::{GrayImage, ImageView, ImageViewMut};
use crate::types::Channels;

type Weights = [f32; 3];

const UNIFORM_WEIGHTS: Weights = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];
const LUMINANCE_WEIGHTS: Weights = [0.299, 0.587, 0.114];

fn reduce_with_weights(channels: &Channels<'_>, weights: &Weights) -> GrayImage {
    let (w, h) = (channels.red.w, channels.red.h);
    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        let r_row = channels.red.row(y);
        let g_row = channels.green.row(y);
        let b_row = channels.blue.row(y);
        let out_row = out.row_mut(y);
        for x in 0..w {
            let grey = weights[0] * r_row[x] as f32
                + weights[1] * g_row[x] as f32
                + weights[2] * b_row[x] as f32;
            out_row[x] = grey.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Reduce with the unweighted channel average.
pub fn grayscale_uniform(channels: &Channels<'_>) -> GrayImage {
    reduce_with_weights(channels, &UNIFORM_WEIGHTS)
}

/// Reduce with luminance weights (favors green, matching eye response).
pub fn grayscale_luminance(channels: &Channels<'_>) -> GrayImage {
    reduce_with_weights(channels, &LUMINANCE_WEIGHTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageU8;

    fn make_channels<'a>(w: usize, h: usize, data: &'a [u8]) -> Channels<'a> {
        let view = ImageU8 {
            w,
            h,
            stride: w,
            data,
        };
        Channels {
            red: view.clone(),
            green: view.clone(),
            blue: view,
        }
    }

    #[test]
    fn equal_channels_pass_through_both_policies() {
        let data: Vec<u8> = (0..=255).map(|v| v as u8).collect();
        let channels = make_channels(16, 16, &data);
        let uniform = grayscale_uniform(&channels);
        let luminance = grayscale_luminance(&channels);
        assert_eq!(uniform.data, data);
        assert_eq!(luminance.data, data);
    }

    #[test]
    fn luminance_weights_favor_green() {
        let r = [0u8];
        let g = [255u8];
        let b = [0u8];
        let channels = Channels {
            red: ImageU8 {
                w: 1,
                h: 1,
                stride: 1,
                data: &r,
            },
            green: ImageU8 {
                w: 1,
                h: 1,
                stride: 1,
                data: &g,
            },
            blue: ImageU8 {
                w: 1,
                h: 1,
                stride: 1,
                data: &b,
            },
        };
        // 0.587 * 255 = 149.685 -> 150
        assert_eq!(grayscale_luminance(&channels).get(0, 0), 150);
        // 255 / 3 = 85
        assert_eq!(grayscale_uniform(&channels).get(0, 0), 85);
    }
}
