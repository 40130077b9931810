//! I/O helpers for the demo binary and tests.
//!
//! - `load_rgb_channels`: read a PNG/JPEG/etc. into three owned channel buffers.
//! - `save_grayscale_u8`: write an intensity grid to a grayscale PNG.
//! - `save_binary_u8`: write a `{0,1}` grid to a black/white PNG.
//! - `save_label_grid`: write a label grid with ids spread over the gray range.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The detector core itself has no file-format surface; everything here is
//! the thin collaborator layer around it.
use super::{GrayImage, ImageView, LabelImage};
use crate::types::Channels;
use image::{GrayImage as PngGray, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGB pixel data split into three same-shaped channel buffers.
#[derive(Clone, Debug)]
pub struct RgbChannels {
    width: usize,
    height: usize,
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
}

impl RgbChannels {
    /// Construct from raw row-major channel buffers.
    pub fn new(width: usize, height: usize, red: Vec<u8>, green: Vec<u8>, blue: Vec<u8>) -> Self {
        Self {
            width,
            height,
            red,
            green,
            blue,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as the read-only channel views the detector consumes.
    pub fn as_channels(&self) -> Channels<'_> {
        Channels {
            red: self.channel_view(&self.red),
            green: self.channel_view(&self.green),
            blue: self.channel_view(&self.blue),
        }
    }

    fn channel_view<'a>(&self, data: &'a [u8]) -> super::ImageU8<'a> {
        super::ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data,
        }
    }
}

/// Load an image from disk and split it into R/G/B channel buffers.
pub fn load_rgb_channels(path: &Path) -> Result<RgbChannels, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let n = width * height;
    let mut red = Vec::with_capacity(n);
    let mut green = Vec::with_capacity(n);
    let mut blue = Vec::with_capacity(n);
    for px in img.pixels() {
        red.push(px.0[0]);
        green.push(px.0[1]);
        blue.push(px.0[2]);
    }
    Ok(RgbChannels::new(width, height, red, green, blue))
}

/// Save an intensity grid to a grayscale PNG.
pub fn save_grayscale_u8(grid: &GrayImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = PngGray::new(grid.w as u32, grid.h as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([px]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a `{0,1}` binary grid as a black/white PNG.
pub fn save_binary_u8(grid: &GrayImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = PngGray::new(grid.w as u32, grid.h as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = if px > 0 { 255u8 } else { 0u8 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a label grid as a grayscale PNG with ids spread over `[64, 255]`.
pub fn save_label_grid(labels: &LabelImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let max_label = labels.data.iter().copied().max().unwrap_or(0);
    let mut out = PngGray::new(labels.w as u32, labels.h as u32);
    for (y, row) in labels.rows().enumerate() {
        for (x, &id) in row.iter().enumerate() {
            let v = if id == 0 || max_label == 0 {
                0u8
            } else {
                (64 + (id as u64 * 191) / max_label as u64) as u8
            };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Pretty-print a serializable value to a JSON file.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
