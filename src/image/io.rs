//! I/O helpers for drawings and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA8 buffer.
//! - `decode_data_url`: decode a `data:image/png;base64,...` URL as produced by
//!   a browser canvas.
//! - `save_mask_png`: write a single-channel mask (e.g. the ink mask) as PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgba, ImageView};
use crate::error::{ConvertError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned, tightly packed RGBA8 buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Construct an owned buffer given raw `width * height * 4` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        ImageRgba::new(width, height, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Fully transparent canvas.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = (y * self.width + x) * 4;
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Borrow as a read-only `ImageRgba` view
    pub fn as_view(&self) -> ImageRgba<'_> {
        ImageRgba {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Load a drawing from disk and convert to RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| ConvertError::Decode(format!("{}: {e}", path.display())))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbaImage::new(width, height, img.into_raw())
}

/// Decode encoded image bytes (PNG, JPEG) into RGBA8.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ConvertError::Decode(e.to_string()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbaImage::new(width, height, img.into_raw())
}

/// Decode a base64 `data:` URL into RGBA8.
pub fn decode_data_url(url: &str) -> Result<RgbaImage> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ConvertError::Decode("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ConvertError::Decode("data URL has no payload".to_string()))?;
    if !header.ends_with(";base64") {
        return Err(ConvertError::Decode(format!(
            "unsupported data URL encoding '{header}'"
        )));
    }
    if !header.starts_with("image/") {
        return Err(ConvertError::Decode(format!(
            "data URL is not an image ('{header}')"
        )));
    }
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| ConvertError::Decode(format!("invalid base64 payload: {e}")))?;
    decode_image_bytes(&bytes)
}

/// Save a single-channel 0/1 (or 0..255) mask as grayscale PNG. Non-zero
/// values are written as black ink on white.
pub fn save_mask_png<M: ImageView>(mask: &M, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.width() as u32, mask.height() as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, px) in row.chunks_exact(M::CHANNELS).enumerate() {
            let v = if px[0] != 0 { 0u8 } else { 255u8 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| ConvertError::Decode(format!("failed to save {}: {e}", path.display())))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ConvertError::Decode(format!("failed to serialize JSON: {e}")))?;
    fs::write(path, json).map_err(|e| ConvertError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }
    }
    Ok(())
}
