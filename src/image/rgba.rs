use crate::error::{ConvertError, Result};

/// Borrowed RGBA8 drawing surface.
///
/// `stride` is expressed in pixels; each pixel occupies four bytes
/// (`r, g, b, a`).
#[derive(Clone, Copy, Debug)]
pub struct ImageRgba<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageRgba<'a> {
    /// Wrap a tightly packed RGBA buffer, validating its size.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        Self::with_stride(w, h, w, data)
    }

    pub fn with_stride(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        let view = Self { w, h, stride, data };
        view.validate()?;
        Ok(view)
    }

    /// Check that the declared dimensions fit the buffer.
    ///
    /// Views built from the public fields skip `with_stride`; the pixel
    /// scanners call this before reading.
    pub fn validate(&self) -> Result<()> {
        let (w, h, stride) = (self.w, self.h, self.stride);
        if w == 0 || h == 0 {
            return Err(ConvertError::unavailable(format!(
                "canvas has zero area ({w}x{h})"
            )));
        }
        if stride < w {
            return Err(ConvertError::unavailable(format!(
                "stride {stride} is smaller than width {w}"
            )));
        }
        let needed = (h - 1)
            .checked_mul(stride)
            .and_then(|n| n.checked_add(w))
            .and_then(|n| n.checked_mul(4));
        match needed {
            Some(needed) if self.data.len() >= needed => Ok(()),
            Some(needed) => Err(ConvertError::unavailable(format!(
                "buffer holds {} bytes, {w}x{h} canvas needs {needed}",
                self.data.len()
            ))),
            None => Err(ConvertError::unavailable(format!(
                "canvas {w}x{h} with stride {stride} overflows"
            ))),
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.stride + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

impl<'a> crate::image::traits::ImageView for ImageRgba<'a> {
    const CHANNELS: usize = 4;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 4;
        &self.data[start..start + self.w * 4]
    }
}
