//! Packed RGBA8 pixel buffer.

use thiserror::Error;

/// Number of bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Errors that can occur while producing an RGBA8 buffer.
#[derive(Debug, Error)]
pub enum CodecError {
    /// No destination buffer could be obtained for the requested extent.
    #[error("pixel buffer unavailable for {width}x{height} RGBA8 image")]
    BufferUnavailable { width: u32, height: u32 },

    /// The renderer failed to populate the destination buffer.
    #[error("RGBA8 render failed: {0}")]
    RenderFailed(String),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Byte length of a packed RGBA8 image, or `BufferUnavailable` if it
/// does not fit in memory addressing.
pub(crate) fn byte_len(width: u32, height: u32) -> Result<usize, CodecError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(CodecError::BufferUnavailable { width, height })
}

/// Row-major RGBA8 pixels with their extent.
///
/// The length of the byte buffer is always exactly `4 * width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes, checking them against the given extent.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidPixelData` if `bytes.len()` is not
    /// `4 * width * height`, or `CodecError::BufferUnavailable` if that
    /// product overflows.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, CodecError> {
        let expected = byte_len(width, height)?;
        if bytes.len() != expected {
            return Err(CodecError::InvalidPixelData {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            width,
            height,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// All pixel bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.bytes
    }

    /// Check if the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes of row `y`, or `None` if `y` is out of range.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = (y as usize).checked_mul(stride)?;
        self.bytes.get(start..start.checked_add(stride)?)
    }

    /// Iterate over rows from top to bottom.
    ///
    /// A buffer with zero width has no bytes and therefore yields no rows.
    pub fn rows(&self) -> Rows<'_> {
        Rows { buffer: self, y: 0 }
    }
}

/// Iterator over the rows of a [`PixelBuffer`], top to bottom.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    buffer: &'a PixelBuffer,
    y: u32,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        // Zero width with nonzero height still has no pixels: emit no rows
        // rather than `height` empty ones.
        if self.buffer.is_empty() {
            return None;
        }
        let row = self.buffer.row(self.y)?;
        self.y += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.buffer.is_empty() {
            0
        } else {
            self.buffer.height.saturating_sub(self.y) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
