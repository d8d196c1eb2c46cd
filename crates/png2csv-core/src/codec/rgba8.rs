//! Rendering decoded images into packed RGBA8 buffers.

use image::DynamicImage;
use tracing::debug;

use super::buffer::{byte_len, CodecError, PixelBuffer};
use crate::decode::DecodedImage;

/// Render a decoded image into a row-major RGBA8 [`PixelBuffer`].
///
/// The destination is allocated once at exactly `4 * width * height` bytes,
/// zero-filled, and then populated top to bottom. Sources without alpha get
/// an opaque alpha of 255, gray sources replicate luma into R, G and B, and
/// deeper sample types are scaled down to 8 bits by the decoder's own
/// conversion.
///
/// # Errors
///
/// Returns `CodecError::BufferUnavailable` if the destination cannot be
/// allocated, or `CodecError::RenderFailed` if the converted source holds
/// fewer bytes than its extent promises.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn encode_rgba8(image: &DecodedImage) -> Result<PixelBuffer, CodecError> {
    let (width, height) = image.dimensions();
    let len = byte_len(width, height)?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| CodecError::BufferUnavailable { width, height })?;
    bytes.resize(len, 0);

    render_into(image.as_dynamic(), &mut bytes)?;
    debug!(bytes = len, "rendered RGBA8 buffer");

    PixelBuffer::from_raw(width, height, bytes)
}

/// Copy `image` into `dst` as RGBA8. `dst` must already have the packed size.
fn render_into(image: &DynamicImage, dst: &mut [u8]) -> Result<(), CodecError> {
    let converted;
    let src: &[u8] = match image {
        // Already RGBA8: copy the rows as laid out
        DynamicImage::ImageRgba8(src) => src.as_raw(),
        other => {
            converted = other.to_rgba8();
            converted.as_raw()
        }
    };

    let src = src.get(..dst.len()).ok_or_else(|| {
        CodecError::RenderFailed(format!(
            "rendered {} of {} bytes",
            src.len(),
            dst.len()
        ))
    })?;
    dst.copy_from_slice(src);
    Ok(())
}
