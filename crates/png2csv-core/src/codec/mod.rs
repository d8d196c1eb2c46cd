//! RGBA8 pixel buffer codec for png2csv.
//!
//! This module provides functionality for:
//! - Rendering a [`DecodedImage`](crate::decode::DecodedImage) into a packed RGBA8 buffer
//! - The [`PixelBuffer`] value type and its bounds-checked row access
//!
//! # Pixel format
//!
//! Every buffer produced here is 8 bits per channel in R,G,B,A order,
//! rows top to bottom, with no padding between rows (stride = `4 * width`).
//! Alpha is whatever the decoder yields by default (straight, not
//! premultiplied). Samples are taken as stored in device RGB; embedded
//! colour profiles are not applied.
//!
//! # Examples
//!
//! ```ignore
//! use png2csv_core::codec::encode_rgba8;
//!
//! let buffer = encode_rgba8(&decoded).unwrap();
//! assert_eq!(buffer.as_bytes().len(), buffer.stride() * buffer.height() as usize);
//! ```

mod buffer;
mod rgba8;

pub use buffer::{CodecError, PixelBuffer, Rows, CHANNELS};
pub use rgba8::encode_rgba8;
