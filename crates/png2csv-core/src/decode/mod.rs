//! Image decoding for png2csv.
//!
//! This module provides:
//! - [`Locator`] parsing (plain paths and `file://` URIs)
//! - The [`ImageSource`] capability: given a locator, produce a decoded image or fail
//! - [`FileImageSource`], the filesystem backend built on the `image` crate
//!
//! Decoding is synchronous and happens in one shot; there is no streaming
//! or chunked decode.
//!
//! # Examples
//!
//! ```ignore
//! use png2csv_core::decode::{FileImageSource, ImageSource, Locator};
//!
//! let image = FileImageSource.open(&Locator::new("photo.png")).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod source;
mod types;

pub use source::{FileImageSource, ImageSource};
pub use types::{DecodedImage, Locator, SourceError};
