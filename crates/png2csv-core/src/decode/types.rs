//! Core types for image decoding.

use std::fmt;
use std::path::PathBuf;

use image::{DynamicImage, GenericImageView};
use thiserror::Error;
use url::Url;

/// Error types for image source operations.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The locator could not be opened or decoded into an image.
    #[error("unable to load image from {locator}: {reason}")]
    Unavailable { locator: String, reason: String },

    /// The backend does not implement the requested operation.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl SourceError {
    pub(crate) fn unavailable(locator: &Locator, reason: impl fmt::Display) -> Self {
        SourceError::Unavailable {
            locator: locator.as_str().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A path or URI identifying the source image.
///
/// Locators starting with `file://` are parsed as file URIs, so hosts of
/// `localhost` and percent-escapes resolve to the real path. Everything
/// else, including other URI schemes, is taken verbatim as a filesystem
/// path, relative or absolute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    raw: String,
}

impl Locator {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The locator exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the locator is written as a `file://` URI.
    pub fn is_file_uri(&self) -> bool {
        self.raw
            .get(..FILE_URI_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(FILE_URI_PREFIX))
    }

    /// Filesystem path named by this locator.
    ///
    /// Returns `None` for a `file://` URI that is malformed or names a
    /// non-local host.
    pub fn to_path(&self) -> Option<PathBuf> {
        if !self.is_file_uri() {
            return Some(PathBuf::from(&self.raw));
        }
        Url::parse(&self.raw).ok()?.to_file_path().ok()
    }
}

const FILE_URI_PREFIX: &str = "file://";

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for Locator {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Locator {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A decoded image as produced by an [`ImageSource`](super::ImageSource).
///
/// The pixel representation is whatever the decoder produced; only the
/// codec looks inside it.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl DecodedImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel extent as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether the source carried an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Check if the image covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub(crate) fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_plain_path_is_local() {
        let loc = Locator::new("images/cat.png");
        assert!(!loc.is_file_uri());
        assert_eq!(loc.to_path().as_deref(), Some(Path::new("images/cat.png")));
    }

    #[test]
    fn test_file_uri_reduces_to_path() {
        let loc = Locator::new("file:///tmp/cat.png");
        assert!(loc.is_file_uri());
        assert_eq!(loc.to_path().as_deref(), Some(Path::new("/tmp/cat.png")));

        let upper = Locator::new("FILE:///tmp/cat.png");
        assert_eq!(upper.to_path().as_deref(), Some(Path::new("/tmp/cat.png")));
    }

    #[test]
    #[cfg(unix)]
    fn test_file_uri_percent_escapes_are_decoded() {
        let loc = Locator::new("file:///tmp/photo%20dir/a.png");
        assert_eq!(
            loc.to_path().as_deref(),
            Some(Path::new("/tmp/photo dir/a.png"))
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_file_uri_localhost_is_local() {
        let loc = Locator::new("file://localhost/tmp/photo dir/a.png");
        assert_eq!(
            loc.to_path().as_deref(),
            Some(Path::new("/tmp/photo dir/a.png"))
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_file_uri_with_remote_host_has_no_path() {
        let loc = Locator::new("file://fileserver/share/a.png");
        assert!(loc.to_path().is_none());
    }

    #[test]
    fn test_other_schemes_are_plain_paths() {
        let loc = Locator::new("https://example.com/cat.png");
        assert!(!loc.is_file_uri());
        assert_eq!(
            loc.to_path().as_deref(),
            Some(Path::new("https://example.com/cat.png"))
        );

        let windows = Locator::new(r"C:\images\cat.png");
        assert!(!windows.is_file_uri());
        assert!(windows.to_path().is_some());
    }

    #[test]
    fn test_locator_display_is_verbatim() {
        let loc = Locator::from("file:///tmp/a b.png");
        assert_eq!(loc.to_string(), "file:///tmp/a b.png");
    }

    #[test]
    fn test_decoded_image_dimensions() {
        let img = DecodedImage::new(DynamicImage::new_rgb8(7, 3));
        assert_eq!(img.dimensions(), (7, 3));
        assert_eq!(img.width(), 7);
        assert_eq!(img.height(), 3);
        assert!(!img.has_alpha());
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decoded_image_empty() {
        let img = DecodedImage::from(DynamicImage::new_rgba8(0, 4));
        assert!(img.is_empty());
        assert!(img.has_alpha());
    }

    #[test]
    fn test_source_error_display() {
        let err = SourceError::unavailable(&Locator::new("missing.png"), "not found");
        assert_eq!(
            err.to_string(),
            "unable to load image from missing.png: not found"
        );

        let err = SourceError::Unsupported("remote fetch".to_string());
        assert_eq!(err.to_string(), "unsupported: remote fetch");
    }
}
