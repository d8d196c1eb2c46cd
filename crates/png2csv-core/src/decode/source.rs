//! Image sources: turn a [`Locator`] into a [`DecodedImage`].

use image::{GenericImageView, ImageReader};
use tracing::debug;

use super::{DecodedImage, Locator, SourceError};

/// A decoder capable of producing a [`DecodedImage`] from a locator.
pub trait ImageSource {
    /// Open and decode the image named by `locator`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the locator cannot be resolved,
    /// opened or decoded, carrying the locator verbatim.
    /// `SourceError::Unsupported` is reserved for backends that do not
    /// implement an operation at all.
    fn open(&self, locator: &Locator) -> Result<DecodedImage, SourceError>;
}

impl<F> ImageSource for F
where
    F: Fn(&Locator) -> Result<DecodedImage, SourceError>,
{
    fn open(&self, locator: &Locator) -> Result<DecodedImage, SourceError> {
        self(locator)
    }
}

/// Decodes images from the local filesystem using the `image` crate.
///
/// The format is guessed from the file contents, so a PNG with a `.jpg`
/// extension still decodes. Locators that are not `file://` URIs are opened
/// as paths verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl ImageSource for FileImageSource {
    #[tracing::instrument(skip(self), fields(locator = %locator))]
    fn open(&self, locator: &Locator) -> Result<DecodedImage, SourceError> {
        let path = locator
            .to_path()
            .ok_or_else(|| SourceError::unavailable(locator, "not a local file URI"))?;

        let reader = ImageReader::open(&path)
            .map_err(|e| SourceError::unavailable(locator, e))?
            .with_guessed_format()
            .map_err(|e| SourceError::unavailable(locator, e))?;

        let format = reader.format();
        let img = reader
            .decode()
            .map_err(|e| SourceError::unavailable(locator, e))?;

        let (width, height) = img.dimensions();
        debug!(
            width,
            height,
            format = ?format,
            color = ?img.color(),
            "decoded image"
        );
        Ok(DecodedImage::new(img))
    }
}
