//! End-to-end conversion: locate, decode, encode, serialize.
//!
//! The stages run strictly in order and the first failure ends the run.
//! The output sink is flushed on every exit path, so whatever lines were
//! written before a failure reach the sink complete.

use std::io::Write;

use tracing::{debug, info};

use crate::codec::encode_rgba8;
use crate::config::{Config, ConfigLookup};
use crate::csv::{write_raster_with, RowWriter, SerializeError};
use crate::decode::{FileImageSource, ImageSource};
use crate::error::{PipelineError, Stage};

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of CSV lines written.
    pub rows_written: u32,
}

/// A configured conversion pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline<S = FileImageSource> {
    config: Config,
    source: S,
}

impl Pipeline<FileImageSource> {
    /// Pipeline decoding from the local filesystem.
    pub fn new(config: Config) -> Self {
        Self::with_source(config, FileImageSource)
    }
}

impl<S: ImageSource> Pipeline<S> {
    pub fn with_source(config: Config, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole conversion, writing CSV lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns a `PipelineError` naming the stage that failed. Nothing is
    /// written to `out` unless decoding and encoding both succeed.
    #[tracing::instrument(skip_all, fields(locator_key = %self.config.locator_key))]
    pub fn run<L, W>(&self, lookup: &L, out: &mut W) -> Result<RunSummary, PipelineError>
    where
        L: ConfigLookup + ?Sized,
        W: Write + ?Sized,
    {
        let result = self.run_stages(lookup, out);
        let flushed = out.flush();

        let summary = result?;
        flushed.map_err(|e| PipelineError::new(Stage::Serialize, SerializeError::Io(e)))?;

        info!(
            width = summary.width,
            height = summary.height,
            rows = summary.rows_written,
            "conversion complete"
        );
        Ok(summary)
    }

    fn run_stages<L, W>(&self, lookup: &L, out: &mut W) -> Result<RunSummary, PipelineError>
    where
        L: ConfigLookup + ?Sized,
        W: Write + ?Sized,
    {
        let locator = self
            .config
            .resolve_locator(lookup)
            .map_err(|e| PipelineError::new(Stage::Locate, e))?;
        debug!(%locator, "resolved image locator");

        let image = self
            .source
            .open(&locator)
            .map_err(|e| PipelineError::new(Stage::Decode, e))?;

        let buffer = encode_rgba8(&image).map_err(|e| PipelineError::new(Stage::Encode, e))?;
        drop(image);

        let mut writer = RowWriter::with_terminator(self.config.line_terminator.as_str());
        let rows_written = write_raster_with(out, &buffer, &mut writer)
            .map_err(|e| PipelineError::new(Stage::Serialize, e))?;

        Ok(RunSummary {
            width: buffer.width(),
            height: buffer.height(),
            rows_written,
        })
    }
}
