//! png2csv Core - image to RGBA8 CSV conversion
//!
//! This crate decodes a raster image, renders it into a packed RGBA8 buffer
//! and streams that buffer as CSV text, one line per pixel row.
//!
//! # Module Structure
//!
//! - `decode` - Locators and the pluggable [`ImageSource`] decoder capability
//! - `codec` - Rendering decoded images into [`PixelBuffer`]s
//! - `csv` - Row and raster CSV serialization
//! - `config` - Locator configuration and key/value lookup
//! - `pipeline` - The end-to-end [`Pipeline`] driver
//!
//! # Usage
//!
//! ```ignore
//! use png2csv_core::{Config, EnvLookup, Pipeline};
//!
//! let pipeline = Pipeline::new(Config::default());
//! let summary = pipeline.run(&EnvLookup, &mut std::io::stdout().lock())?;
//! eprintln!("wrote {} rows", summary.rows_written);
//! ```

pub mod codec;
pub mod config;
pub mod csv;
pub mod decode;
pub mod error;
pub mod pipeline;

pub use codec::{encode_rgba8, CodecError, PixelBuffer};
pub use config::{Config, ConfigError, ConfigLookup, EnvLookup, DEFAULT_LOCATOR_KEY};
pub use csv::{write_raster, write_row, RowWriter, SerializeError};
pub use decode::{DecodedImage, FileImageSource, ImageSource, Locator, SourceError};
pub use error::{Error, ErrorKind, PipelineError, Stage};
pub use pipeline::{Pipeline, RunSummary};
