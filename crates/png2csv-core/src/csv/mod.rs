//! CSV serialization of RGBA8 pixel buffers.
//!
//! Each pixel row becomes one line of comma-separated unsigned decimal byte
//! values in R,G,B,A order, terminated by a newline:
//!
//! ```text
//! 10,20,30,40,50,60,70,80
//! ```
//!
//! There is no header, no quoting and no trailing delimiter. Lines are
//! written in row order, top to bottom, and each line reaches the sink in
//! a single write so a failure never leaves half a line behind this layer.

mod raster;
mod row;

pub use raster::{write_raster, write_raster_with};
pub use row::{write_row, RowWriter, SerializeError, DEFAULT_TERMINATOR, DELIMITER};
