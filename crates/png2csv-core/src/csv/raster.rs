//! Whole-buffer CSV serialization, one line per row.

use std::io::Write;

use tracing::{trace, warn};

use super::row::{RowWriter, SerializeError};
use crate::codec::PixelBuffer;

/// Write every row of `buffer` to `out` with the default line format.
///
/// Returns the number of lines written.
pub fn write_raster<W: Write + ?Sized>(
    out: &mut W,
    buffer: &PixelBuffer,
) -> Result<u32, SerializeError> {
    write_raster_with(out, buffer, &mut RowWriter::new())
}

/// Write every row of `buffer` to `out` through `writer`, top to bottom.
///
/// Stops at the first failing row. Lines written before the failure stay
/// in the sink. A buffer with zero width or zero height writes nothing.
///
/// # Errors
///
/// Returns the first `SerializeError` raised by the row writer.
pub fn write_raster_with<W: Write + ?Sized>(
    out: &mut W,
    buffer: &PixelBuffer,
    writer: &mut RowWriter,
) -> Result<u32, SerializeError> {
    let mut written = 0u32;
    for (y, row) in buffer.rows().enumerate() {
        writer.write_row(out, row).inspect_err(|e| {
            warn!(row = y, error = %e, "row serialization failed");
        })?;
        written += 1;
    }
    trace!(rows = written, "raster serialized");
    Ok(written)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a buffer of random bytes with a random extent.
    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (0u32..=16, 0u32..=16).prop_flat_map(|(width, height)| {
            let size = (width as usize) * (height as usize) * 4;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |bytes| PixelBuffer::from_raw(width, height, bytes).unwrap())
        })
    }

    /// Parse CSV output back into rows of bytes.
    fn parse(text: &str) -> Vec<Vec<u8>> {
        text.lines()
            .map(|line| line.split(',').map(|v| v.parse::<u8>().unwrap()).collect())
            .collect()
    }

    proptest! {
        /// Property: Parsing the output recovers the buffer row by row.
        #[test]
        fn prop_output_parses_back_to_buffer(buf in buffer_strategy()) {
            let mut out = Vec::new();
            let written = write_raster(&mut out, &buf).unwrap();
            let text = String::from_utf8(out).unwrap();
            let rows = parse(&text);

            let expected_rows = if buf.width() == 0 { 0 } else { buf.height() as usize };
            prop_assert_eq!(rows.len(), expected_rows);
            prop_assert_eq!(written as usize, expected_rows);

            for (k, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.len(), buf.stride());
                prop_assert_eq!(&row[..], buf.row(k as u32).unwrap());
            }
            prop_assert_eq!(rows.concat(), buf.as_bytes().to_vec());
        }

        /// Property: Serializing the same buffer twice is byte-identical.
        #[test]
        fn prop_serialization_is_deterministic(buf in buffer_strategy()) {
            let mut first = Vec::new();
            let mut second = Vec::new();
            write_raster(&mut first, &buf).unwrap();
            write_raster(&mut second, &buf).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: No line has a leading or trailing delimiter or empty field.
        #[test]
        fn prop_lines_are_well_formed(buf in buffer_strategy()) {
            let mut out = Vec::new();
            write_raster(&mut out, &buf).unwrap();
            let text = String::from_utf8(out).unwrap();

            prop_assert!(text.is_empty() || text.ends_with('\n'));
            for line in text.lines() {
                prop_assert!(!line.starts_with(','));
                prop_assert!(!line.ends_with(','));
                prop_assert!(!line.contains(",,"));
            }
        }
    }
}
