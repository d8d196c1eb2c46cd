//! Single-row CSV line encoding.

use std::io::{self, Write};

use thiserror::Error;

use crate::codec::CHANNELS;

/// Line terminator used unless configured otherwise.
pub const DEFAULT_TERMINATOR: &str = "\n";

/// Separator between byte values.
pub const DELIMITER: u8 = b',';

/// Errors that can occur while writing CSV lines.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The row is not a whole number of RGBA8 pixels.
    #[error("malformed row: {len} bytes is not a whole number of RGBA8 pixels")]
    MalformedRow { len: usize },

    /// The output sink rejected the write.
    #[error("failed to write CSV output")]
    Io(#[from] io::Error),
}

/// Writes rows as CSV lines, reusing one scratch buffer across rows.
#[derive(Debug, Clone)]
pub struct RowWriter {
    terminator: String,
    line: Vec<u8>,
}

impl Default for RowWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RowWriter {
    /// Writer terminating lines with [`DEFAULT_TERMINATOR`].
    pub fn new() -> Self {
        Self::with_terminator(DEFAULT_TERMINATOR)
    }

    pub fn with_terminator(terminator: impl Into<String>) -> Self {
        Self {
            terminator: terminator.into(),
            line: Vec::new(),
        }
    }

    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    /// Write `row` to `out` as one CSV line.
    ///
    /// An empty row produces just the terminator.
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::MalformedRow` if `row.len()` is not a
    /// multiple of 4, or `SerializeError::Io` if the sink fails.
    pub fn write_row<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        row: &[u8],
    ) -> Result<(), SerializeError> {
        if row.len() % CHANNELS != 0 {
            return Err(SerializeError::MalformedRow { len: row.len() });
        }

        self.line.clear();
        // At most "255," per byte
        self.line.reserve(row.len() * 4 + self.terminator.len());
        for (i, &value) in row.iter().enumerate() {
            if i > 0 {
                self.line.push(DELIMITER);
            }
            push_decimal(&mut self.line, value);
        }
        self.line.extend_from_slice(self.terminator.as_bytes());

        out.write_all(&self.line)?;
        Ok(())
    }
}

/// Write one row with the default terminator.
pub fn write_row<W: Write + ?Sized>(out: &mut W, row: &[u8]) -> Result<(), SerializeError> {
    RowWriter::new().write_row(out, row)
}

/// Append the unsigned decimal digits of `value`, without leading zeros.
#[inline]
fn push_decimal(buf: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        buf.push(b'0' + value / 100);
    }
    if value >= 10 {
        buf.push(b'0' + (value / 10) % 10);
    }
    buf.push(b'0' + value % 10);
}
