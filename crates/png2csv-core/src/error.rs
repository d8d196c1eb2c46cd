//! Crate-level error types.

use std::fmt;

use thiserror::Error;

use crate::codec::CodecError;
use crate::config::ConfigError;
use crate::csv::SerializeError;
use crate::decode::SourceError;

/// Classification of a failure, independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The required locator setting is absent.
    ConfigurationMissing,
    /// The locator could not be resolved or decoded into an image.
    SourceUnavailable,
    /// No RGBA8 buffer could be obtained or populated.
    Encoding,
    /// The backend does not implement the requested operation.
    Unsupported,
    /// The output sink rejected a write or flush.
    Output,
}

/// Any failure produced by the conversion components.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::ConfigurationMissing,
            Error::Source(SourceError::Unavailable { .. }) => ErrorKind::SourceUnavailable,
            Error::Source(SourceError::Unsupported(_)) => ErrorKind::Unsupported,
            Error::Codec(_) => ErrorKind::Encoding,
            // A row that isn't whole pixels is a buffer layout fault
            Error::Serialize(SerializeError::MalformedRow { .. }) => ErrorKind::Encoding,
            Error::Serialize(SerializeError::Io(_)) => ErrorKind::Output,
        }
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Locate,
    Decode,
    Encode,
    Serialize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Locate => "locate",
            Stage::Decode => "decode",
            Stage::Encode => "encode",
            Stage::Serialize => "serialize",
        })
    }
}

/// A failure tagged with the stage that produced it.
///
/// Displays as `<stage>: <error>`. The source chain continues below the
/// wrapped error, so an alternate-format report never repeats it.
#[derive(Debug)]
pub struct PipelineError {
    pub stage: Stage,
    pub error: Error,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.error)
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.error)
    }
}

impl PipelineError {
    pub fn new(stage: Stage, error: impl Into<Error>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_kind_mapping() {
        let missing = Error::from(ConfigError::Missing { key: "K".into() });
        assert_eq!(missing.kind(), ErrorKind::ConfigurationMissing);

        let unavailable = Error::from(SourceError::Unavailable {
            locator: "x.png".into(),
            reason: "gone".into(),
        });
        assert_eq!(unavailable.kind(), ErrorKind::SourceUnavailable);

        let unsupported = Error::from(SourceError::Unsupported("remote".into()));
        assert_eq!(unsupported.kind(), ErrorKind::Unsupported);

        let codec = Error::from(CodecError::RenderFailed("short".into()));
        assert_eq!(codec.kind(), ErrorKind::Encoding);

        let io_err = Error::from(SerializeError::from(io::Error::from(
            io::ErrorKind::BrokenPipe,
        )));
        assert_eq!(io_err.kind(), ErrorKind::Output);
    }

    #[test]
    fn test_pipeline_error_display_and_source() {
        let err = PipelineError::new(
            Stage::Decode,
            SourceError::Unavailable {
                locator: "x.png".into(),
                reason: "gone".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "decode: unable to load image from x.png: gone"
        );
        assert!(err.source().is_none());
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    }

    #[test]
    fn test_pipeline_error_keeps_io_cause_once() {
        let err = PipelineError::new(
            Stage::Serialize,
            SerializeError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")),
        );
        assert_eq!(err.to_string(), "serialize: failed to write CSV output");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("pipe closed".to_string())
        );

        let report = chain_report(&err);
        assert_eq!(report, "serialize: failed to write CSV output: pipe closed");
    }

    /// Join an error and its sources the way the CLI reports them.
    fn chain_report(err: &dyn std::error::Error) -> String {
        let mut parts = vec![err.to_string()];
        let mut next = err.source();
        while let Some(cause) = next {
            parts.push(cause.to_string());
            next = cause.source();
        }
        parts.join(": ")
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Locate.to_string(), "locate");
        assert_eq!(Stage::Serialize.to_string(), "serialize");
    }
}
