//! Error types for the audiometa library.

use thiserror::Error;

/// Main error type for metadata extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// Header matches none of the known container signatures.
    ///
    /// This is the only parse-level error that propagates to callers: no
    /// parser can even be selected for the source.
    #[error("Unrecognized container format")]
    UnrecognizedFormat,

    /// A read requested more bytes than the source had left.
    #[error("Unexpected end of stream")]
    UnexpectedEnd,

    /// Structurally invalid container data.
    #[error("Malformed structure: {0}")]
    Malformed(String),

    /// I/O errors from the underlying byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a malformed-structure error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }

    /// Check if this error reports a truncated source.
    #[must_use]
    pub fn is_truncation(&self) -> bool {
        match self {
            Error::UnexpectedEnd => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }

    /// Check if this error is recovered locally by container loops.
    ///
    /// Truncated and malformed units terminate the current frame/block/atom
    /// loop early; the parser keeps whatever it has accumulated instead of
    /// propagating the error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.is_truncation() || matches!(self, Error::Malformed(_))
    }
}
