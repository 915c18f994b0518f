//! JSON engine error types.

use std::io;

/// Errors that can occur while encoding or decoding a shape.
///
/// A missing field is never an error; only structurally invalid documents and
/// values of the wrong type are.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A value could not be serialized.
    #[error("JSON serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input is not a parseable JSON document.
    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The document parsed, but a field held a value of the wrong type.
    #[error("JSON document does not match shape {shape}: {source}")]
    Shape {
        /// Rust type name of the shape being decoded.
        shape: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl JsonError {
    /// Returns `true` if the error came from decoding rather than encoding.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Shape { .. })
    }
}
