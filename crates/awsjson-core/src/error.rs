//! Client-side error taxonomy.

use awsjson_json::JsonError;

/// Errors raised locally, before a request leaves or after a response arrives.
///
/// Errors reported by the service itself are typed per service and never
/// appear here.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A caller supplied an unusable argument (e.g. an absent request).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request shape could not be encoded.
    #[error("unable to marshal {operation} request: {source}")]
    Marshal {
        /// Operation whose input failed to encode.
        operation: String,
        /// Underlying encoder failure.
        #[source]
        source: JsonError,
    },

    /// The response body could not be decoded.
    #[error("unable to unmarshal {operation} response: {source}")]
    Unmarshal {
        /// Operation whose output failed to decode.
        operation: String,
        /// Underlying decoder failure.
        #[source]
        source: JsonError,
    },

    /// The configured endpoint is not a usable URI.
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint {
        /// The offending endpoint.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP request could not be assembled.
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),
}

impl ClientError {
    /// Build an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Wrap an encoder failure.
    #[must_use]
    pub fn marshal(operation: impl Into<String>, source: JsonError) -> Self {
        Self::Marshal {
            operation: operation.into(),
            source,
        }
    }

    /// Wrap a decoder failure.
    #[must_use]
    pub fn unmarshal(operation: impl Into<String>, source: JsonError) -> Self {
        Self::Unmarshal {
            operation: operation.into(),
            source,
        }
    }
}

/// Convenience result type for client-side conversions.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::*;

    #[test]
    fn test_should_keep_cause_of_marshal_failure() {
        let cause = JsonError::Io(io::Error::other("disk full"));
        let err = ClientError::marshal("Invoke", cause);
        assert_eq!(
            err.to_string(),
            "unable to marshal Invoke request: I/O error: disk full"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_should_format_invalid_argument() {
        let err = ClientError::invalid_argument("Invalid argument passed to marshall(...)");
        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert!(err.to_string().starts_with("invalid argument"));
    }
}
