//! Error returned by service calls.

use std::fmt;

use awsjson_core::ClientError;

use crate::transport::TransportError;

/// Outcome of a failed service call.
#[derive(Debug)]
pub enum SdkError<E> {
    /// Local failure: invalid argument, marshalling or unmarshalling.
    Client(ClientError),
    /// The transport could not deliver the request.
    Transport(TransportError),
    /// The service answered with an error response.
    Service(E),
}

impl<E> SdkError<E> {
    /// Returns the typed service error, if this is one.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// Consume `self`, returning the typed service error, if this is one.
    #[must_use]
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for SdkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(err) => write!(f, "client error: {err}"),
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::Service(err) => write!(f, "service error: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SdkError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(err) => Some(err),
            Self::Transport(err) => Some(&**err),
            Self::Service(err) => Some(err),
        }
    }
}

impl<E> From<ClientError> for SdkError<E> {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}
