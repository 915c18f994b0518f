//! Lightsail error types.
//!
//! Every Lightsail exception may carry `code`, `docs` and `tip` next to the
//! message: a service-side detail code, a documentation link and a
//! remediation hint.

use std::fmt;

use awsjson_core::{ErrorResponse, ServiceError};

/// Well-known Lightsail error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LightsailErrorCode {
    /// The caller lacks permission for the operation.
    AccessDeniedException,
    /// The account is still being set up.
    AccountSetupInProgressException,
    /// A request parameter is invalid.
    InvalidInputException,
    /// The named resource does not exist.
    NotFoundException,
    /// The operation failed on the resource.
    OperationFailureException,
    /// The service encountered an internal error.
    ServiceException,
    /// The request was not authenticated.
    UnauthenticatedException,
    /// An error type this version of the model does not know about.
    Unknown,
}

impl LightsailErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDeniedException => "AccessDeniedException",
            Self::AccountSetupInProgressException => "AccountSetupInProgressException",
            Self::InvalidInputException => "InvalidInputException",
            Self::NotFoundException => "NotFoundException",
            Self::OperationFailureException => "OperationFailureException",
            Self::ServiceException => "ServiceException",
            Self::UnauthenticatedException => "UnauthenticatedException",
            Self::Unknown => ErrorResponse::UNKNOWN_TYPE,
        }
    }

    /// Map a normalized error type to a code, falling back to `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "AccessDeniedException" => Self::AccessDeniedException,
            "AccountSetupInProgressException" => Self::AccountSetupInProgressException,
            "InvalidInputException" => Self::InvalidInputException,
            "NotFoundException" => Self::NotFoundException,
            "OperationFailureException" => Self::OperationFailureException,
            "ServiceException" => Self::ServiceException,
            "UnauthenticatedException" => Self::UnauthenticatedException,
            _ => Self::Unknown,
        }
    }

    /// Whether errors of this code are conventionally retryable.
    ///
    /// Account setup finishes on its own, so waiting and retrying succeeds.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ServiceException | Self::AccountSetupInProgressException
        )
    }
}

impl fmt::Display for LightsailErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Lightsail error response.
#[derive(Debug, Clone, PartialEq)]
pub struct LightsailError {
    /// The error code.
    pub code: LightsailErrorCode,
    /// The error type as sent by the service.
    pub error_type: String,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The service-assigned request id.
    pub request_id: Option<String>,
    /// Service-side detail code.
    pub detail_code: Option<String>,
    /// Documentation link.
    pub docs: Option<String>,
    /// Remediation hint.
    pub tip: Option<String>,
}

impl fmt::Display for LightsailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LightsailError({}): {}", self.error_type, self.message)?;
        if let Some(tip) = &self.tip {
            write!(f, " (tip: {tip})")?;
        }
        Ok(())
    }
}

impl std::error::Error for LightsailError {}

impl LightsailError {
    /// Create a new `LightsailError` with a custom message.
    #[must_use]
    pub fn with_message(code: LightsailErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_type: code.as_str().to_owned(),
            message: message.into(),
            status_code: http::StatusCode::BAD_REQUEST,
            request_id: None,
            detail_code: None,
            docs: None,
            tip: None,
            code,
        }
    }

    /// Returns `true` for `NotFoundException`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == LightsailErrorCode::NotFoundException
    }
}

impl ServiceError for LightsailError {
    fn from_response(response: ErrorResponse) -> Self {
        Self {
            code: LightsailErrorCode::from_name(&response.error_type),
            message: response.message_or_type().to_owned(),
            detail_code: response.field("code"),
            docs: response.field("docs"),
            tip: response.field("tip"),
            status_code: response.status_code,
            request_id: response.request_id,
            error_type: response.error_type,
        }
    }

    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn is_retryable(&self) -> bool {
        self.code.is_retryable()
            || (self.code == LightsailErrorCode::Unknown && self.status_code.is_server_error())
    }
}
