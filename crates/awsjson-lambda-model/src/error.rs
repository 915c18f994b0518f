//! Lambda error types.
//!
//! Lambda reports errors with an `x-amzn-errortype` header or a `__type`
//! body field. Some exceptions carry extra fields next to the message:
//! throttling errors name a [`ThrottleReason`] and a retry delay, and
//! `EC2UnexpectedException` forwards the EC2 error code.

use std::fmt;

use awsjson_core::{ErrorResponse, ServiceError};

use crate::types::ThrottleReason;

/// Well-known Lambda error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LambdaErrorCode {
    /// Lambda was denied access to EC2 resources of a VPC function.
    EC2AccessDeniedException,
    /// EC2 throttled Lambda during function initialization.
    EC2ThrottledException,
    /// EC2 returned an unexpected error during function initialization.
    EC2UnexpectedException,
    /// No more network interfaces can be created for the VPC.
    ENILimitReachedException,
    /// A parameter value is invalid.
    InvalidParameterValueException,
    /// The request body could not be parsed as JSON.
    InvalidRequestContentException,
    /// The runtime or runtime version is not supported.
    InvalidRuntimeException,
    /// A security group in the VPC configuration is invalid.
    InvalidSecurityGroupIDException,
    /// A subnet in the VPC configuration is invalid.
    InvalidSubnetIDException,
    /// The deployment package could not be unzipped.
    InvalidZipFileException,
    /// Lambda could not decrypt environment variables: access denied.
    KMSAccessDeniedException,
    /// Lambda could not decrypt environment variables: key disabled.
    KMSDisabledException,
    /// Lambda could not decrypt environment variables: key state invalid.
    KMSInvalidStateException,
    /// Lambda could not decrypt environment variables: key not found.
    KMSNotFoundException,
    /// The request payload exceeded the invocation limit.
    RequestTooLargeException,
    /// The resource already exists or another operation is in progress.
    ResourceConflictException,
    /// The resource does not exist.
    ResourceNotFoundException,
    /// The function is inactive and its VPC connection is being restored.
    ResourceNotReadyException,
    /// The service encountered an internal error.
    ServiceException,
    /// A subnet has no free IP addresses left.
    SubnetIPAddressLimitReachedException,
    /// The request throughput limit was exceeded.
    TooManyRequestsException,
    /// The content type of the `Invoke` payload is not JSON.
    UnsupportedMediaTypeException,
    /// An error type this version of the model does not know about.
    Unknown,
}

impl LambdaErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EC2AccessDeniedException => "EC2AccessDeniedException",
            Self::EC2ThrottledException => "EC2ThrottledException",
            Self::EC2UnexpectedException => "EC2UnexpectedException",
            Self::ENILimitReachedException => "ENILimitReachedException",
            Self::InvalidParameterValueException => "InvalidParameterValueException",
            Self::InvalidRequestContentException => "InvalidRequestContentException",
            Self::InvalidRuntimeException => "InvalidRuntimeException",
            Self::InvalidSecurityGroupIDException => "InvalidSecurityGroupIDException",
            Self::InvalidSubnetIDException => "InvalidSubnetIDException",
            Self::InvalidZipFileException => "InvalidZipFileException",
            Self::KMSAccessDeniedException => "KMSAccessDeniedException",
            Self::KMSDisabledException => "KMSDisabledException",
            Self::KMSInvalidStateException => "KMSInvalidStateException",
            Self::KMSNotFoundException => "KMSNotFoundException",
            Self::RequestTooLargeException => "RequestTooLargeException",
            Self::ResourceConflictException => "ResourceConflictException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::ResourceNotReadyException => "ResourceNotReadyException",
            Self::ServiceException => "ServiceException",
            Self::SubnetIPAddressLimitReachedException => "SubnetIPAddressLimitReachedException",
            Self::TooManyRequestsException => "TooManyRequestsException",
            Self::UnsupportedMediaTypeException => "UnsupportedMediaTypeException",
            Self::Unknown => ErrorResponse::UNKNOWN_TYPE,
        }
    }

    /// Map a normalized error type to a code, falling back to `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "EC2AccessDeniedException" => Self::EC2AccessDeniedException,
            "EC2ThrottledException" => Self::EC2ThrottledException,
            "EC2UnexpectedException" => Self::EC2UnexpectedException,
            "ENILimitReachedException" => Self::ENILimitReachedException,
            "InvalidParameterValueException" => Self::InvalidParameterValueException,
            "InvalidRequestContentException" => Self::InvalidRequestContentException,
            "InvalidRuntimeException" => Self::InvalidRuntimeException,
            "InvalidSecurityGroupIDException" => Self::InvalidSecurityGroupIDException,
            "InvalidSubnetIDException" => Self::InvalidSubnetIDException,
            "InvalidZipFileException" => Self::InvalidZipFileException,
            "KMSAccessDeniedException" => Self::KMSAccessDeniedException,
            "KMSDisabledException" => Self::KMSDisabledException,
            "KMSInvalidStateException" => Self::KMSInvalidStateException,
            "KMSNotFoundException" => Self::KMSNotFoundException,
            "RequestTooLargeException" => Self::RequestTooLargeException,
            "ResourceConflictException" => Self::ResourceConflictException,
            "ResourceNotFoundException" => Self::ResourceNotFoundException,
            "ResourceNotReadyException" => Self::ResourceNotReadyException,
            "ServiceException" => Self::ServiceException,
            "SubnetIPAddressLimitReachedException" => Self::SubnetIPAddressLimitReachedException,
            "TooManyRequestsException" => Self::TooManyRequestsException,
            "UnsupportedMediaTypeException" => Self::UnsupportedMediaTypeException,
            _ => Self::Unknown,
        }
    }

    /// Whether errors of this code are conventionally retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::EC2ThrottledException
                | Self::EC2UnexpectedException
                | Self::ResourceNotReadyException
                | Self::ServiceException
                | Self::TooManyRequestsException
        )
    }
}

impl fmt::Display for LambdaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Lambda error response.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaError {
    /// The error code.
    pub code: LambdaErrorCode,
    /// The error type as sent by the service, kept for `Unknown` codes.
    pub error_type: String,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The service-assigned request id.
    pub request_id: Option<String>,
    /// The `Type` field: `User` or `Service`.
    pub r#type: Option<String>,
    /// Seconds to wait before retrying, on `TooManyRequestsException`.
    pub retry_after_seconds: Option<String>,
    /// Throttle reason, on `TooManyRequestsException`.
    pub reason: Option<ThrottleReason>,
    /// EC2 error code, on `EC2UnexpectedException`.
    pub ec2_error_code: Option<String>,
}

impl fmt::Display for LambdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LambdaError({}): {}", self.error_type, self.message)
    }
}

impl std::error::Error for LambdaError {}

impl LambdaError {
    /// Create a new `LambdaError` with a custom message.
    #[must_use]
    pub fn with_message(code: LambdaErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_type: code.as_str().to_owned(),
            message: message.into(),
            status_code: http::StatusCode::BAD_REQUEST,
            request_id: None,
            r#type: None,
            retry_after_seconds: None,
            reason: None,
            ec2_error_code: None,
            code,
        }
    }

    /// Returns the throttle reason, if the service sent one.
    #[must_use]
    pub fn reason(&self) -> Option<&ThrottleReason> {
        self.reason.as_ref()
    }

    /// Returns `true` for `ResourceNotFoundException`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == LambdaErrorCode::ResourceNotFoundException
    }

    /// Returns `true` for `TooManyRequestsException`.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        self.code == LambdaErrorCode::TooManyRequestsException
    }
}

impl ServiceError for LambdaError {
    fn from_response(response: ErrorResponse) -> Self {
        let code = LambdaErrorCode::from_name(&response.error_type);

        let (retry_after_seconds, reason) = if code == LambdaErrorCode::TooManyRequestsException {
            (
                response
                    .field("retryAfterSeconds")
                    .or_else(|| response.retry_after.clone()),
                response
                    .field("Reason")
                    .map(|raw| ThrottleReason::from_wire(&raw)),
            )
        } else {
            (None, None)
        };
        let ec2_error_code = if code == LambdaErrorCode::EC2UnexpectedException {
            response.field("EC2ErrorCode")
        } else {
            None
        };

        Self {
            message: response.message_or_type().to_owned(),
            r#type: response.field("Type"),
            status_code: response.status_code,
            request_id: response.request_id,
            error_type: response.error_type,
            retry_after_seconds,
            reason,
            ec2_error_code,
            code,
        }
    }

    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn is_retryable(&self) -> bool {
        self.code.is_retryable()
            || (self.code == LambdaErrorCode::Unknown && self.status_code.is_server_error())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(
        error_type: &str,
        status: http::StatusCode,
        body: serde_json::Value,
    ) -> ErrorResponse {
        let mut raw = ErrorResponse::new(error_type, status);
        if let serde_json::Value::Object(map) = body {
            raw.message = map
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned);
            raw.fields = map;
        }
        raw
    }

    #[test]
    fn test_should_decode_throttling_error_with_reason() {
        let raw = response(
            "TooManyRequestsException",
            http::StatusCode::TOO_MANY_REQUESTS,
            json!({
                "Type": "User",
                "message": "Rate exceeded",
                "Reason": "CallerRateLimitExceeded",
                "retryAfterSeconds": "2"
            }),
        );
        let err = LambdaError::from_response(raw);

        assert_eq!(err.code, LambdaErrorCode::TooManyRequestsException);
        assert_eq!(err.error_type(), "TooManyRequestsException");
        assert_eq!(err.message, "Rate exceeded");
        assert_eq!(err.r#type.as_deref(), Some("User"));
        assert_eq!(
            err.reason().map(ThrottleReason::as_str),
            Some("CallerRateLimitExceeded")
        );
        assert_eq!(err.retry_after_seconds.as_deref(), Some("2"));
        assert!(err.is_throttling());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_should_fall_back_to_retry_after_header() {
        let mut raw = response(
            "TooManyRequestsException",
            http::StatusCode::TOO_MANY_REQUESTS,
            json!({"message": "slow down"}),
        );
        raw.retry_after = Some("5".to_owned());
        let err = LambdaError::from_response(raw);
        assert_eq!(err.retry_after_seconds.as_deref(), Some("5"));
        assert!(err.reason().is_none());
    }

    #[test]
    fn test_should_keep_unrecognized_throttle_reason() {
        let raw = response(
            "TooManyRequestsException",
            http::StatusCode::TOO_MANY_REQUESTS,
            json!({"Reason": "SomethingNew"}),
        );
        let err = LambdaError::from_response(raw);
        assert_eq!(
            err.reason(),
            Some(&ThrottleReason::Unknown("SomethingNew".to_owned()))
        );
        assert_eq!(err.message, "TooManyRequestsException");
    }

    #[test]
    fn test_should_decode_ec2_error_code() {
        let raw = response(
            "EC2UnexpectedException",
            http::StatusCode::BAD_GATEWAY,
            json!({"message": "boom", "EC2ErrorCode": "InternalError"}),
        );
        let err = LambdaError::from_response(raw);
        assert_eq!(err.ec2_error_code.as_deref(), Some("InternalError"));
        assert!(err.retry_after_seconds.is_none());
    }

    #[test]
    fn test_should_map_unrecognized_type_to_unknown() {
        let raw = response(
            "BrandNewException",
            http::StatusCode::INTERNAL_SERVER_ERROR,
            json!({"message": "new"}),
        );
        let err = LambdaError::from_response(raw);
        assert_eq!(err.code, LambdaErrorCode::Unknown);
        assert_eq!(err.error_type(), "BrandNewException");
        assert_eq!(err.to_string(), "LambdaError(BrandNewException): new");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_should_not_retry_client_errors() {
        let err = LambdaError::with_message(LambdaErrorCode::ResourceNotFoundException, "gone");
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
    }
}
