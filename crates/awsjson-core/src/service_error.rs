//! Raw service error envelope and the trait typed service errors implement.

use serde_json::{Map, Value};

/// A service error response, decoded just far enough to dispatch on its type.
///
/// The error type identifier is already normalized: namespace prefixes
/// (`com.amazonaws.lambda#`) and header suffixes (`:http://...`) are
/// stripped, leaving the bare code such as `ResourceNotFoundException`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Normalized error type identifier.
    pub error_type: String,
    /// Human-readable message, if the service sent one.
    pub message: Option<String>,
    /// HTTP status of the response.
    pub status_code: http::StatusCode,
    /// Value of the `x-amzn-requestid` header.
    pub request_id: Option<String>,
    /// Value of the `Retry-After` header.
    pub retry_after: Option<String>,
    /// Every top-level field of the JSON error body.
    pub fields: Map<String, Value>,
}

impl ErrorResponse {
    /// Error type used when the response identifies none.
    pub const UNKNOWN_TYPE: &str = "Unknown";

    /// Create an error response with no body fields.
    #[must_use]
    pub fn new(error_type: &str, status_code: http::StatusCode) -> Self {
        Self {
            error_type: normalize_error_type(error_type).to_owned(),
            message: None,
            status_code,
            request_id: None,
            retry_after: None,
            fields: Map::new(),
        }
    }

    /// Set the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Look up a body field by name, ignoring ASCII case.
    ///
    /// Strings are returned as-is; numbers and booleans are rendered in their
    /// JSON spelling. Objects, arrays and `null` yield `None`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        let value = self.fields.get(name).or_else(|| {
            self.fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })?;
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns the message, or the error type when the service sent none.
    #[must_use]
    pub fn message_or_type(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.error_type)
    }
}

/// Strip namespace and URI decorations from an error type identifier.
#[must_use]
pub fn normalize_error_type(raw: &str) -> &str {
    let raw = raw.trim();
    let raw = raw.split(':').next().unwrap_or(raw);
    let raw = raw.rsplit('#').next().unwrap_or(raw);
    if raw.is_empty() {
        ErrorResponse::UNKNOWN_TYPE
    } else {
        raw
    }
}

/// A typed error decoded from a service error response.
///
/// Implementations dispatch on [`ErrorResponse::error_type`] and must fall
/// back to a catch-all kind for types they do not recognize; decoding an
/// error response never fails.
pub trait ServiceError: std::error::Error + Send + Sync + Sized + 'static {
    /// Build the typed error from a raw error response.
    fn from_response(response: ErrorResponse) -> Self;

    /// The raw error type identifier as sent by the service.
    fn error_type(&self) -> &str;

    /// Whether the error is conventionally safe to retry.
    ///
    /// Retrying is the caller's policy; this is a hint only.
    fn is_retryable(&self) -> bool;
}
