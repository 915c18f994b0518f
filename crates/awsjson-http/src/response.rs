//! Response unmarshalling and error-envelope parsing.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use awsjson_core::{ClientError, ClientResult, ErrorResponse, ServiceError};

use crate::error::SdkError;
use crate::operation::{JsonOperation, OperationError};

/// Header carrying the error type on some error responses.
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Header carrying the service-assigned request id.
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Body keys that may hold the error message, in lookup order.
const MESSAGE_KEYS: [&str; 3] = ["message", "Message", "errorMessage"];

/// Decode a successful response body into an output shape.
///
/// An empty body, `null`, or any other non-object document yields the
/// all-absent output.
pub fn unmarshall_response<T: DeserializeOwned + Default>(
    operation: &str,
    body: &[u8],
) -> ClientResult<T> {
    awsjson_json::from_slice(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ClientError::unmarshal(operation, e))
}

/// Parse a non-2xx response into the raw error envelope.
///
/// This never fails: a body that is not a JSON object leaves the field map
/// empty, and a response naming no error type is reported as `Unknown`.
#[must_use]
pub fn parse_error_response(
    status: http::StatusCode,
    headers: &http::HeaderMap,
    body: &[u8],
) -> ErrorResponse {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let error_type = header_str(headers, ERROR_TYPE_HEADER)
        .or_else(|| string_field(&fields, "__type"))
        .or_else(|| string_field(&fields, "code"))
        .unwrap_or_else(|| ErrorResponse::UNKNOWN_TYPE.to_owned());

    let message = MESSAGE_KEYS
        .iter()
        .find_map(|key| string_field(&fields, key))
        .or_else(|| status.canonical_reason().map(str::to_owned));

    let mut response = ErrorResponse::new(&error_type, status);
    response.message = message;
    response.request_id = header_str(headers, REQUEST_ID_HEADER);
    response.retry_after = header_str(headers, http::header::RETRY_AFTER.as_str());
    response.fields = fields;
    response
}

/// Turn a buffered response into an operation's output or typed error.
pub fn handle_response<O: JsonOperation>(
    response: http::Response<Bytes>,
) -> Result<O::Output, SdkError<OperationError<O>>> {
    let (parts, body) = response.into_parts();

    if parts.status.is_success() {
        tracing::debug!(
            operation = O::NAME,
            status = %parts.status,
            content_length = body.len(),
            "unmarshalling JSON response"
        );
        return unmarshall_response(O::NAME, &body).map_err(SdkError::Client);
    }

    let raw = parse_error_response(parts.status, &parts.headers, &body);
    tracing::warn!(
        operation = O::NAME,
        status = %raw.status_code,
        error_type = %raw.error_type,
        request_id = raw.request_id.as_deref().unwrap_or("-"),
        "service returned an error"
    );
    Err(SdkError::Service(
        <OperationError<O> as ServiceError>::from_response(raw),
    ))
}

fn header_str(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
