//! Request marshalling.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use awsjson_core::{ClientError, ClientResult, ServiceMetadata};

use crate::operation::{JsonOperation, JsonService};

/// Content type of every request and response body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header naming the operation being invoked.
pub const TARGET_HEADER: &str = "x-amz-target";

/// Marshal an operation input into a transport-level request.
///
/// The request is a `POST` to the root path `/`; the absolute endpoint is
/// applied later by the client. An absent input is rejected before anything
/// is encoded.
pub fn marshall_request<T: Serialize + ?Sized>(
    service: &ServiceMetadata,
    operation: &str,
    input: Option<&T>,
) -> ClientResult<http::Request<Bytes>> {
    let input = input.ok_or_else(|| {
        ClientError::invalid_argument(format!(
            "invalid argument passed to marshall({operation}): input must not be absent"
        ))
    })?;

    let body = awsjson_json::to_vec(input).map_err(|e| ClientError::marshal(operation, e))?;
    let target = service.target(operation);

    tracing::debug!(
        target_header = %target,
        content_length = body.len(),
        "marshalled JSON request"
    );

    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .header(TARGET_HEADER, target)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header(http::header::CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))?;

    Ok(request)
}

/// Marshal the input of a typed operation.
pub fn marshall<O: JsonOperation>(input: Option<&O::Input>) -> ClientResult<http::Request<Bytes>> {
    marshall_request(&<O::Service as JsonService>::METADATA, O::NAME, input)
}

/// Marshal an operation input supplied as a JSON document.
///
/// The document is decoded into the typed input first, so unknown keys are
/// dropped and mistyped values are rejected before anything is encoded. An
/// absent or non-object document is an invalid argument.
pub fn marshall_json<O>(input: Option<&Value>) -> ClientResult<http::Request<Bytes>>
where
    O: JsonOperation,
    O::Input: DeserializeOwned,
{
    let Some(value) = input else {
        return marshall::<O>(None);
    };
    let typed = awsjson_json::from_value::<O::Input>(value.clone())
        .map_err(|e| ClientError::invalid_argument(format!("invalid {} input: {e}", O::NAME)))?
        .ok_or_else(|| {
            ClientError::invalid_argument(format!("{} input must be a JSON object", O::NAME))
        })?;
    marshall::<O>(Some(&typed))
}
