//! Marshal an operation chosen by name at runtime.

use bytes::Bytes;
use serde_json::Value;

use awsjson_core::{ClientError, ClientResult};
use awsjson_http::marshall_json;
use awsjson_lambda_model::LambdaOperation;

use crate::operations::{GetFunctionConfiguration, Invoke, ListFunctions, ListTags};

/// Marshal a Lambda request from an operation name and a JSON input document.
pub fn marshall_by_name(
    operation: &str,
    input: Option<&Value>,
) -> ClientResult<http::Request<Bytes>> {
    let op = LambdaOperation::from_name(operation).ok_or_else(|| {
        ClientError::invalid_argument(format!("unknown Lambda operation: {operation}"))
    })?;
    tracing::debug!(operation = %op, "marshalling Lambda operation by name");

    match op {
        LambdaOperation::Invoke => marshall_json::<Invoke>(input),
        LambdaOperation::GetFunctionConfiguration => {
            marshall_json::<GetFunctionConfiguration>(input)
        }
        LambdaOperation::ListFunctions => marshall_json::<ListFunctions>(input),
        LambdaOperation::ListTags => marshall_json::<ListTags>(input),
    }
}
