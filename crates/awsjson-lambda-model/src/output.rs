//! Lambda output types.

use std::collections::HashMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::types::FunctionConfiguration;

/// Output for the `Invoke` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    /// Set to `Unhandled` when the function raised an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_error: Option<String>,
    /// Base64-encoded tail of the execution log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_result: Option<String>,
    /// Response document returned by the function.
    #[serde(
        default,
        with = "awsjson_json::wire::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub payload: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_version: Option<String>,
}

/// Output for the `GetFunctionConfiguration` operation.
pub type GetFunctionConfigurationOutput = FunctionConfiguration;

/// Output for the `ListFunctions` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFunctionsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub functions: Option<Vec<FunctionConfiguration>>,
}

/// Output for the `ListTags` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<HashMap<String, String>>,
}
