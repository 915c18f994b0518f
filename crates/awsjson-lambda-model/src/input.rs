//! Lambda input types.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::types::{FunctionVersion, InvocationType, LogType};

/// Input for the `Invoke` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeInput {
    /// Name, ARN or partial ARN of the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_type: Option<InvocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_type: Option<LogType>,
    /// Base64-encoded client context passed to the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_context: Option<String>,
    /// Event document passed to the function.
    #[serde(
        default,
        with = "awsjson_json::wire::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub payload: Option<Bytes>,
    /// Version or alias to invoke.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

/// Input for the `GetFunctionConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFunctionConfigurationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

/// Input for the `ListFunctions` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFunctionsInput {
    /// For Lambda@Edge, the region of the master function, or `ALL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_version: Option<FunctionVersion>,
    /// Pagination token from a previous `nextMarker`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i32>,
}

/// Input for the `ListTags` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsInput {
    /// ARN of the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_invoke_input_in_declared_order() {
        let input = InvokeInput {
            function_name: Some("my-function".to_owned()),
            invocation_type: Some(InvocationType::Event),
            payload: Some(Bytes::from_static(br#"{"k":1}"#)),
            ..InvokeInput::default()
        };
        assert_eq!(
            String::from_utf8(awsjson_json::to_vec(&input).unwrap()).unwrap(),
            r#"{"functionName":"my-function","invocationType":"Event","payload":"eyJrIjoxfQ=="}"#
        );
    }

    #[test]
    fn test_should_round_trip_fully_populated_invoke_input() {
        let input = InvokeInput {
            function_name: Some("arn:aws:lambda:us-east-1:123456789012:function:f".to_owned()),
            invocation_type: Some(InvocationType::RequestResponse),
            log_type: Some(LogType::Tail),
            client_context: Some("e30=".to_owned()),
            payload: Some(Bytes::from_static(b"\x00\xffbinary")),
            qualifier: Some("live".to_owned()),
        };
        let encoded = awsjson_json::to_vec(&input).unwrap();
        let decoded: InvokeInput = awsjson_json::from_slice(&encoded).unwrap().unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_should_serialize_empty_input_as_empty_object() {
        assert_eq!(
            awsjson_json::to_vec(&ListFunctionsInput::default()).unwrap(),
            b"{}"
        );
    }

    #[test]
    fn test_should_serialize_list_functions_paging() {
        let input = ListFunctionsInput {
            function_version: Some(FunctionVersion::All),
            marker: Some("token".to_owned()),
            max_items: Some(50),
            ..ListFunctionsInput::default()
        };
        assert_eq!(
            String::from_utf8(awsjson_json::to_vec(&input).unwrap()).unwrap(),
            r#"{"functionVersion":"ALL","marker":"token","maxItems":50}"#
        );
    }
}
