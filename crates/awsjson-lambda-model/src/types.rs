//! Lambda shared types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

awsjson_json::wire_enum! {
    /// How an invocation is performed.
    pub enum InvocationType {
        /// Wait for the function and return its response.
        RequestResponse => "RequestResponse",
        /// Queue the event and return immediately.
        Event => "Event",
        /// Validate parameters and permissions without running the function.
        DryRun => "DryRun",
    }
}

awsjson_json::wire_enum! {
    /// Whether to return the tail of the execution log.
    pub enum LogType {
        None => "None",
        Tail => "Tail",
    }
}

awsjson_json::wire_enum! {
    /// Function runtime identifier.
    pub enum Runtime {
        Nodejs12x => "nodejs12.x",
        Nodejs14x => "nodejs14.x",
        Nodejs16x => "nodejs16.x",
        Nodejs18x => "nodejs18.x",
        Nodejs20x => "nodejs20.x",
        Python38 => "python3.8",
        Python39 => "python3.9",
        Python310 => "python3.10",
        Python311 => "python3.11",
        Python312 => "python3.12",
        Java8 => "java8",
        Java8Al2 => "java8.al2",
        Java11 => "java11",
        Java17 => "java17",
        Java21 => "java21",
        Dotnet6 => "dotnet6",
        Dotnet8 => "dotnet8",
        Ruby32 => "ruby3.2",
        Go1x => "go1.x",
        Provided => "provided",
        ProvidedAl2 => "provided.al2",
        ProvidedAl2023 => "provided.al2023",
    }
}

awsjson_json::wire_enum! {
    /// Lifecycle state of a function.
    pub enum State {
        Pending => "Pending",
        Active => "Active",
        Inactive => "Inactive",
        Failed => "Failed",
    }
}

awsjson_json::wire_enum! {
    /// Status of the last update performed on a function.
    pub enum LastUpdateStatus {
        Successful => "Successful",
        Failed => "Failed",
        InProgress => "InProgress",
    }
}

awsjson_json::wire_enum! {
    /// X-Ray tracing mode.
    pub enum TracingMode {
        Active => "Active",
        PassThrough => "PassThrough",
    }
}

awsjson_json::wire_enum! {
    /// Deployment package type.
    pub enum PackageType {
        Zip => "Zip",
        Image => "Image",
    }
}

awsjson_json::wire_enum! {
    /// Instruction set architecture.
    pub enum Architecture {
        X8664 => "x86_64",
        Arm64 => "arm64",
    }
}

awsjson_json::wire_enum! {
    /// Which versions `ListFunctions` returns.
    pub enum FunctionVersion {
        /// Every published version in addition to `$LATEST`.
        All => "ALL",
    }
}

awsjson_json::wire_enum! {
    /// Why a request was throttled.
    pub enum ThrottleReason {
        ConcurrentInvocationLimitExceeded => "ConcurrentInvocationLimitExceeded",
        FunctionInvocationRateLimitExceeded => "FunctionInvocationRateLimitExceeded",
        ReservedFunctionConcurrentInvocationLimitExceeded =>
            "ReservedFunctionConcurrentInvocationLimitExceeded",
        ReservedFunctionInvocationRateLimitExceeded =>
            "ReservedFunctionInvocationRateLimitExceeded",
        CallerRateLimitExceeded => "CallerRateLimitExceeded",
    }
}

/// VPC settings of a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcConfigResponse {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// Error applying environment variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Environment variables of a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentResponse {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub variables: Option<HashMap<String, String>>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<EnvironmentError>,
}

/// Tracing settings of a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracingConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TracingMode>,
}

/// Dead-letter queue target of a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadLetterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
}

/// A layer attached to a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_size: Option<i64>,
}

/// Version-specific settings of a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    /// Memory in MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<i32>,
    /// ISO 8601 string, as the service sends it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub vpc_config: Option<VpcConfigResponse>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub dead_letter_config: Option<DeadLetterConfig>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub environment: Option<EnvironmentResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracing_config: Option<TracingConfigResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub layers: Option<Vec<Layer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_status: Option<LastUpdateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub architectures: Option<Vec<Architecture>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_decode_function_configuration() {
        let config: FunctionConfiguration = serde_json::from_value(json!({
            "functionName": "my-function",
            "runtime": "python3.12",
            "memorySize": 128,
            "environment": {"variables": {"STAGE": "prod"}},
            "tracingConfig": {"mode": "PassThrough"},
            "architectures": ["arm64"],
            "snapStart": {"applyOn": "None"}
        }))
        .unwrap();

        assert_eq!(config.function_name.as_deref(), Some("my-function"));
        assert_eq!(config.runtime, Some(Runtime::Python312));
        assert_eq!(config.memory_size, Some(128));
        let vars = config.environment.unwrap().variables.unwrap();
        assert_eq!(vars["STAGE"], "prod");
        assert_eq!(
            config.tracing_config.unwrap().mode,
            Some(TracingMode::PassThrough)
        );
        assert_eq!(config.architectures, Some(vec![Architecture::Arm64]));
    }

    #[test]
    fn test_should_keep_unrecognized_runtime() {
        let config: FunctionConfiguration =
            serde_json::from_value(json!({"runtime": "python4.0"})).unwrap();
        let runtime = config.runtime.unwrap();
        assert!(runtime.is_unknown());
        assert_eq!(runtime.as_str(), "python4.0");
    }

    #[test]
    fn test_should_treat_non_object_nested_value_as_absent() {
        let config: FunctionConfiguration =
            serde_json::from_value(json!({"vpcConfig": "none", "environment": null})).unwrap();
        assert!(config.vpc_config.is_none());
        assert!(config.environment.is_none());
    }

    #[test]
    fn test_should_emit_empty_environment_map() {
        let env = EnvironmentResponse {
            variables: Some(HashMap::new()),
            error: None,
        };
        assert_eq!(serde_json::to_string(&env).unwrap(), r#"{"variables":{}}"#);
    }
}
