//! Lightsail output types.

use serde::{Deserialize, Serialize};

use crate::resources::{Alarm, Instance, LoadBalancerTlsCertificate, RelationalDatabase};
use crate::types::{MetricDatapoint, Operation, RelationalDatabaseMetricName};

/// Output for the `GetInstance` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub instance: Option<Instance>,
}

/// Output for the `GetInstances` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstancesOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub instances: Option<Vec<Instance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `CreateInstancesFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesFromSnapshotOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `CreateRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `GetRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub relational_database: Option<RelationalDatabase>,
}

/// Output for the `GetRelationalDatabaseMetricData` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseMetricDataOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<RelationalDatabaseMetricName>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub metric_data: Option<Vec<MetricDatapoint>>,
}

/// Output for the `PutAlarm` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAlarmOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub operations: Option<Vec<Operation>>,
}

/// Output for the `GetAlarms` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlarmsOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub alarms: Option<Vec<Alarm>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `GetLoadBalancerTlsCertificates` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLoadBalancerTlsCertificatesOutput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tls_certificates: Option<Vec<LoadBalancerTlsCertificate>>,
}
