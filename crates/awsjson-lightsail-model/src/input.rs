//! Lightsail input types.

use std::collections::HashMap;

use awsjson_json::Timestamp;
use serde::{Deserialize, Serialize};

use crate::types::{
    AddOnRequest, AlarmState, ComparisonOperator, ContactProtocol, DiskMap, MetricName,
    MetricStatistic, MetricUnit, RelationalDatabaseMetricName, Tag, TreatMissingData,
};

/// Input for the `GetInstance` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstanceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
}

/// Input for the `GetInstances` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInstancesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `CreateInstancesFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancesFromSnapshotInput {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub instance_names: Option<Vec<String>>,
    /// Disk mappings keyed by source disk name.
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list_map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub attached_disk_mapping: Option<HashMap<String, Vec<DiskMap>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_snapshot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    /// Launch script run on first boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<Tag>>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub add_ons: Option<Vec<AddOnRequest>>,
    /// Restore from an automatic snapshot of this instance instead of a
    /// named snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_instance_name: Option<String>,
    /// Date of the automatic snapshot to restore, as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_auto_snapshot: Option<bool>,
}

/// Input for the `CreateRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelationalDatabaseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_blueprint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    /// Daily backup window in UTC, `hh24:mi-hh24:mi`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    /// Weekly maintenance window in UTC, `ddd:hh24:mi-ddd:hh24:mi`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<Tag>>,
}

/// Input for the `GetRelationalDatabase` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_name: Option<String>,
}

/// Input for the `GetRelationalDatabaseMetricData` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRelationalDatabaseMetricDataInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<RelationalDatabaseMetricName>,
    /// Granularity in seconds; a multiple of 60.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub statistics: Option<Vec<MetricStatistic>>,
}

/// Input for the `PutAlarm` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutAlarmInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<MetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datapoints_to_alarm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_data: Option<TreatMissingData>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_protocols: Option<Vec<ContactProtocol>>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_triggers: Option<Vec<AlarmState>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_enabled: Option<bool>,
}

/// Input for the `GetAlarms` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlarmsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_resource_name: Option<String>,
}

/// Input for the `GetLoadBalancerTlsCertificates` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLoadBalancerTlsCertificatesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
}
