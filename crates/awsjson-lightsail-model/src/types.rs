//! Lightsail shared types and closed value sets.

use awsjson_json::Timestamp;
use serde::{Deserialize, Serialize};

awsjson_json::wire_enum! {
    /// Kind of a Lightsail resource.
    pub enum ResourceType {
        Instance => "Instance",
        StaticIp => "StaticIp",
        KeyPair => "KeyPair",
        InstanceSnapshot => "InstanceSnapshot",
        Domain => "Domain",
        PeeredVpc => "PeeredVpc",
        LoadBalancer => "LoadBalancer",
        LoadBalancerTlsCertificate => "LoadBalancerTlsCertificate",
        Disk => "Disk",
        DiskSnapshot => "DiskSnapshot",
        RelationalDatabase => "RelationalDatabase",
        RelationalDatabaseSnapshot => "RelationalDatabaseSnapshot",
        ExportSnapshotRecord => "ExportSnapshotRecord",
        CloudFormationStackRecord => "CloudFormationStackRecord",
        Alarm => "Alarm",
        ContactMethod => "ContactMethod",
    }
}

awsjson_json::wire_enum! {
    /// Metric an alarm watches.
    pub enum MetricName {
        CPUUtilization => "CPUUtilization",
        NetworkIn => "NetworkIn",
        NetworkOut => "NetworkOut",
        StatusCheckFailed => "StatusCheckFailed",
        StatusCheckFailedInstance => "StatusCheckFailed_Instance",
        StatusCheckFailedSystem => "StatusCheckFailed_System",
        ClientTLSNegotiationErrorCount => "ClientTLSNegotiationErrorCount",
        HealthyHostCount => "HealthyHostCount",
        UnhealthyHostCount => "UnhealthyHostCount",
        HTTPCodeLB4XXCount => "HTTPCode_LB_4XX_Count",
        HTTPCodeLB5XXCount => "HTTPCode_LB_5XX_Count",
        HTTPCodeInstance2XXCount => "HTTPCode_Instance_2XX_Count",
        HTTPCodeInstance3XXCount => "HTTPCode_Instance_3XX_Count",
        HTTPCodeInstance4XXCount => "HTTPCode_Instance_4XX_Count",
        HTTPCodeInstance5XXCount => "HTTPCode_Instance_5XX_Count",
        InstanceResponseTime => "InstanceResponseTime",
        RejectedConnectionCount => "RejectedConnectionCount",
        RequestCount => "RequestCount",
        DatabaseConnections => "DatabaseConnections",
        DiskQueueDepth => "DiskQueueDepth",
        FreeStorageSpace => "FreeStorageSpace",
        NetworkReceiveThroughput => "NetworkReceiveThroughput",
        NetworkTransmitThroughput => "NetworkTransmitThroughput",
        BurstCapacityTime => "BurstCapacityTime",
        BurstCapacityPercentage => "BurstCapacityPercentage",
    }
}

awsjson_json::wire_enum! {
    /// Metrics available for relational databases.
    pub enum RelationalDatabaseMetricName {
        CPUUtilization => "CPUUtilization",
        DatabaseConnections => "DatabaseConnections",
        DiskQueueDepth => "DiskQueueDepth",
        FreeStorageSpace => "FreeStorageSpace",
        NetworkReceiveThroughput => "NetworkReceiveThroughput",
        NetworkTransmitThroughput => "NetworkTransmitThroughput",
    }
}

awsjson_json::wire_enum! {
    /// How an alarm compares a statistic to its threshold.
    pub enum ComparisonOperator {
        GreaterThanOrEqualToThreshold => "GreaterThanOrEqualToThreshold",
        GreaterThanThreshold => "GreaterThanThreshold",
        LessThanThreshold => "LessThanThreshold",
        LessThanOrEqualToThreshold => "LessThanOrEqualToThreshold",
    }
}

awsjson_json::wire_enum! {
    /// Aggregation applied to metric data points.
    pub enum MetricStatistic {
        Minimum => "Minimum",
        Maximum => "Maximum",
        Sum => "Sum",
        Average => "Average",
        SampleCount => "SampleCount",
    }
}

awsjson_json::wire_enum! {
    /// State of an alarm.
    pub enum AlarmState {
        Ok => "OK",
        Alarm => "ALARM",
        InsufficientData => "INSUFFICIENT_DATA",
    }
}

awsjson_json::wire_enum! {
    /// How an alarm treats missing data points.
    pub enum TreatMissingData {
        Breaching => "breaching",
        NotBreaching => "notBreaching",
        Ignore => "ignore",
        Missing => "missing",
    }
}

awsjson_json::wire_enum! {
    /// Channel an alarm notifies through.
    pub enum ContactProtocol {
        Email => "Email",
        Sms => "SMS",
    }
}

awsjson_json::wire_enum! {
    /// Unit of a metric.
    pub enum MetricUnit {
        Seconds => "Seconds",
        Microseconds => "Microseconds",
        Milliseconds => "Milliseconds",
        Bytes => "Bytes",
        Kilobytes => "Kilobytes",
        Megabytes => "Megabytes",
        Gigabytes => "Gigabytes",
        Terabytes => "Terabytes",
        Bits => "Bits",
        Kilobits => "Kilobits",
        Megabits => "Megabits",
        Gigabits => "Gigabits",
        Terabits => "Terabits",
        Percent => "Percent",
        Count => "Count",
        BytesSecond => "Bytes/Second",
        KilobytesSecond => "Kilobytes/Second",
        MegabytesSecond => "Megabytes/Second",
        GigabytesSecond => "Gigabytes/Second",
        TerabytesSecond => "Terabytes/Second",
        BitsSecond => "Bits/Second",
        KilobitsSecond => "Kilobits/Second",
        MegabitsSecond => "Megabits/Second",
        GigabitsSecond => "Gigabits/Second",
        TerabitsSecond => "Terabits/Second",
        CountSecond => "Count/Second",
        None => "None",
    }
}

awsjson_json::wire_enum! {
    /// IP protocol of a firewall rule.
    pub enum NetworkProtocol {
        Tcp => "tcp",
        All => "all",
        Udp => "udp",
        Icmp => "icmp",
    }
}

awsjson_json::wire_enum! {
    /// Whether a port is reachable from the internet.
    pub enum PortAccessType {
        Public => "Public",
        Private => "Private",
    }
}

awsjson_json::wire_enum! {
    /// Direction of traffic a firewall rule applies to.
    pub enum AccessDirection {
        Inbound => "inbound",
        Outbound => "outbound",
    }
}

awsjson_json::wire_enum! {
    /// Add-on kind.
    pub enum AddOnType {
        AutoSnapshot => "AutoSnapshot",
        StopInstanceOnIdle => "StopInstanceOnIdle",
    }
}

awsjson_json::wire_enum! {
    /// Kind of an asynchronous operation record.
    pub enum OperationType {
        CreateInstancesFromSnapshot => "CreateInstancesFromSnapshot",
        CreateRelationalDatabase => "CreateRelationalDatabase",
        PutAlarm => "PutAlarm",
        StartInstance => "StartInstance",
        StopInstance => "StopInstance",
        RebootInstance => "RebootInstance",
        DeleteInstance => "DeleteInstance",
    }
}

awsjson_json::wire_enum! {
    /// Progress of an asynchronous operation.
    pub enum OperationStatus {
        NotStarted => "NotStarted",
        Started => "Started",
        Failed => "Failed",
        Completed => "Completed",
        Succeeded => "Succeeded",
    }
}

awsjson_json::wire_enum! {
    /// Validation state of one certificate domain.
    pub enum LoadBalancerTlsCertificateDomainStatus {
        PendingValidation => "PENDING_VALIDATION",
        Failed => "FAILED",
        Success => "SUCCESS",
    }
}

awsjson_json::wire_enum! {
    /// Why a certificate request failed.
    pub enum LoadBalancerTlsCertificateFailureReason {
        NoAvailableContacts => "NO_AVAILABLE_CONTACTS",
        AdditionalVerificationRequired => "ADDITIONAL_VERIFICATION_REQUIRED",
        DomainNotAllowed => "DOMAIN_NOT_ALLOWED",
        InvalidPublicDomain => "INVALID_PUBLIC_DOMAIN",
        Other => "OTHER",
    }
}

awsjson_json::wire_enum! {
    /// Lifecycle status of a certificate.
    pub enum LoadBalancerTlsCertificateStatus {
        PendingValidation => "PENDING_VALIDATION",
        Issued => "ISSUED",
        Inactive => "INACTIVE",
        Expired => "EXPIRED",
        ValidationTimedOut => "VALIDATION_TIMED_OUT",
        Revoked => "REVOKED",
        Failed => "FAILED",
        UnknownStatus => "UNKNOWN",
    }
}

awsjson_json::wire_enum! {
    /// Status of a managed certificate renewal.
    pub enum LoadBalancerTlsCertificateRenewalStatus {
        PendingAutoRenewal => "PENDING_AUTO_RENEWAL",
        PendingValidation => "PENDING_VALIDATION",
        Success => "SUCCESS",
        Failed => "FAILED",
    }
}

awsjson_json::wire_enum! {
    /// Why a certificate was revoked.
    pub enum LoadBalancerTlsCertificateRevocationReason {
        Unspecified => "UNSPECIFIED",
        KeyCompromise => "KEY_COMPROMISE",
        CaCompromise => "CA_COMPROMISE",
        AffiliationChanged => "AFFILIATION_CHANGED",
        Superceded => "SUPERCEDED",
        CessationOfOperation => "CESSATION_OF_OPERATION",
        CertificateHold => "CERTIFICATE_HOLD",
        RemoveFromCrl => "REMOVE_FROM_CRL",
        PrivilegeWithdrawn => "PRIVILEGE_WITHDRAWN",
        AACompromise => "A_A_COMPROMISE",
    }
}

/// A key-value tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Region and availability zone of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

/// Maps an original disk path to a new disk when restoring from a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_disk_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_disk_name: Option<String>,
}

/// Automatic snapshot settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSnapshotAddOnRequest {
    /// UTC hour range, e.g. `06:00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_time_of_day: Option<String>,
}

/// An add-on to enable on a new resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_on_type: Option<AddOnType>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_snapshot_add_on_request: Option<AutoSnapshotAddOnRequest>,
}

/// An add-on enabled on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_snapshot_time_of_day: Option<String>,
}

/// Resource an alarm watches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredResourceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
}

/// One aggregated metric data point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDatapoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,
}

/// Record of an asynchronous operation started by a mutating call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_terminal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OperationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_changed_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_use_exact_wire_spellings() {
        assert_eq!(
            MetricName::StatusCheckFailedInstance.as_str(),
            "StatusCheckFailed_Instance"
        );
        assert_eq!(
            MetricName::HTTPCodeLB4XXCount.as_str(),
            "HTTPCode_LB_4XX_Count"
        );
        assert_eq!(AlarmState::InsufficientData.as_str(), "INSUFFICIENT_DATA");
        assert_eq!(TreatMissingData::NotBreaching.as_str(), "notBreaching");
        assert_eq!(MetricUnit::BytesSecond.as_str(), "Bytes/Second");
        assert_eq!(
            LoadBalancerTlsCertificateStatus::from_wire("UNKNOWN"),
            LoadBalancerTlsCertificateStatus::UnknownStatus
        );
    }

    #[test]
    fn test_should_decode_operation_record() {
        let op: Operation = serde_json::from_value(json!({
            "id": "op-1",
            "resourceName": "db-1",
            "resourceType": "RelationalDatabase",
            "createdAt": 1570000000,
            "location": {"availabilityZone": "us-east-1a", "regionName": "us-east-1"},
            "isTerminal": false,
            "operationType": "CreateRelationalDatabase",
            "status": "Started"
        }))
        .unwrap();

        assert_eq!(op.resource_type, Some(ResourceType::RelationalDatabase));
        assert_eq!(op.created_at, Timestamp::from_secs(1_570_000_000));
        assert_eq!(
            op.location.unwrap().region_name.as_deref(),
            Some("us-east-1")
        );
        assert_eq!(op.status, Some(OperationStatus::Started));
        assert_eq!(op.is_terminal, Some(false));
    }

    #[test]
    fn test_should_round_trip_metric_datapoint() {
        let point = MetricDatapoint {
            average: Some(12.5),
            timestamp: Timestamp::from_secs(1_570_000_060),
            unit: Some(MetricUnit::Percent),
            ..MetricDatapoint::default()
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(
            value,
            json!({"average": 12.5, "timestamp": 1570000060, "unit": "Percent"})
        );
        let back: MetricDatapoint = serde_json::from_value(value).unwrap();
        assert_eq!(back, point);
    }
}
