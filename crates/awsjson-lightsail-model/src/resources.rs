//! Lightsail resource shapes.

use awsjson_json::Timestamp;
use serde::{Deserialize, Serialize};

use crate::types::{
    AccessDirection, AddOn, AlarmState, ComparisonOperator, ContactProtocol,
    LoadBalancerTlsCertificateDomainStatus, LoadBalancerTlsCertificateFailureReason,
    LoadBalancerTlsCertificateRenewalStatus, LoadBalancerTlsCertificateRevocationReason,
    LoadBalancerTlsCertificateStatus, MetricName, MetricStatistic, MetricUnit,
    MonitoredResourceInfo, NetworkProtocol, PortAccessType, ResourceLocation, ResourceType, Tag,
    TreatMissingData,
};

// ---------------------------------------------------------------------------
// Instance
// ---------------------------------------------------------------------------

/// A firewall rule of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstancePortInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<NetworkProtocol>,
    /// Where traffic may come from, e.g. `Anywhere (0.0.0.0/0)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<PortAccessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_direction: Option<AccessDirection>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub cidrs: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub cidr_list_aliases: Option<Vec<String>>,
}

/// A block storage disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_attached: Option<bool>,
}

/// CPU, memory and disks of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceHardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i32>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub disks: Option<Vec<Disk>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_size_in_gb: Option<f32>,
}

/// Monthly data transfer allowance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTransfer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_per_month_allocated: Option<i32>,
}

/// Networking settings of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceNetworking {
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_transfer: Option<MonthlyTransfer>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub ports: Option<Vec<InstancePortInfo>>,
}

/// Power state of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceState {
    /// Low byte of the EC2-style state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    /// `pending`, `running`, `stopping`, `stopped` and so on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A virtual private server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub add_ons: Option<Vec<AddOn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_static_ip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_address: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub ipv6_addresses: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub hardware: Option<InstanceHardware>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub networking: Option<InstanceNetworking>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<InstanceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Alarm
// ---------------------------------------------------------------------------

/// A metric alarm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub monitored_resource_info: Option<MonitoredResourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<i32>,
    /// Period in seconds over which the statistic is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datapoints_to_alarm: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_missing_data: Option<TreatMissingData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<MetricStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<MetricName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AlarmState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MetricUnit>,
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

// ---------------------------------------------------------------------------
// Relational database
// ---------------------------------------------------------------------------

/// Compute and storage of a database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalDatabaseHardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_size_in_gb: Option<f32>,
}

/// Connection endpoint of a database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalDatabaseEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Settings waiting to be applied to a database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingModifiedRelationalDatabaseValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_enabled: Option<bool>,
}

/// Maintenance scheduled for a database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingMaintenanceAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_apply_date: Option<Timestamp>,
}

/// A managed database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationalDatabase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_blueprint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relational_database_bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_database_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub hardware: Option<RelationalDatabaseHardware>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_enabled: Option<bool>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub pending_modified_values: Option<PendingModifiedRelationalDatabaseValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_apply_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub master_endpoint: Option<RelationalDatabaseEndpoint>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub pending_maintenance_actions: Option<Vec<PendingMaintenanceAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_certificate_identifier: Option<String>,
}

// ---------------------------------------------------------------------------
// Load balancer TLS certificate
// ---------------------------------------------------------------------------

/// DNS record proving control of a certificate domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificateDomainValidationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_status: Option<LoadBalancerTlsCertificateDomainStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

/// Validation state of one domain during renewal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificateDomainValidationOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_status: Option<LoadBalancerTlsCertificateDomainStatus>,
}

/// Progress of a managed renewal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificateRenewalSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_status: Option<LoadBalancerTlsCertificateRenewalStatus>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain_validation_options: Option<Vec<LoadBalancerTlsCertificateDomainValidationOption>>,
}

/// A TLS certificate attached to a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerTlsCertificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<ResourceLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_attached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LoadBalancerTlsCertificateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain_validation_records: Option<Vec<LoadBalancerTlsCertificateDomainValidationRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<LoadBalancerTlsCertificateFailureReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::nested::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub renewal_summary: Option<LoadBalancerTlsCertificateRenewalSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_reason: Option<LoadBalancerTlsCertificateRevocationReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(
        default,
        deserialize_with = "awsjson_json::wire::list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject_alternative_names: Option<Vec<String>>,
}

impl LoadBalancerTlsCertificate {
    /// Returns `true` once the certificate has been issued and not revoked or expired.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.status == Some(LoadBalancerTlsCertificateStatus::Issued)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn instance_json() -> serde_json::Value {
        json!({
            "name": "web-1",
            "arn": "arn:aws:lightsail:us-east-1:123456789012:Instance/abc",
            "createdAt": 1570000000.5,
            "location": {"availabilityZone": "us-east-1a", "regionName": "us-east-1"},
            "resourceType": "Instance",
            "blueprintId": "ubuntu_22_04",
            "bundleId": "nano_3_0",
            "isStaticIp": false,
            "hardware": {
                "cpuCount": 2,
                "ramSizeInGb": 0.5,
                "disks": [
                    {"name": "root", "sizeInGb": 20, "isSystemDisk": true, "path": "/dev/xvda"}
                ]
            },
            "networking": {
                "monthlyTransfer": {"gbPerMonthAllocated": 1024},
                "ports": [
                    {"fromPort": 22, "toPort": 22, "protocol": "tcp", "accessType": "Public",
                     "accessDirection": "inbound", "cidrs": ["0.0.0.0/0"], "cidrListAliases": []}
                ]
            },
            "state": {"code": 16, "name": "running"},
            "username": "ubuntu",
            "sshKeyName": "default",
            "ipAddressType": "dualstack"
        })
    }

    #[test]
    fn test_should_decode_instance_with_nested_shapes() {
        let instance: Instance = serde_json::from_value(instance_json()).unwrap();

        assert_eq!(instance.name.as_deref(), Some("web-1"));
        assert_eq!(
            instance.created_at,
            Timestamp::from_millis(1_570_000_000_500)
        );
        let hardware = instance.hardware.as_ref().unwrap();
        assert_eq!(hardware.cpu_count, Some(2));
        assert_eq!(hardware.ram_size_in_gb, Some(0.5));
        assert_eq!(
            hardware.disks.as_ref().unwrap()[0].is_system_disk,
            Some(true)
        );

        let networking = instance.networking.as_ref().unwrap();
        assert_eq!(
            networking.monthly_transfer.as_ref().unwrap().gb_per_month_allocated,
            Some(1024)
        );
        let port = &networking.ports.as_ref().unwrap()[0];
        assert_eq!(port.protocol, Some(NetworkProtocol::Tcp));
        assert_eq!(port.access_direction, Some(AccessDirection::Inbound));
        assert_eq!(port.cidr_list_aliases, Some(Vec::new()));

        assert_eq!(
            instance.state,
            Some(InstanceState {
                code: Some(16),
                name: Some("running".to_owned()),
            })
        );
    }

    #[test]
    fn test_should_round_trip_instance() {
        let instance: Instance = serde_json::from_value(instance_json()).unwrap();
        let encoded = awsjson_json::to_vec(&instance).unwrap();
        let decoded: Instance = awsjson_json::from_slice(&encoded).unwrap().unwrap();
        assert_eq!(decoded, instance);
    }

    #[test]
    fn test_should_treat_scalar_nested_state_as_absent() {
        let instance: Instance =
            serde_json::from_value(json!({"name": "web-1", "state": "running", "hardware": 3}))
                .unwrap();
        assert!(instance.state.is_none());
        assert!(instance.hardware.is_none());
    }

    #[test]
    fn test_should_skip_null_list_elements() {
        let instance: Instance = awsjson_json::from_slice(
            br#"{"name":"web-1","tags":[null,{"key":"a"}],"ipv6Addresses":[null,"::1"]}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            instance.tags,
            Some(vec![Tag {
                key: Some("a".to_owned()),
                value: None,
            }])
        );
        assert_eq!(instance.ipv6_addresses, Some(vec!["::1".to_owned()]));
    }

    #[test]
    fn test_should_decode_alarm() {
        let alarm: Alarm = serde_json::from_value(json!({
            "name": "cpu-high",
            "monitoredResourceInfo": {"name": "web-1", "resourceType": "Instance"},
            "comparisonOperator": "GreaterThanOrEqualToThreshold",
            "evaluationPeriods": 2,
            "period": 300,
            "threshold": 80.0,
            "treatMissingData": "notBreaching",
            "statistic": "Average",
            "metricName": "CPUUtilization",
            "state": "INSUFFICIENT_DATA",
            "unit": "Percent",
            "contactProtocols": ["Email"],
            "notificationTriggers": ["ALARM", "OK"],
            "notificationEnabled": true
        }))
        .unwrap();

        assert_eq!(alarm.metric_name, Some(MetricName::CPUUtilization));
        assert_eq!(alarm.state, Some(AlarmState::InsufficientData));
        assert_eq!(
            alarm.treat_missing_data,
            Some(TreatMissingData::NotBreaching)
        );
        assert_eq!(
            alarm.notification_triggers,
            Some(vec![AlarmState::Alarm, AlarmState::Ok])
        );
        assert_eq!(
            alarm.monitored_resource_info.unwrap().resource_type,
            Some(ResourceType::Instance)
        );
    }

    #[test]
    fn test_should_decode_relational_database() {
        let db: RelationalDatabase = serde_json::from_value(json!({
            "name": "db-1",
            "engine": "mysql",
            "hardware": {"cpuCount": 1, "diskSizeInGb": 40, "ramSizeInGb": 1.0},
            "masterEndpoint": {"port": 3306, "address": "db-1.example.com"},
            "pendingMaintenanceActions": [
                {"action": "system-update", "currentApplyDate": 1570000000}
            ],
            "latestRestorableTime": 1570000000,
            "publiclyAccessible": false
        }))
        .unwrap();

        assert_eq!(db.master_endpoint.unwrap().port, Some(3306));
        assert_eq!(db.hardware.unwrap().disk_size_in_gb, Some(40));
        let action = &db.pending_maintenance_actions.unwrap()[0];
        assert_eq!(
            action.current_apply_date,
            Timestamp::from_secs(1_570_000_000)
        );
    }

    #[test]
    fn test_should_decode_certificate() {
        let cert: LoadBalancerTlsCertificate = serde_json::from_value(json!({
            "name": "cert-1",
            "status": "ISSUED",
            "domainName": "example.com",
            "domainValidationRecords": [
                {
                    "name": "_x.example.com",
                    "type": "CNAME",
                    "value": "_y.acm",
                    "validationStatus": "SUCCESS"
                }
            ],
            "renewalSummary": {"renewalStatus": "PENDING_AUTO_RENEWAL"},
            "revocationReason": "SUPERCEDED",
            "notAfter": 1600000000
        }))
        .unwrap();

        assert!(cert.is_usable());
        let record = &cert.domain_validation_records.as_ref().unwrap()[0];
        assert_eq!(record.r#type.as_deref(), Some("CNAME"));
        assert_eq!(
            record.validation_status,
            Some(LoadBalancerTlsCertificateDomainStatus::Success)
        );
        assert_eq!(
            cert.revocation_reason,
            Some(LoadBalancerTlsCertificateRevocationReason::Superceded)
        );
        assert_eq!(
            cert.renewal_summary.unwrap().renewal_status,
            Some(LoadBalancerTlsCertificateRenewalStatus::PendingAutoRenewal)
        );
    }
}
