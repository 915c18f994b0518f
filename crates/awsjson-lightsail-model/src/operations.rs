//! Lightsail operation enum.

use std::fmt;

use awsjson_core::ServiceMetadata;

/// Static metadata of the Lightsail service.
pub const LIGHTSAIL_SERVICE: ServiceMetadata = ServiceMetadata {
    service_name: "Amazon Lightsail",
    target_prefix: "Lightsail_20161128",
    endpoint_prefix: "lightsail",
    api_version: "2016-11-28",
};

/// All supported Lightsail operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightsailOperation {
    GetInstance,
    GetInstances,
    CreateInstancesFromSnapshot,
    CreateRelationalDatabase,
    GetRelationalDatabase,
    GetRelationalDatabaseMetricData,
    PutAlarm,
    GetAlarms,
    GetLoadBalancerTlsCertificates,
}

impl LightsailOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::GetInstance,
        Self::GetInstances,
        Self::CreateInstancesFromSnapshot,
        Self::CreateRelationalDatabase,
        Self::GetRelationalDatabase,
        Self::GetRelationalDatabaseMetricData,
        Self::PutAlarm,
        Self::GetAlarms,
        Self::GetLoadBalancerTlsCertificates,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetInstance => "GetInstance",
            Self::GetInstances => "GetInstances",
            Self::CreateInstancesFromSnapshot => "CreateInstancesFromSnapshot",
            Self::CreateRelationalDatabase => "CreateRelationalDatabase",
            Self::GetRelationalDatabase => "GetRelationalDatabase",
            Self::GetRelationalDatabaseMetricData => "GetRelationalDatabaseMetricData",
            Self::PutAlarm => "PutAlarm",
            Self::GetAlarms => "GetAlarms",
            Self::GetLoadBalancerTlsCertificates => "GetLoadBalancerTlsCertificates",
        }
    }

    /// Parse an operation name string into a `LightsailOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Returns `true` if the operation mutates account state.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::CreateInstancesFromSnapshot | Self::CreateRelationalDatabase | Self::PutAlarm
        )
    }
}

impl fmt::Display for LightsailOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
