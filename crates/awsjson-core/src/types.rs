//! Common AWS type definitions shared across services.

use std::fmt;

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region used when nothing else is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DNS suffix of the partition this region belongs to.
    #[must_use]
    pub fn dns_suffix(&self) -> &'static str {
        if self.0.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static description of an AWS JSON 1.1 service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Human-readable service name.
    pub service_name: &'static str,
    /// Prefix of the `X-Amz-Target` header, `<ServiceId>_<ApiVersion>`.
    pub target_prefix: &'static str,
    /// Host prefix used to build the regional endpoint.
    pub endpoint_prefix: &'static str,
    /// API version the shapes were modelled against.
    pub api_version: &'static str,
}

impl ServiceMetadata {
    /// Returns the `X-Amz-Target` value for an operation.
    #[must_use]
    pub fn target(&self, operation: &str) -> String {
        format!("{}.{operation}", self.target_prefix)
    }

    /// Returns the default regional endpoint, e.g. `https://lightsail.us-east-1.amazonaws.com`.
    #[must_use]
    pub fn regional_endpoint(&self, region: &AwsRegion) -> String {
        format!(
            "https://{}.{}.{}",
            self.endpoint_prefix,
            region.as_str(),
            region.dns_suffix()
        )
    }
}
