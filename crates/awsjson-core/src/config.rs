//! Client configuration.
//!
//! All configuration is driven by environment variables, matching the
//! conventions of the official AWS SDKs.

use crate::types::{AwsRegion, ServiceMetadata};

/// Configuration shared by every service client.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region requests are addressed to.
    pub region: AwsRegion,
    /// Explicit endpoint overriding the regional one (e.g. a local emulator).
    pub endpoint_url: Option<String>,
    /// Value sent in the `user-agent` header.
    pub user_agent: String,
    /// Log level filter used by binaries.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            user_agent: default_user_agent(),
            log_level: "info".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            config.region = AwsRegion::new(v);
        }
        if let Some(v) = lookup("AWS_ENDPOINT_URL").filter(|v| !v.trim().is_empty()) {
            config.endpoint_url = Some(v.trim().trim_end_matches('/').to_owned());
        }
        if let Some(v) = lookup("AWS_SDK_UA_APP_ID") {
            config.user_agent = format!("{} app/{v}", default_user_agent());
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Returns the endpoint requests for `service` are sent to.
    #[must_use]
    pub fn resolve_endpoint(&self, service: &ServiceMetadata) -> String {
        match &self.endpoint_url {
            Some(url) => url.clone(),
            None => service.regional_endpoint(&self.region),
        }
    }
}

fn default_user_agent() -> String {
    format!("awsjson/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const LAMBDA: ServiceMetadata = ServiceMetadata {
        service_name: "AWS Lambda",
        target_prefix: "Lambda_20150331",
        endpoint_prefix: "lambda",
        api_version: "2015-03-31",
    };

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region.as_str(), "us-east-1");
        assert!(config.endpoint_url.is_none());
        assert!(config.user_agent.starts_with("awsjson/"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_prefer_aws_region_over_default_region() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("AWS_REGION", "eu-central-1"),
            ("AWS_DEFAULT_REGION", "ap-south-1"),
        ]));
        assert_eq!(config.region.as_str(), "eu-central-1");

        let config = ClientConfig::from_lookup(lookup(&[("AWS_DEFAULT_REGION", "ap-south-1")]));
        assert_eq!(config.region.as_str(), "ap-south-1");
    }

    #[test]
    fn test_should_resolve_regional_endpoint() {
        let config = ClientConfig::from_lookup(lookup(&[("AWS_REGION", "us-west-2")]));
        assert_eq!(
            config.resolve_endpoint(&LAMBDA),
            "https://lambda.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_should_resolve_endpoint_override() {
        let config =
            ClientConfig::from_lookup(lookup(&[("AWS_ENDPOINT_URL", "http://localhost:4566/")]));
        assert_eq!(config.resolve_endpoint(&LAMBDA), "http://localhost:4566");
    }

    #[test]
    fn test_should_append_app_id_to_user_agent() {
        let config = ClientConfig::from_lookup(lookup(&[("AWS_SDK_UA_APP_ID", "inventory")]));
        assert!(config.user_agent.ends_with(" app/inventory"));
    }
}
