//! Typed Lightsail client.

use awsjson_core::ClientConfig;
use awsjson_http::{JsonClient, SdkError, Transport};
use awsjson_lightsail_model::error::LightsailError;
use awsjson_lightsail_model::input::{
    CreateInstancesFromSnapshotInput, CreateRelationalDatabaseInput, GetAlarmsInput,
    GetInstanceInput, GetInstancesInput, GetLoadBalancerTlsCertificatesInput,
    GetRelationalDatabaseInput, GetRelationalDatabaseMetricDataInput, PutAlarmInput,
};
use awsjson_lightsail_model::output::{
    CreateInstancesFromSnapshotOutput, CreateRelationalDatabaseOutput, GetAlarmsOutput,
    GetInstanceOutput, GetInstancesOutput, GetLoadBalancerTlsCertificatesOutput,
    GetRelationalDatabaseMetricDataOutput, GetRelationalDatabaseOutput, PutAlarmOutput,
};

use crate::operations::{
    CreateInstancesFromSnapshot, CreateRelationalDatabase, GetAlarms, GetInstance, GetInstances,
    GetLoadBalancerTlsCertificates, GetRelationalDatabase, GetRelationalDatabaseMetricData,
    PutAlarm,
};

/// Result of a Lightsail call.
pub type LightsailResult<T> = Result<T, SdkError<LightsailError>>;

/// Client for Amazon Lightsail.
#[derive(Debug)]
pub struct LightsailClient<T> {
    inner: JsonClient<T>,
}

impl<T> Clone for LightsailClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Transport> LightsailClient<T> {
    /// Create a new client.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            inner: JsonClient::new(config, transport),
        }
    }

    /// Returns the underlying generic client.
    #[must_use]
    pub fn inner(&self) -> &JsonClient<T> {
        &self.inner
    }

    /// Describe one instance.
    pub async fn get_instance(
        &self,
        input: &GetInstanceInput,
    ) -> LightsailResult<GetInstanceOutput> {
        self.inner.call::<GetInstance>(input).await
    }

    /// One page of instances; pass `next_page_token` back as `page_token`.
    pub async fn get_instances(
        &self,
        input: &GetInstancesInput,
    ) -> LightsailResult<GetInstancesOutput> {
        self.inner.call::<GetInstances>(input).await
    }

    /// Create instances from a manual or automatic snapshot.
    pub async fn create_instances_from_snapshot(
        &self,
        input: &CreateInstancesFromSnapshotInput,
    ) -> LightsailResult<CreateInstancesFromSnapshotOutput> {
        self.inner.call::<CreateInstancesFromSnapshot>(input).await
    }

    /// Create a managed database.
    pub async fn create_relational_database(
        &self,
        input: &CreateRelationalDatabaseInput,
    ) -> LightsailResult<CreateRelationalDatabaseOutput> {
        self.inner.call::<CreateRelationalDatabase>(input).await
    }

    /// Describe one managed database.
    pub async fn get_relational_database(
        &self,
        input: &GetRelationalDatabaseInput,
    ) -> LightsailResult<GetRelationalDatabaseOutput> {
        self.inner.call::<GetRelationalDatabase>(input).await
    }

    /// Fetch data points of a database metric.
    pub async fn get_relational_database_metric_data(
        &self,
        input: &GetRelationalDatabaseMetricDataInput,
    ) -> LightsailResult<GetRelationalDatabaseMetricDataOutput> {
        self.inner.call::<GetRelationalDatabaseMetricData>(input).await
    }

    /// Create or update an alarm. Updating replaces every setting.
    pub async fn put_alarm(&self, input: &PutAlarmInput) -> LightsailResult<PutAlarmOutput> {
        self.inner.call::<PutAlarm>(input).await
    }

    /// List alarms, optionally filtered by name or monitored resource.
    pub async fn get_alarms(&self, input: &GetAlarmsInput) -> LightsailResult<GetAlarmsOutput> {
        self.inner.call::<GetAlarms>(input).await
    }

    /// List the TLS certificates of a load balancer.
    pub async fn get_load_balancer_tls_certificates(
        &self,
        input: &GetLoadBalancerTlsCertificatesInput,
    ) -> LightsailResult<GetLoadBalancerTlsCertificatesOutput> {
        self.inner.call::<GetLoadBalancerTlsCertificates>(input).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;

    use awsjson_core::{AwsRegion, ServiceError};
    use awsjson_http::TransportError;
    use awsjson_lightsail_model::LightsailErrorCode;
    use awsjson_lightsail_model::types::{AlarmState, ComparisonOperator, MetricName};

    use super::*;

    /// Replies with queued responses in order and records requests.
    struct ScriptedTransport {
        replies: Mutex<Vec<(http::StatusCode, &'static str)>>,
        seen: Mutex<Vec<http::Request<Bytes>>>,
    }

    impl ScriptedTransport {
        fn new(mut replies: Vec<(http::StatusCode, &'static str)>) -> Self {
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(
            &self,
            request: http::Request<Bytes>,
        ) -> Result<http::Response<Bytes>, TransportError> {
            self.seen.lock().unwrap().push(request);
            let (status, body) = self
                .replies
                .lock()
                .unwrap()
                .pop()
                .ok_or("no scripted reply left")?;
            Ok(http::Response::builder()
                .status(status)
                .body(Bytes::from_static(body.as_bytes()))?)
        }
    }

    fn config() -> ClientConfig {
        ClientConfig {
            region: AwsRegion::new("cn-north-1"),
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn test_should_page_through_instances() {
        let client = LightsailClient::new(
            config(),
            ScriptedTransport::new(vec![
                (
                    http::StatusCode::OK,
                    r#"{"instances":[{"name":"a"}],"nextPageToken":"p2"}"#,
                ),
                (http::StatusCode::OK, r#"{"instances":[{"name":"b"}]}"#),
            ]),
        );

        let mut names = Vec::new();
        let mut input = GetInstancesInput::default();
        loop {
            let page = client.get_instances(&input).await.unwrap();
            names.extend(page.instances.unwrap_or_default().into_iter().filter_map(|i| i.name));
            match page.next_page_token {
                Some(token) => input.page_token = Some(token),
                None => break,
            }
        }
        assert_eq!(names, ["a", "b"]);

        let seen = client.inner().transport().seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0].uri().to_string(),
            "https://lightsail.cn-north-1.amazonaws.com.cn/"
        );
        assert_eq!(seen[0].body().as_ref(), b"{}");
        assert_eq!(seen[1].body().as_ref(), br#"{"pageToken":"p2"}"#);
    }

    #[tokio::test]
    async fn test_should_put_alarm() {
        let client = LightsailClient::new(
            config(),
            ScriptedTransport::new(vec![(
                http::StatusCode::OK,
                r#"{"operations":[{"id":"op-1","status":"Succeeded"}]}"#,
            )]),
        );
        let input = PutAlarmInput {
            alarm_name: Some("cpu-high".to_owned()),
            metric_name: Some(MetricName::CPUUtilization),
            monitored_resource_name: Some("web-1".to_owned()),
            comparison_operator: Some(ComparisonOperator::GreaterThanOrEqualToThreshold),
            threshold: Some(80.0),
            evaluation_periods: Some(1),
            notification_triggers: Some(vec![AlarmState::Alarm]),
            ..PutAlarmInput::default()
        };

        let out = client.put_alarm(&input).await.unwrap();
        assert_eq!(out.operations.unwrap()[0].id.as_deref(), Some("op-1"));

        let seen = client.inner().transport().seen.lock().unwrap();
        assert_eq!(
            seen[0].headers()["x-amz-target"],
            "Lightsail_20161128.PutAlarm"
        );
    }

    #[tokio::test]
    async fn test_should_decode_service_error() {
        let client = LightsailClient::new(
            config(),
            ScriptedTransport::new(vec![(
                http::StatusCode::BAD_REQUEST,
                concat!(
                    r#"{"__type":"NotFoundException","message":"no such database","#,
                    r#""tip":"check the name"}"#
                ),
            )]),
        );
        let input = GetRelationalDatabaseInput {
            relational_database_name: Some("db-9".to_owned()),
        };
        let err = client
            .get_relational_database(&input)
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(err.code, LightsailErrorCode::NotFoundException);
        assert_eq!(err.tip.as_deref(), Some("check the name"));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_should_report_transport_failure() {
        let client = LightsailClient::new(config(), ScriptedTransport::new(Vec::new()));
        let err = client
            .get_alarms(&GetAlarmsInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Transport(_)));
    }
}
