//! Typed Lambda client.

use awsjson_core::ClientConfig;
use awsjson_http::{JsonClient, SdkError, Transport};
use awsjson_lambda_model::error::LambdaError;
use awsjson_lambda_model::input::{
    GetFunctionConfigurationInput, InvokeInput, ListFunctionsInput, ListTagsInput,
};
use awsjson_lambda_model::output::{
    GetFunctionConfigurationOutput, InvokeOutput, ListFunctionsOutput, ListTagsOutput,
};

use crate::operations::{GetFunctionConfiguration, Invoke, ListFunctions, ListTags};

/// Result of a Lambda call.
pub type LambdaResult<T> = Result<T, SdkError<LambdaError>>;

/// Client for AWS Lambda.
#[derive(Debug)]
pub struct LambdaClient<T> {
    inner: JsonClient<T>,
}

impl<T> Clone for LambdaClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Transport> LambdaClient<T> {
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

    /// Invoke a function.
    pub async fn invoke(&self, input: &InvokeInput) -> LambdaResult<InvokeOutput> {
        self.inner.call::<Invoke>(input).await
    }

    /// Describe the version-specific settings of a function.
    pub async fn get_function_configuration(
        &self,
        input: &GetFunctionConfigurationInput,
    ) -> LambdaResult<GetFunctionConfigurationOutput> {
        self.inner.call::<GetFunctionConfiguration>(input).await
    }

    /// List functions, one page at a time.
    pub async fn list_functions(
        &self,
        input: &ListFunctionsInput,
    ) -> LambdaResult<ListFunctionsOutput> {
        self.inner.call::<ListFunctions>(input).await
    }

    /// List the tags of a function.
    pub async fn list_tags(&self, input: &ListTagsInput) -> LambdaResult<ListTagsOutput> {
        self.inner.call::<ListTags>(input).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;

    use awsjson_core::{AwsRegion, ServiceError};
    use awsjson_http::TransportError;
    use awsjson_lambda_model::LambdaErrorCode;
    use awsjson_lambda_model::types::{InvocationType, ThrottleReason};

    use super::*;

    /// Replies with a canned response and records what it was sent.
    struct MockTransport {
        status: http::StatusCode,
        headers: Vec<(&'static str, &'static str)>,
        body: &'static str,
        seen: Mutex<Vec<http::Request<Bytes>>>,
    }

    impl MockTransport {
        fn new(status: http::StatusCode, body: &'static str) -> Self {
            Self {
                status,
                headers: Vec::new(),
                body,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
            self.headers.push((name, value));
            self
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(
            &self,
            request: http::Request<Bytes>,
        ) -> Result<http::Response<Bytes>, TransportError> {
            self.seen.lock().unwrap().push(request);
            let mut builder = http::Response::builder().status(self.status);
            for (name, value) in &self.headers {
                builder = builder.header(*name, *value);
            }
            Ok(builder.body(Bytes::from_static(self.body.as_bytes()))?)
        }
    }

    fn config() -> ClientConfig {
        ClientConfig {
            region: AwsRegion::new("eu-west-1"),
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn test_should_invoke_function() {
        let client = LambdaClient::new(
            config(),
            MockTransport::new(
                http::StatusCode::OK,
                r#"{"statusCode":202,"executedVersion":"$LATEST"}"#,
            ),
        );
        let input = InvokeInput {
            function_name: Some("my-function".to_owned()),
            invocation_type: Some(InvocationType::Event),
            payload: Some(Bytes::from_static(br#"{"k":1}"#)),
            ..InvokeInput::default()
        };

        let out = client.invoke(&input).await.unwrap();
        assert_eq!(out.status_code, Some(202));

        let seen = client.inner().transport().seen.lock().unwrap();
        let req = &seen[0];
        assert_eq!(
            req.uri().to_string(),
            "https://lambda.eu-west-1.amazonaws.com/"
        );
        assert_eq!(req.headers()["x-amz-target"], "Lambda_20150331.Invoke");
        assert_eq!(
            req.body().as_ref(),
            br#"{"functionName":"my-function","invocationType":"Event","payload":"eyJrIjoxfQ=="}"#
        );
    }

    #[tokio::test]
    async fn test_should_decode_throttling_error() {
        let client = LambdaClient::new(
            config(),
            MockTransport::new(
                http::StatusCode::TOO_MANY_REQUESTS,
                r#"{"Type":"User","message":"Rate exceeded","Reason":"CallerRateLimitExceeded"}"#,
            )
            .with_header("x-amzn-errortype", "TooManyRequestsException")
            .with_header("x-amzn-requestid", "req-42")
            .with_header("retry-after", "1"),
        );

        let err = client
            .list_functions(&ListFunctionsInput::default())
            .await
            .unwrap_err();
        let err = err.into_service_error().unwrap();
        assert_eq!(err.code, LambdaErrorCode::TooManyRequestsException);
        assert_eq!(err.reason(), Some(&ThrottleReason::CallerRateLimitExceeded));
        assert_eq!(err.retry_after_seconds.as_deref(), Some("1"));
        assert_eq!(err.request_id.as_deref(), Some("req-42"));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_should_decode_not_found_error() {
        let client = LambdaClient::new(
            config(),
            MockTransport::new(
                http::StatusCode::NOT_FOUND,
                r#"{"__type":"ResourceNotFoundException","Message":"Function not found: f"}"#,
            ),
        );
        let input = GetFunctionConfigurationInput {
            function_name: Some("f".to_owned()),
            qualifier: None,
        };
        let err = client.get_function_configuration(&input).await.unwrap_err();
        let service_err = err.as_service_error().unwrap();
        assert!(service_err.is_not_found());
        assert_eq!(service_err.message, "Function not found: f");
        assert_eq!(
            err.to_string(),
            "service error: LambdaError(ResourceNotFoundException): Function not found: f"
        );
    }

    #[tokio::test]
    async fn test_should_list_tags() {
        let client = LambdaClient::new(
            config(),
            MockTransport::new(http::StatusCode::OK, r#"{"tags":{"team":"core"}}"#),
        );
        let input = ListTagsInput {
            resource: Some("arn:aws:lambda:eu-west-1:123456789012:function:f".to_owned()),
        };
        let out = client.list_tags(&input).await.unwrap();
        assert_eq!(out.tags.unwrap()["team"], "core");
    }
}
