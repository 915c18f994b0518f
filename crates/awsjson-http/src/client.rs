//! Generic AWS JSON 1.1 client.

use std::sync::Arc;

use bytes::Bytes;

use awsjson_core::{ClientConfig, ClientError, ClientResult};

use crate::error::SdkError;
use crate::operation::{JsonOperation, JsonService, OperationError};
use crate::request::marshall;
use crate::response::handle_response;
use crate::transport::Transport;

/// Header carrying a unique id per logical call.
const INVOCATION_ID_HEADER: &str = "amz-sdk-invocation-id";

/// Drives marshal, send and unmarshal for any [`JsonOperation`].
///
/// The client holds no per-call state; clones share the configuration and
/// transport.
#[derive(Debug)]
pub struct JsonClient<T> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T> Clone for JsonClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> JsonClient<T> {
    /// Create a new client.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// Create a client around an already shared transport.
    pub fn with_shared_transport(config: ClientConfig, transport: Arc<T>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Invoke an operation.
    pub async fn call<O: JsonOperation>(
        &self,
        input: &O::Input,
    ) -> Result<O::Output, SdkError<OperationError<O>>> {
        let request = self.prepare::<O>(input)?;

        tracing::debug!(
            operation = O::NAME,
            uri = %request.uri(),
            "sending request"
        );

        let response = self
            .transport
            .send(request)
            .await
            .map_err(SdkError::Transport)?;

        handle_response::<O>(response)
    }

    /// Marshal an operation input and address it to the configured endpoint.
    ///
    /// Only the scheme and authority of the endpoint are used; every request
    /// goes to `/`, so a path on `AWS_ENDPOINT_URL` is ignored.
    pub fn prepare<O: JsonOperation>(
        &self,
        input: &O::Input,
    ) -> ClientResult<http::Request<Bytes>> {
        let mut request = marshall::<O>(Some(input))?;

        let endpoint = self
            .config
            .resolve_endpoint(&<O::Service as JsonService>::METADATA);
        let invalid = |reason: String| ClientError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            reason,
        };
        let parts = endpoint
            .parse::<http::Uri>()
            .map_err(|e| invalid(e.to_string()))?
            .into_parts();
        let scheme = parts
            .scheme
            .ok_or_else(|| invalid("missing scheme".to_owned()))?;
        let authority = parts
            .authority
            .ok_or_else(|| invalid("missing host".to_owned()))?;
        let host = authority.as_str().to_owned();
        let uri = http::Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query("/")
            .build()
            .map_err(http::Error::from)?;

        let headers = request.headers_mut();
        headers.insert(
            http::header::HOST,
            http::HeaderValue::from_str(&host).map_err(http::Error::from)?,
        );
        headers.insert(
            http::header::USER_AGENT,
            http::HeaderValue::from_str(&self.config.user_agent).map_err(http::Error::from)?,
        );
        headers.insert(
            INVOCATION_ID_HEADER,
            http::HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
                .map_err(http::Error::from)?,
        );
        *request.uri_mut() = uri;

        Ok(request)
    }
}
