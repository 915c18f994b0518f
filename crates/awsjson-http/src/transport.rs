//! Transport boundary.
//!
//! Connection handling, request signing, credential resolution and retry
//! policy all live behind this trait. The client only hands over a fully
//! marshalled request and takes back the buffered response.

use async_trait::async_trait;
use bytes::Bytes;

/// Failure reported by a [`Transport`].
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Sends marshalled requests and returns buffered responses.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Send one request.
    ///
    /// Non-2xx responses are not errors at this level; they are returned as
    /// responses and decoded into typed service errors by the client.
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError>;
}
