//! Static bindings between services, operations and shapes.

use serde::Serialize;
use serde::de::DeserializeOwned;

use awsjson_core::{ServiceError, ServiceMetadata};

/// A service speaking AWS JSON 1.1.
pub trait JsonService: Send + Sync + 'static {
    /// Target prefix, endpoint prefix and version of the service.
    const METADATA: ServiceMetadata;

    /// Typed error decoded from the service's error responses.
    type Error: ServiceError;
}

/// One operation of a [`JsonService`].
///
/// Implemented on zero-sized marker types; the marker never holds state.
pub trait JsonOperation: Send + Sync + 'static {
    /// The service this operation belongs to.
    type Service: JsonService;

    /// Input shape, encoded as the request body.
    type Input: Serialize + Send + Sync;

    /// Output shape, decoded from a successful response body.
    type Output: DeserializeOwned + Default + Send;

    /// Operation name as it appears in the `X-Amz-Target` header.
    const NAME: &'static str;
}

/// Shorthand for the error type of an operation's service.
pub type OperationError<O> = <<O as JsonOperation>::Service as JsonService>::Error;
