//! AWS JSON 1.1 request builders, response unmarshalling, and client pipeline.
//!
//! Every operation of this protocol family is a `POST /` whose operation is
//! named by the `X-Amz-Target` header:
//!
//! ```text
//! X-Amz-Target: Lightsail_20161128.GetInstance
//! Content-Type: application/x-amz-json-1.1
//! ```
//!
//! This crate provides:
//!
//! - **Operation traits**: bind a service's metadata and error type
//!   ([`JsonService`]) and an operation's name and shapes ([`JsonOperation`])
//! - **Request builders**: marshal an input shape into an `http::Request`
//! - **Response helpers**: unmarshal output shapes and raw error envelopes
//! - **Client**: [`JsonClient`] drives marshal, send and unmarshal over an
//!   externally supplied [`Transport`]

pub mod client;
pub mod error;
pub mod operation;
pub mod request;
pub mod response;
pub mod transport;

pub use client::JsonClient;
pub use error::SdkError;
pub use operation::{JsonOperation, JsonService, OperationError};
pub use request::{CONTENT_TYPE, TARGET_HEADER, marshall, marshall_json, marshall_request};
pub use response::{handle_response, parse_error_response, unmarshall_response};
pub use transport::{Transport, TransportError};
