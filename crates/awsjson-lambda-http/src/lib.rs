//! AWS Lambda client over the AWS JSON 1.1 protocol.
//!
//! Operations are bound as zero-sized markers implementing
//! [`awsjson_http::JsonOperation`]. [`LambdaClient`] wraps a generic
//! [`awsjson_http::JsonClient`] with one typed method per operation, and
//! [`dispatch::marshall_by_name`] marshals an operation picked at runtime.

pub mod client;
pub mod dispatch;
pub mod operations;

pub use client::LambdaClient;
pub use dispatch::marshall_by_name;
pub use operations::Lambda;
