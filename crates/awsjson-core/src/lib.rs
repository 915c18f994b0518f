//! Core protocol types, configuration, and errors for awsjson service clients.
//!
//! This crate provides the building blocks shared by every service binding:
//! static service metadata, environment-driven client configuration, the
//! client-side error taxonomy, and the raw error envelope that typed service
//! errors are decoded from.

mod config;
mod error;
mod service_error;
mod types;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use service_error::{ErrorResponse, ServiceError, normalize_error_type};
pub use types::{AwsRegion, ServiceMetadata};
