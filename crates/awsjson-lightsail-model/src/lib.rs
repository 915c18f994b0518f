//! Amazon Lightsail model types for awsjson.
//!
//! Timestamps travel as epoch seconds and decode into millisecond
//! [`awsjson_json::Timestamp`] values. Resource shapes shared between operations
//! (instances, alarms, databases, certificates) live in [`resources`];
//! smaller building blocks and closed value sets live in [`types`].
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod resources;
pub mod types;

pub use error::{LightsailError, LightsailErrorCode};
pub use operations::{LIGHTSAIL_SERVICE, LightsailOperation};
