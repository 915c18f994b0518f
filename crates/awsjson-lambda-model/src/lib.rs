//! AWS Lambda model types for awsjson.
//!
//! Shapes are plain structs with serde derives. Every field is optional and
//! omitted from the wire when `None`; wire keys are `camelCase`, matching the
//! Lambda JSON protocol.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{LambdaError, LambdaErrorCode};
pub use operations::{LAMBDA_SERVICE, LambdaOperation};
