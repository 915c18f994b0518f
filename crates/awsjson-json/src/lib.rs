//! JSON encode/decode engine for AWS JSON 1.1 shapes.
//!
//! Every shape in the service model crates is a plain struct with serde
//! derives. This crate supplies the pieces those derives cannot express on
//! their own:
//!
//! - **Entry points**: [`to_vec`], [`to_writer`] and [`from_slice`], which
//!   wrap serde_json with the protocol's error taxonomy and its rule that a
//!   non-object document decodes to "absent".
//! - **Wire helpers** ([`wire`]): base64 blobs and lenient nested objects,
//!   lists and maps, used through `#[serde(with = "...")]`.
//! - **Timestamps** ([`Timestamp`]): millisecond instants written as epoch
//!   seconds.
//! - **Forward-compatible enums** ([`wire_enum!`]): closed value sets that
//!   still accept values added to the service after this crate was built.

pub mod deserialize;
pub mod enums;
pub mod error;
pub mod serialize;
pub mod timestamp;
pub mod wire;

pub use deserialize::{from_slice, from_value};
pub use error::JsonError;
pub use serialize::{to_value, to_vec, to_writer};
pub use timestamp::Timestamp;

#[doc(hidden)]
pub use serde as __serde;
