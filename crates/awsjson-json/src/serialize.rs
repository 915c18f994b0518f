//! Shape encoding.
//!
//! Field order on the wire is the declaration order of the struct, and absent
//! fields are skipped by the `skip_serializing_if` attribute each shape
//! carries, so the engine itself only has to classify failures.

use std::io;

use serde::Serialize;

use crate::error::JsonError;

/// Encode a shape into a freshly allocated buffer.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, JsonError> {
    let mut buf = Vec::with_capacity(128);
    to_writer(&mut buf, value)?;
    Ok(buf)
}

/// Encode a shape into an arbitrary writer.
///
/// Failures of the writer surface as [`JsonError::Io`]; everything else as
/// [`JsonError::Serialize`].
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<(), JsonError>
where
    W: io::Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer(writer, value).map_err(classify)
}

/// Encode a shape into a [`serde_json::Value`] tree.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value, JsonError> {
    serde_json::to_value(value).map_err(JsonError::Serialize)
}

fn classify(err: serde_json::Error) -> JsonError {
    if err.is_io() {
        JsonError::Io(io::Error::from(err))
    } else {
        JsonError::Serialize(err)
    }
}
