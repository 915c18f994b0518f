//! Shape decoding.
//!
//! Unknown keys are ignored because no shape uses `deny_unknown_fields`. A
//! document that is not an object (an explicit `null`, a bare scalar, an
//! array) decodes to `None` instead of failing, so a service that answers
//! with `null` is indistinguishable from one that omitted the shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::JsonError;

/// Decode a shape from raw bytes.
///
/// An empty (or all-whitespace) input is treated like `null` and yields
/// `Ok(None)`.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, JsonError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(bytes).map_err(JsonError::Malformed)?;
    from_value(value)
}

/// Decode a shape from an already parsed JSON tree.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<Option<T>, JsonError> {
    if !value.is_object() {
        tracing::trace!(
            shape = std::any::type_name::<T>(),
            "non-object JSON value decoded as absent"
        );
        return Ok(None);
    }
    T::deserialize(value)
        .map(Some)
        .map_err(|source| JsonError::Shape {
            shape: std::any::type_name::<T>(),
            source,
        })
}
