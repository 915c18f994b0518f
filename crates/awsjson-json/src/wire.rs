//! Field-level wire helpers for use with `#[serde(with = "...")]`.
//!
//! All helpers operate on `Option<_>` fields, since every field of every
//! shape is optional. Pair them with `default` so a missing key still
//! decodes to `None`:
//!
//! ```
//! use bytes::Bytes;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Upload {
//!     #[serde(
//!         default,
//!         with = "awsjson_json::wire::blob",
//!         skip_serializing_if = "Option::is_none"
//!     )]
//!     payload: Option<Bytes>,
//! }
//!
//! let json = serde_json::to_string(&Upload { payload: Some(Bytes::from_static(b"hi")) }).unwrap();
//! assert_eq!(json, r#"{"payload":"aGk="}"#);
//! ```

/// Binary payloads as standard base64 strings.
pub mod blob {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use bytes::Bytes;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize an optional blob.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<Bytes>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional blob.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| {
                STANDARD
                    .decode(encoded.as_bytes())
                    .map(Bytes::from)
                    .map_err(D::Error::custom)
            })
            .transpose()
    }
}

/// Nested model fields that tolerate non-object values.
///
/// A nested shape whose wire value is `null` or not an object decodes to
/// `None`, the same rule the top-level decoder applies. Use with
/// `#[serde(default, deserialize_with = "awsjson_json::wire::nested::deserialize")]`.
pub mod nested {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize an optional nested shape.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        crate::deserialize::from_value(value).map_err(D::Error::custom)
    }
}

/// Lists of nested shapes.
///
/// Elements that are `null` or not objects are dropped, and a value that is
/// not an array decodes to `None`.
pub mod nested_list {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize an optional list of shapes.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => super::shapes(items).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Maps from a key to a list of nested shapes.
///
/// Entries whose value is not an array are dropped; each list follows the
/// [`nested_list`] rules.
pub mod nested_list_map {
    use std::collections::HashMap;

    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize an optional map of shape lists.
    pub fn deserialize<'de, D, T>(
        deserializer: D,
    ) -> Result<Option<HashMap<String, Vec<T>>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let Value::Object(entries) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };
        entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Array(items) => Some(super::shapes(items).map(|list| (key, list))),
                _ => None,
            })
            .collect::<Result<HashMap<_, _>, _>>()
            .map(Some)
            .map_err(D::Error::custom)
    }
}

/// Lists of scalars and enum values.
///
/// `null` elements are dropped and a value that is not an array decodes to
/// `None`. Any other element must match the element type.
pub mod list {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize an optional scalar list.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };
        items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(T::deserialize)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(D::Error::custom)
    }
}

/// String-keyed maps of scalars.
///
/// `null` values are dropped and a value that is not an object decodes to
/// `None`.
pub mod map {
    use std::collections::HashMap;

    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize an optional scalar map.
    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Option<HashMap<String, V>>, D::Error>
    where
        D: Deserializer<'de>,
        V: DeserializeOwned,
    {
        let Value::Object(entries) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };
        entries
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| V::deserialize(value).map(|v| (key, v)))
            .collect::<Result<HashMap<_, _>, _>>()
            .map(Some)
            .map_err(D::Error::custom)
    }
}

fn shapes<T: serde::de::DeserializeOwned>(
    items: Vec<serde_json::Value>,
) -> Result<Vec<T>, crate::JsonError> {
    items
        .into_iter()
        .filter_map(|item| crate::deserialize::from_value(item).transpose())
        .collect()
}
