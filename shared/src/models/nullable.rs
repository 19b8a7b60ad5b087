//! Null-tolerant field decoding
//!
//! The backend sends `null` for amounts and lists it has not filled in.
//! `#[serde(default)]` only covers a missing key, so fields that must not
//! reject a whole order use `deserialize_with = "nullable::or_default"` too.

use serde::{Deserialize, Deserializer};

/// Read `null` as `T::default()`
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
