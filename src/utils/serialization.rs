// src/utils/serialization.rs
//! Serialization utilities for exchange messages.
//!
//! Provides the shape-parametrised JSON encode/decode functions every
//! message type is built on:
//! - compact and pretty JSON encoding
//! - decoding from raw UTF-8 bytes into any owned shape
//! - converting a pre-checked JSON object into a typed shape

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serializes a value to compact JSON bytes.
///
/// # Arguments
/// * `data` - The value to serialize (must implement `Serialize`)
///
/// # Returns
/// - `Ok(Vec<u8>)` with the UTF-8 JSON representation on success
/// - `Err(serde_json::Error)` if serialization fails
pub fn to_json_bytes<T: Serialize>(data: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(data)
}

/// Serializes a value to an indented JSON string.
pub fn to_json_pretty<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Deserializes a value from JSON bytes.
///
/// # Arguments
/// * `data` - UTF-8 JSON bytes to deserialize
///
/// # Returns
/// - `Ok(T)` with deserialized value on success
/// - `Err(serde_json::Error)` on syntax errors or shape mismatches
///
/// # Note
/// `T` is owned, so the result never borrows from `data`.
pub fn from_json_bytes<T: DeserializeOwned>(data: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(data)
}

/// Converts a parsed object into a typed shape.
pub fn from_object<T: DeserializeOwned>(object: Map<String, Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(object))
}
