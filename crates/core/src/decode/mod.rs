//! Validating decoders from untrusted server JSON into domain values.
//!
//! Every decoder fails closed: a record either decodes completely or the
//! whole operation returns a [`DecodeError`] pointing at the offending value.

pub mod assetable;
pub mod collection;
pub mod date;
pub mod records;

use serde_json::{Map, Value};

use crate::errors::{DecodeError, DecodeErrorKind};

pub use assetable::{decode_assetable, WireContract};
pub use collection::{decode_all, decode_slice};
pub use date::parse_date;

/// Root path used for top-level values.
pub const ROOT: &str = "$";

/// Implemented by every record that can be read from a server response.
pub trait Decode: Sized {
    fn decode(value: &Value, path: &str, contract: WireContract) -> Result<Self, DecodeError>;
}

/// Parse a response body and decode it as `T`.
pub fn decode_bytes<T: Decode>(body: &[u8], contract: WireContract) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(body)?;
    T::decode(&value, ROOT, contract)
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unexpected(path: &str, expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::new(
        path,
        DecodeErrorKind::UnexpectedType {
            expected,
            found: type_name(value),
        },
    )
}

pub(crate) fn field_path(path: &str, name: &str) -> String {
    format!("{path}.{name}")
}

pub(crate) fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// A JSON number. Numeric strings are rejected.
pub fn number(value: &Value, path: &str) -> Result<f64, DecodeError> {
    value.as_f64().ok_or_else(|| unexpected(path, "number", value))
}

pub fn string<'a>(value: &'a Value, path: &str) -> Result<&'a str, DecodeError> {
    value.as_str().ok_or_else(|| unexpected(path, "string", value))
}

pub fn array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], DecodeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| unexpected(path, "array", value))
}

/// Reads mandatory fields out of a JSON object, tracking paths for errors.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value, path: &'a str) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(unexpected(path, "object", other)),
        }
    }

    /// Decode field `name` with `f`, which receives the value and its path.
    pub fn with<T>(
        &self,
        name: &str,
        f: impl FnOnce(&'a Value, &str) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        let path = field_path(self.path, name);
        match self.map.get(name) {
            Some(value) => f(value, &path),
            None => Err(DecodeError::new(
                self.path,
                DecodeErrorKind::MissingField(name.to_string()),
            )),
        }
    }

    pub fn number(&self, name: &str) -> Result<f64, DecodeError> {
        self.with(name, number)
    }

    pub fn string(&self, name: &str) -> Result<&'a str, DecodeError> {
        self.with(name, string)
    }

    pub fn date(&self, name: &str) -> Result<crate::models::Instant, DecodeError> {
        self.with(name, |value, path| parse_date(string(value, path)?, path))
    }

    pub fn record<T: Decode>(&self, name: &str, contract: WireContract) -> Result<T, DecodeError> {
        self.with(name, |value, path| T::decode(value, path, contract))
    }
}
