//! JSON codecs for the album contract.
//!
//! Every shape has a hand-written encoder producing a [`serde_json::Value`] and a decoder
//! going the other way. Decoders take the path of the value they look at, so a failure
//! deep inside a collection points at the offending field (`$[2].rate`).

pub mod album;

// Use 3rd party
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

pub use self::album::{
    decode_album, decode_album_args, decode_album_option, decode_albums, encode_album, encode_album_args,
    encode_albums,
};

/// Path of the top-level value handed to a decoder.
pub const ROOT: &str = "$";

#[derive(Clone, Debug, PartialEq, Error)]
pub enum DecodeErrorKind {
    #[error("expecting {expected} but instead got: {value}")]
    BadPrimitive { expected: &'static str, value: Value },
    #[error("expecting {expected} but instead got: {value} ({reason})")]
    BadPrimitiveExtra {
        expected: &'static str,
        value: Value,
        reason: String,
    },
    #[error("expecting an object with a field named `{0}`")]
    MissingField(String),
}

/// Why a JSON value could not be mapped to a typed entity, and where.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("error at `{path}`: {kind}")]
pub struct DecodeError {
    pub path: String,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    fn bad_primitive(path: &str, expected: &'static str, value: &Value) -> Self {
        Self {
            path: path.to_owned(),
            kind: DecodeErrorKind::BadPrimitive {
                expected,
                value: value.clone(),
            },
        }
    }

    fn bad_primitive_extra(path: &str, expected: &'static str, value: &Value, reason: String) -> Self {
        Self {
            path: path.to_owned(),
            kind: DecodeErrorKind::BadPrimitiveExtra {
                expected,
                value: value.clone(),
                reason,
            },
        }
    }

    fn missing_field(path: &str, name: &str) -> Self {
        Self {
            path: path.to_owned(),
            kind: DecodeErrorKind::MissingField(name.to_owned()),
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

pub fn field_path(path: &str, name: &str) -> String {
    format!("{}.{}", path, name)
}

pub fn index_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}

// Encoders

pub fn encode_uuid(id: &Uuid) -> Value {
    Value::String(id.hyphenated().to_string())
}

/// RFC 3339 in UTC with a `Z` suffix, fractional seconds only when present.
pub fn encode_datetime(date: &DateTime<Utc>) -> Value {
    Value::String(date.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

pub fn encode_list<T, E>(encoder: E, items: &[T]) -> Value
where
    E: Fn(&T) -> Value,
{
    Value::Array(items.iter().map(encoder).collect())
}

// Decoders

pub fn string(path: &str, value: &Value) -> DecodeResult<String> {
    value
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| DecodeError::bad_primitive(path, "a string", value))
}

/// A 32-bit integer. Integral floats (`5.0`) are accepted; fractions and strings are not.
pub fn int(path: &str, value: &Value) -> DecodeResult<i32> {
    let number = match value {
        Value::Number(number) => number,
        _ => return Err(DecodeError::bad_primitive(path, "an int", value)),
    };

    let out_of_range = || {
        DecodeError::bad_primitive_extra(
            path,
            "an int",
            value,
            "value was either too large or too small for an int".to_owned(),
        )
    };

    if let Some(int) = number.as_i64() {
        return i32::try_from(int).map_err(|_| out_of_range());
    }
    if number.is_u64() {
        return Err(out_of_range());
    }

    match number.as_f64() {
        Some(float) if float.fract() == 0.0 => {
            if float < f64::from(i32::MIN) || float > f64::from(i32::MAX) {
                Err(out_of_range())
            } else {
                Ok(float as i32)
            }
        }
        _ => Err(DecodeError::bad_primitive(path, "an int", value)),
    }
}

pub fn uuid(path: &str, value: &Value) -> DecodeResult<Uuid> {
    let text = value
        .as_str()
        .ok_or_else(|| DecodeError::bad_primitive(path, "a guid", value))?;
    Uuid::parse_str(text).map_err(|err| DecodeError::bad_primitive_extra(path, "a guid", value, err.to_string()))
}

/// A date-time normalised to UTC. Strings without an offset are read as UTC, a bare
/// date as its midnight. Signed years outside 0000-9999 (`+10000-01-01T00:00:00Z`),
/// as written by `encode_datetime`, are accepted.
pub fn datetime_utc(path: &str, value: &Value) -> DecodeResult<DateTime<Utc>> {
    let text = value
        .as_str()
        .ok_or_else(|| DecodeError::bad_primitive(path, "a datetime", value))?;

    let err = match DateTime::parse_from_rfc3339(text) {
        Ok(date) => return Ok(date.with_timezone(&Utc)),
        Err(err) => err,
    };

    let naive = text.strip_suffix('Z').unwrap_or(text);
    NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDate::parse_from_str(naive, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN)))
        .map(|naive| naive.and_utc())
        .map_err(|_| DecodeError::bad_primitive_extra(path, "a datetime", value, err.to_string()))
}

/// `null` decodes to `None`; anything else must satisfy `decoder`.
pub fn option<T, D>(decoder: D, path: &str, value: &Value) -> DecodeResult<Option<T>>
where
    D: Fn(&str, &Value) -> DecodeResult<T>,
{
    match value {
        Value::Null => Ok(None),
        value => decoder(path, value).map(Some),
    }
}

/// Decodes every element in order and stops at the first failure.
pub fn list<T, D>(decoder: D, path: &str, value: &Value) -> DecodeResult<Vec<T>>
where
    D: Fn(&str, &Value) -> DecodeResult<T>,
{
    let items = value
        .as_array()
        .ok_or_else(|| DecodeError::bad_primitive(path, "a list", value))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| decoder(&index_path(path, index), item))
        .collect()
}

/// Field access on a JSON object being decoded.
pub struct Fields<'a> {
    path: &'a str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn object(path: &'a str, value: &'a Value) -> DecodeResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { path, map }),
            value => Err(DecodeError::bad_primitive(path, "an object", value)),
        }
    }

    pub fn required<T, D>(&self, name: &str, decoder: D) -> DecodeResult<T>
    where
        D: Fn(&str, &Value) -> DecodeResult<T>,
    {
        let path = field_path(self.path, name);
        match self.map.get(name) {
            Some(value) => decoder(&path, value),
            None => Err(DecodeError::missing_field(&path, name)),
        }
    }
}
