use crate::errors::{Envelope, HttpError};
use axum::http::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BodyError {
    #[error("request body must not be empty")]
    Empty,

    #[error("request contains badly-formed JSON (at position {0})")]
    Syntax(usize),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("invalid type for field \"{field}\": expected {expected}")]
    InvalidType { field: String, expected: String },
}

impl BodyError {
    /// Missing fields answer with the entity's own status; every other
    /// decoding failure is a plain 400.
    pub fn into_http(self, envelope: Envelope, missing_status: StatusCode) -> HttpError {
        let status = match self {
            BodyError::MissingFields(_) => missing_status,
            _ => StatusCode::BAD_REQUEST,
        };
        HttpError::new(status, envelope, self.to_string())
    }
}

/// Parses the raw body into a JSON object without applying any schema.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, BodyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(BodyError::Empty);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|err| BodyError::Syntax(byte_offset(body, err.line(), err.column())))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(BodyError::NotAnObject),
    }
}

/// Lists every required field absent from `map`, in the order given.
/// A field explicitly set to `null` counts as absent.
pub fn require_fields(map: &Map<String, Value>, required: &[&str]) -> Result<(), BodyError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| map.get(**field).is_none_or(Value::is_null))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BodyError::MissingFields(missing))
    }
}

/// Strictly decodes an already-parsed object, naming the offending field
/// on a type mismatch.
pub fn decode<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, BodyError> {
    serde_path_to_error::deserialize(Value::Object(map)).map_err(|err| {
        let field = err.path().to_string();
        let expected = expected_type(&err.inner().to_string());
        BodyError::InvalidType { field, expected }
    })
}

/// Presence check followed by the typed decode.
pub fn decode_required<T: DeserializeOwned>(
    body: &[u8],
    required: &[&str],
) -> Result<T, BodyError> {
    let map = parse_object(body)?;
    require_fields(&map, required)?;
    decode(map)
}

/// Overlays the keys present in `body` on top of `current`.
///
/// Keys absent from the body, or sent as `null`, keep their current value.
pub fn merge<T>(current: &T, body: &[u8]) -> Result<T, BodyError>
where
    T: Serialize + DeserializeOwned,
{
    let patch = parse_object(body)?;

    let mut merged = match serde_json::to_value(current) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    for (key, value) in patch {
        if !value.is_null() {
            merged.insert(key, value);
        }
    }

    decode(merged)
}

fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let preceding: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();

    (preceding + column).min(body.len())
}

fn expected_type(message: &str) -> String {
    match message.find(", expected ") {
        Some(idx) => message[idx + ", expected ".len()..].trim().to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        name: String,
        count: i32,
        #[serde(default)]
        note: Option<String>,
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(parse_object(b"  \n").unwrap_err(), BodyError::Empty);
    }

    #[test]
    fn syntax_error_reports_offset() {
        let err = parse_object(br#"{"name": "a",}"#).unwrap_err();
        assert!(matches!(err, BodyError::Syntax(_)));
        assert!(
            err.to_string()
                .starts_with("request contains badly-formed JSON (at position")
        );
    }

    #[test]
    fn arrays_are_not_objects() {
        assert_eq!(parse_object(b"[1,2]").unwrap_err(), BodyError::NotAnObject);
    }

    #[test]
    fn lists_every_missing_field_in_order() {
        let map = parse_object(br#"{"count": null}"#).unwrap();
        let err = require_fields(&map, &["name", "count"]).unwrap_err();
        assert_eq!(
            err,
            BodyError::MissingFields(vec!["name".into(), "count".into()])
        );
        assert_eq!(err.to_string(), "missing required fields: name, count");
    }

    #[test]
    fn type_mismatch_names_the_field() {
        let err = decode_required::<Payload>(br#"{"name": "a", "count": "x"}"#, &["name"])
            .unwrap_err();
        assert_eq!(
            err,
            BodyError::InvalidType {
                field: "count".into(),
                expected: "i32".into()
            }
        );
    }

    #[test]
    fn missing_status_only_applies_to_missing_fields() {
        let missing = BodyError::MissingFields(vec!["name".into()])
            .into_http(Envelope::Message, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);

        let syntax = BodyError::Syntax(3).into_http(Envelope::Message, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(syntax.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let current = Payload {
            name: "box".into(),
            count: 3,
            note: Some("fragile".into()),
        };

        let merged = merge(&current, br#"{"count": 7, "note": null}"#).unwrap();
        assert_eq!(
            merged,
            Payload {
                name: "box".into(),
                count: 7,
                note: Some("fragile".into()),
            }
        );
    }

    #[test]
    fn merge_rejects_wrong_types() {
        let current = Payload {
            name: "box".into(),
            count: 3,
            note: None,
        };

        let err = merge(&current, br#"{"name": 12}"#).unwrap_err();
        assert!(matches!(err, BodyError::InvalidType { ref field, .. } if field == "name"));
    }
}
