//! Wire schemas: JSON payload → validated input, entity → JSON output.
//!
//! Loading reports every offending field at once as a map of field name to
//! messages. Output is produced by explicit view structs per entity.

pub mod author;
pub mod book;

pub use author::{load_author, AuthorDetailView, AuthorView};
pub use book::{load_book, BookView};

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

pub const MISSING: &str = "Missing data for required field.";
pub const NULL: &str = "Field may not be null.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer.";
pub const UNKNOWN_FIELD: &str = "Unknown field.";
pub const INVALID_INPUT: &str = "Invalid input type.";

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// Field name → error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// The payload was not a JSON object.
    pub fn invalid_input() -> Self {
        let mut errors = Self::new();
        errors.add(SCHEMA_KEY, INVALID_INPUT);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Field reader over one inbound object. Collects errors instead of stopping at
/// the first one.
pub(crate) struct Payload<'a> {
    object: &'a Map<String, JsonValue>,
    errors: ValidationErrors,
}

impl<'a> Payload<'a> {
    /// Fails outright for non-objects; flags every key outside `accepted`.
    pub(crate) fn new(value: &'a JsonValue, accepted: &[&str]) -> Result<Self, ValidationErrors> {
        let object = value.as_object().ok_or_else(ValidationErrors::invalid_input)?;
        let mut errors = ValidationErrors::new();
        for key in object.keys() {
            if !accepted.contains(&key.as_str()) {
                errors.add(key, UNKNOWN_FIELD);
            }
        }
        Ok(Self { object, errors })
    }

    pub(crate) fn required_str(&mut self, field: &str) -> Option<String> {
        match self.object.get(field) {
            None => {
                self.errors.add(field, MISSING);
                None
            }
            Some(value) => self.string(field, value),
        }
    }

    /// Absent is fine; an explicit `null` is not.
    pub(crate) fn optional_str(&mut self, field: &str) -> Option<String> {
        let value = self.object.get(field)?;
        self.string(field, value)
    }

    pub(crate) fn required_int(&mut self, field: &str) -> Option<i32> {
        match self.object.get(field) {
            None => {
                self.errors.add(field, MISSING);
                None
            }
            Some(JsonValue::Null) => {
                self.errors.add(field, NULL);
                None
            }
            Some(value) => {
                let parsed = as_i32(value);
                if parsed.is_none() {
                    self.errors.add(field, NOT_AN_INTEGER);
                }
                parsed
            }
        }
    }

    pub(crate) fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn string(&mut self, field: &str, value: &JsonValue) -> Option<String> {
        match value {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Null => {
                self.errors.add(field, NULL);
                None
            }
            _ => {
                self.errors.add(field, NOT_A_STRING);
                None
            }
        }
    }
}

/// Integers, integral floats and numeric strings that fit a Postgres INTEGER.
fn as_i32(value: &JsonValue) -> Option<i32> {
    let wide = match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    i32::try_from(wide).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_coercion_accepts_numeric_forms() {
        assert_eq!(as_i32(&json!(7)), Some(7));
        assert_eq!(as_i32(&json!(7.0)), Some(7));
        assert_eq!(as_i32(&json!(" 42 ")), Some(42));
    }

    #[test]
    fn integer_coercion_rejects_everything_else() {
        assert_eq!(as_i32(&json!(7.5)), None);
        assert_eq!(as_i32(&json!(true)), None);
        assert_eq!(as_i32(&json!("seven")), None);
        assert_eq!(as_i32(&json!(i64::from(i32::MAX) + 1)), None);
    }

    #[test]
    fn errors_serialize_as_a_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("title", MISSING);
        errors.add("author_id", NOT_AN_INTEGER);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "author_id": ["Not a valid integer."],
                "title": ["Missing data for required field."]
            })
        );
        assert_eq!(errors.to_string(), "invalid fields: author_id, title");
    }
}
