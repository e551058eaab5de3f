use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

use crate::error::FieldError;

/// Classification of a [`Value`] used for capability checks and error
/// messages. `Record` and `Sequence` are the keyed kinds; everything else
/// never holds fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Record,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Record,
        }
    }

    pub fn is_keyed(self) -> bool {
        matches!(self, ValueKind::Record | ValueKind::Sequence)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::Record => "record",
        };
        f.write_str(name)
    }
}

/// Look up `field` on a value of unknown shape.
///
/// Records are indexed by key. Sequences treat the field as a numeric index
/// (`"0"`, `"1"`, ...); any other field, including `"length"`, is absent.
/// Every non-keyed kind is absent for every field. Absence is always signaled
/// through the return value; this never panics.
pub fn get_field<'a>(value: &'a Value, field: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(field),
        Value::Array(items) => field.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        _ => None,
    }
}

/// Look up `field` and convert the stored value to `T`.
///
/// An absent field is `Ok(None)`; a present field that does not deserialize
/// to `T` is a [`FieldError::Convert`] naming the field and the stored kind.
pub fn get_field_as<T: DeserializeOwned>(
    value: &Value,
    field: &str,
) -> Result<Option<T>, FieldError> {
    let Some(found) = get_field(value, field) else {
        return Ok(None);
    };
    serde_json::from_value(found.clone())
        .map(Some)
        .map_err(|source| FieldError::Convert {
            field: field.to_string(),
            kind: ValueKind::of(found),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_keyed_kinds_have_no_fields() {
        for value in [json!(null), json!(true), json!(42), json!("text")] {
            assert_eq!(get_field(&value, "name"), None);
            assert_eq!(get_field(&value, ""), None);
            assert_eq!(get_field(&value, "toString"), None);
        }
    }

    #[test]
    fn present_key_returns_value_unchanged() {
        let value = json!({"name": "Alice", "age": 30, "tags": ["a", "b"]});
        assert_eq!(get_field(&value, "name"), Some(&json!("Alice")));
        assert_eq!(get_field(&value, "age"), Some(&json!(30)));
        assert_eq!(get_field(&value, "tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn absent_key_returns_none() {
        let value = json!({"name": "Alice"});
        assert_eq!(get_field(&value, "email"), None);
    }

    #[test]
    fn null_valued_key_is_present() {
        let value = json!({"deleted_at": null});
        assert_eq!(get_field(&value, "deleted_at"), Some(&Value::Null));
    }

    #[test]
    fn sequences_index_by_numeric_field() {
        let value = json!(["a", "b", "c"]);
        assert_eq!(get_field(&value, "0"), Some(&json!("a")));
        assert_eq!(get_field(&value, "2"), Some(&json!("c")));
        assert_eq!(get_field(&value, "3"), None);
    }

    #[test]
    fn sequences_have_no_length_field() {
        let value = json!(["a", "b"]);
        assert_eq!(get_field(&value, "length"), None);
        assert_eq!(get_field(&value, "-1"), None);
    }

    #[test]
    fn kind_classification() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Sequence);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Record);
        assert!(ValueKind::Record.is_keyed());
        assert!(ValueKind::Sequence.is_keyed());
        assert!(!ValueKind::String.is_keyed());
    }

    #[test]
    fn typed_lookup_converts_present_field() {
        let value = json!({"name": "Alice", "age": 30});
        let name: Option<String> = get_field_as(&value, "name").unwrap();
        assert_eq!(name, Some("Alice".to_string()));
        let age: Option<i64> = get_field_as(&value, "age").unwrap();
        assert_eq!(age, Some(30));
    }

    #[test]
    fn typed_lookup_absent_is_ok_none() {
        let value = json!({"name": "Alice"});
        let missing: Option<String> = get_field_as(&value, "email").unwrap();
        assert_eq!(missing, None);
        let on_primitive: Option<String> = get_field_as(&json!(42), "email").unwrap();
        assert_eq!(on_primitive, None);
    }

    #[test]
    fn typed_lookup_mismatch_is_typed_error() {
        let value = json!({"age": 30});
        let err = get_field_as::<String>(&value, "age").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"age\""));
        assert!(msg.contains("number"));
    }
}
