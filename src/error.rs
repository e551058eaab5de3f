use thiserror::Error;

use crate::access::ValueKind;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("field \"{field}\" holds a {kind} value that does not convert: {source}")]
    Convert {
        field: String,
        kind: ValueKind,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid timezone: {input}")]
    InvalidTimezone { input: String },
}
