//! Safe field access on untyped JSON values, and timestamp formatting
//! following British English display conventions (day month year, 12-hour
//! clock).
//!
//! The two halves are independent: [`get_field`] / [`get_field_as`] inspect a
//! [`serde_json::Value`] of unknown shape without panicking, and the
//! `format_*` functions render an ISO-8601 string for display, falling back
//! to the [`INVALID_TIMESTAMP`] sentinel when the string cannot be parsed.

mod access;
mod error;
mod fmt;

pub use access::{ValueKind, get_field, get_field_as};
pub use error::{FieldError, FormatError};
pub use fmt::{
    INVALID_TIMESTAMP, Timestamp, Timezone, format_date, format_date_in, format_date_time,
    format_date_time_in, format_time, format_time_in,
};
