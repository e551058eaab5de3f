use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::FormatError;

/// The display zone a timestamp is resolved into before rendering. Defaults
/// to the ambient local zone; tests pin a named zone for determinism.
#[derive(Debug, Clone, Copy, Default)]
pub enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub fn utc() -> Self {
        Timezone::Named(chrono_tz::UTC)
    }

    /// `None`, `""`, and `"local"` mean the ambient local zone; `"utc"` and
    /// `"z"` mean UTC; anything else must be an IANA zone name.
    pub fn parse(value: Option<&str>) -> Result<Self, FormatError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::utc());
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| FormatError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Resolve a UTC instant to this zone's fixed offset at that instant.
    pub fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }
}

impl From<Tz> for Timezone {
    fn from(tz: Tz) -> Self {
        Timezone::Named(tz)
    }
}
