use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// An ISO-8601 string parsed into a point in time, or the invalid sentinel
/// when the string is unparseable. Parsing never fails loudly; rendering an
/// `Invalid` timestamp produces a sentinel string instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Valid(DateTime<Utc>),
    Invalid,
}

impl Timestamp {
    /// Accepts RFC 3339 date-times, offset-less date-times (read as UTC),
    /// and bare dates (read as midnight UTC).
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Timestamp::Valid(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Timestamp::Valid(naive.and_utc());
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Timestamp::Valid(date.and_time(NaiveTime::MIN).and_utc());
        }
        Timestamp::Invalid
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Timestamp::Valid(_))
    }
}
