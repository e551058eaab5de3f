mod timestamp;
mod timezone;

pub use timestamp::Timestamp;
pub use timezone::Timezone;

/// Rendered in place of any timestamp string that could not be parsed.
pub const INVALID_TIMESTAMP: &str = "invalid date";

// British English ordering: day before month, 12-hour clock, lowercase
// meridiem. Day and hour carry no leading zero; minute is always two digits.
const DATE_TIME_FORMAT: &str = "%-d %B %Y, %-I:%M %P";
const DATE_FORMAT: &str = "%-d %B %Y";
const TIME_FORMAT: &str = "%-I:%M %P";

/// Render date and time, e.g. `15 March 2024, 2:30 pm`, in the ambient local
/// zone.
pub fn format_date_time(iso: &str) -> String {
    format_date_time_in(iso, Timezone::Local)
}

/// Render date and time in an explicit display zone.
pub fn format_date_time_in(iso: &str, zone: Timezone) -> String {
    render(iso, zone, DATE_TIME_FORMAT)
}

/// Render the date only, e.g. `15 March 2024`, in the ambient local zone.
pub fn format_date(iso: &str) -> String {
    format_date_in(iso, Timezone::Local)
}

/// Render the date only in an explicit display zone.
pub fn format_date_in(iso: &str, zone: Timezone) -> String {
    render(iso, zone, DATE_FORMAT)
}

/// Render the time only, e.g. `2:30 pm`, in the ambient local zone.
pub fn format_time(iso: &str) -> String {
    format_time_in(iso, Timezone::Local)
}

/// Render the time only in an explicit display zone.
pub fn format_time_in(iso: &str, zone: Timezone) -> String {
    render(iso, zone, TIME_FORMAT)
}

fn render(iso: &str, zone: Timezone, format: &str) -> String {
    match Timestamp::parse(iso) {
        Timestamp::Valid(utc) => zone.to_fixed_offset(utc).format(format).to_string(),
        Timestamp::Invalid => INVALID_TIMESTAMP.to_string(),
    }
}
