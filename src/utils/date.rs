use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Storage format of every timestamp column. Zero padded, so lexical order
/// matches chronological order.
pub const DB_DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local wall-clock time, evaluated on every call.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a user supplied timestamp.
///
/// Accepted forms:
/// - `YYYY-MM-DD`             → midnight of that day
/// - `YYYY-MM-DD HH:MM`
/// - `YYYY-MM-DD HH:MM:SS`
/// - the same with `T` as separator
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Some(d) = parse_date(s) {
        return Some(d.and_time(NaiveTime::MIN));
    }

    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse a timestamp read from the database. Rows written by the legacy tool
/// carry fractional seconds, rows written by us do not; `%.f` accepts both.
pub fn parse_db_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").ok()
}

pub fn format_db_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DB_DATETIME_FMT).to_string()
}
