use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckOff {
    pub id: i64,                  // ⇔ check_offs.id
    pub habit_id: i64,            // ⇔ check_offs.habit_id (owning habit)
    pub timestamp: NaiveDateTime, // ⇔ check_offs.date_time (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl CheckOff {
    /// Calendar date of the check-off, ignoring the time of day.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
