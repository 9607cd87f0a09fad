// src/export/model.rs

use crate::models::check_off::CheckOff;
use crate::models::habit::Habit;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct CheckOffExport {
    pub id: i64,
    pub habit_id: i64,
    pub habit_name: String,
    pub periodicity: String,
    pub date: String,
    pub time: String,
}

impl CheckOffExport {
    pub fn new(check_off: &CheckOff, habit: &Habit) -> Self {
        Self {
            id: check_off.id,
            habit_id: habit.id,
            habit_name: habit.name.clone(),
            periodicity: habit.periodicity.as_str().to_string(),
            date: check_off.timestamp.format("%Y-%m-%d").to_string(),
            time: check_off.timestamp.format("%H:%M:%S").to_string(),
        }
    }
}
