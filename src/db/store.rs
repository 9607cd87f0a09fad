//! The `HabitStore` trait: the query contract the habit engine consumes.
//!
//! The engine in `crate::core` is written against this trait only; the
//! SQLite-backed [`DbPool`](crate::db::pool::DbPool) is the implementation
//! used by the CLI and by the tests.

use crate::errors::AppResult;
use crate::models::check_off::CheckOff;
use crate::models::habit::{Habit, NewHabit};
use chrono::NaiveDateTime;

pub trait HabitStore {
    // ── Habits ────────────────────────────────────────────────────────────

    /// Retrieve a habit by id. Returns `None` if not found.
    fn get_habit(&self, id: i64) -> AppResult<Option<Habit>>;

    /// List all habits in enumeration order (ascending id).
    fn list_habits(&self) -> AppResult<Vec<Habit>>;

    /// Persist a new habit and return it with its assigned id.
    fn add_habit(&mut self, habit: &NewHabit, created_at: NaiveDateTime) -> AppResult<Habit>;

    /// Delete a habit together with its check-offs.
    /// Returns `false` if no habit had that id.
    fn delete_habit(&mut self, id: i64) -> AppResult<bool>;

    /// Delete every habit and every check-off. Returns the number of habits.
    fn delete_all_habits(&mut self) -> AppResult<usize>;

    // ── Check-offs ────────────────────────────────────────────────────────

    /// Check-offs of one habit. Callers must not rely on the order.
    fn list_check_offs(&self, habit_id: i64) -> AppResult<Vec<CheckOff>>;

    /// Check-offs of every habit, oldest first.
    fn list_all_check_offs(&self) -> AppResult<Vec<CheckOff>>;

    /// Latest check-off of a habit by timestamp.
    fn most_recent_check_off(&self, habit_id: i64) -> AppResult<Option<CheckOff>>;

    /// Persist a check-off. No validation happens at this level.
    fn add_check_off(&mut self, habit_id: i64, timestamp: NaiveDateTime) -> AppResult<CheckOff>;

    // ── Transactions ──────────────────────────────────────────────────────

    /// Run `f` as one atomic unit: its writes are committed if it returns
    /// `Ok` and rolled back if it returns `Err`. Calls nest; a rolled back
    /// inner unit leaves the writes of the enclosing unit intact.
    fn run_isolated<T, F>(&mut self, f: F) -> AppResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> AppResult<T>;
}
