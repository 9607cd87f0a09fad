use crate::core::calculator::streak::{current_streak_days, longest_streak_days};
use crate::core::checkoff::require_habit;
use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::models::check_off::CheckOff;
use crate::models::habit::{Habit, NewHabit};
use crate::models::periodicity::Periodicity;
use crate::utils::date;
use chrono::NaiveDate;

/// Habit plus the statistics shown by `details`.
#[derive(Debug, Clone)]
pub struct HabitDetails {
    pub habit: Habit,
    pub check_off_count: usize,
    pub last_check_off: Option<CheckOff>,
    pub longest_streak: i64,
    pub current_streak: i64,
}

pub struct HabitLogic;

impl HabitLogic {
    pub fn create<S: HabitStore>(store: &mut S, habit: &NewHabit) -> AppResult<Habit> {
        store.add_habit(habit, date::now())
    }

    pub fn list<S: HabitStore>(store: &S, periodicity: Option<Periodicity>) -> AppResult<Vec<Habit>> {
        let mut habits = store.list_habits()?;
        if let Some(p) = periodicity {
            habits.retain(|h| h.periodicity == p);
        }
        Ok(habits)
    }

    pub fn details<S: HabitStore>(store: &S, habit_id: i64, today: NaiveDate) -> AppResult<HabitDetails> {
        let habit = require_habit(store, habit_id)?;
        let mut check_offs = store.list_check_offs(habit_id)?;
        check_offs.sort_by_key(|c| (c.timestamp, c.id));

        let interval = habit.periodicity.interval_days();
        let dates: Vec<NaiveDate> = check_offs.iter().map(|c| c.date()).collect();

        Ok(HabitDetails {
            check_off_count: check_offs.len(),
            longest_streak: longest_streak_days(dates.iter().copied(), interval),
            current_streak: current_streak_days(dates, interval, today),
            last_check_off: check_offs.pop(),
            habit,
        })
    }

    /// Delete a habit and, with it, all of its check-offs.
    pub fn delete<S: HabitStore>(store: &mut S, habit_id: i64) -> AppResult<Habit> {
        store.run_isolated(|store| {
            let habit = require_habit(store, habit_id)?;
            if !store.delete_habit(habit_id)? {
                return Err(AppError::HabitNotFound(habit_id));
            }
            Ok(habit)
        })
    }

    pub fn delete_all<S: HabitStore>(store: &mut S) -> AppResult<usize> {
        store.delete_all_habits()
    }
}
