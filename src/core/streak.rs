use crate::core::calculator::streak::{current_streak_days, longest_streak_days};
use crate::core::checkoff::require_habit;
use crate::db::store::HabitStore;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub struct StreakLogic;

impl StreakLogic {
    /// Longest streak of a habit, in calendar days.
    pub fn longest<S: HabitStore>(store: &S, habit_id: i64) -> AppResult<i64> {
        let habit = require_habit(store, habit_id)?;
        let check_offs = store.list_check_offs(habit_id)?;

        Ok(longest_streak_days(
            check_offs.iter().map(|c| c.date()),
            habit.periodicity.interval_days(),
        ))
    }

    /// Streak still running at `today`, in calendar days.
    pub fn current<S: HabitStore>(store: &S, habit_id: i64, today: NaiveDate) -> AppResult<i64> {
        let habit = require_habit(store, habit_id)?;
        let check_offs = store.list_check_offs(habit_id)?;

        Ok(current_streak_days(
            check_offs.iter().map(|c| c.date()),
            habit.periodicity.interval_days(),
            today,
        ))
    }

    /// Longest streak across all habits and the first habit (in enumeration
    /// order) reaching it. No habit is reported while every streak is 0.
    pub fn longest_overall<S: HabitStore>(store: &S) -> AppResult<(i64, Option<i64>)> {
        let mut longest = 0;
        let mut holder = None;

        for habit in store.list_habits()? {
            let streak = Self::longest(store, habit.id)?;
            if streak > longest {
                longest = streak;
                holder = Some(habit.id);
            }
        }

        Ok((longest, holder))
    }
}
