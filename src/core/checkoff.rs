use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::models::check_off::CheckOff;
use crate::models::habit::Habit;
use crate::models::periodicity::Periodicity;
use crate::utils::date;
use chrono::NaiveDateTime;

/// High-level business logic for check-offs.
pub struct CheckOffLogic;

impl CheckOffLogic {
    /// Record a check-off for `habit_id`.
    ///
    /// `at = None` means "now", evaluated at this call. Validation and the
    /// insert run as one isolated unit, so two callers cannot both pass the
    /// check and both write.
    pub fn record<S: HabitStore>(
        store: &mut S,
        habit_id: i64,
        at: Option<NaiveDateTime>,
    ) -> AppResult<CheckOff> {
        let at = at.unwrap_or_else(date::now);

        store.run_isolated(|store| {
            let habit = require_habit(store, habit_id)?;

            match habit.periodicity {
                Periodicity::Daily => {
                    let existing = store.list_check_offs(habit_id)?;
                    Self::ensure_day_is_free(&existing, at)?;
                }
                Periodicity::Weekly => {
                    let last = store.most_recent_check_off(habit_id)?;
                    Self::ensure_week_has_passed(last.as_ref(), at)?;
                }
            }

            store.add_check_off(habit_id, at)
        })
    }

    /// Daily rule: no other check-off on the same calendar date.
    pub fn ensure_day_is_free(existing: &[CheckOff], at: NaiveDateTime) -> AppResult<()> {
        if existing.iter().any(|c| c.date() == at.date()) {
            return Err(AppError::MultipleCheckOff(Periodicity::Daily));
        }
        Ok(())
    }

    /// Weekly rule: at least 7 whole days since the most recent check-off.
    /// A timestamp before the most recent check-off is rejected as well.
    pub fn ensure_week_has_passed(last: Option<&CheckOff>, at: NaiveDateTime) -> AppResult<()> {
        if let Some(last) = last {
            let days_since = (at.date() - last.date()).num_days();
            if days_since < Periodicity::Weekly.interval_days() {
                return Err(AppError::MultipleCheckOff(Periodicity::Weekly));
            }
        }
        Ok(())
    }

    pub fn last<S: HabitStore>(store: &S, habit_id: i64) -> AppResult<Option<CheckOff>> {
        require_habit(store, habit_id)?;
        store.most_recent_check_off(habit_id)
    }

    /// Check-offs oldest first, for one habit or for all of them.
    pub fn list<S: HabitStore>(store: &S, habit_id: Option<i64>) -> AppResult<Vec<CheckOff>> {
        match habit_id {
            Some(id) => {
                require_habit(store, id)?;
                let mut out = store.list_check_offs(id)?;
                out.sort_by_key(|c| (c.timestamp, c.id));
                Ok(out)
            }
            None => store.list_all_check_offs(),
        }
    }
}

pub(crate) fn require_habit<S: HabitStore>(store: &S, habit_id: i64) -> AppResult<Habit> {
    store
        .get_habit(habit_id)?
        .ok_or(AppError::HabitNotFound(habit_id))
}
