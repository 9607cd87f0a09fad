use crate::core::checkoff::CheckOffLogic;
use crate::core::habit::HabitLogic;
use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::models::habit::{Habit, NewHabit};
use crate::models::periodicity::Periodicity;
use chrono::{Duration, NaiveDate, NaiveTime};

/// A predefined habit used to seed example data.
#[derive(Debug, Clone)]
pub struct HabitTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub periodicity: Periodicity,
}

pub fn default_templates() -> Vec<HabitTemplate> {
    vec![
        HabitTemplate {
            name: "Drink Water",
            description: "Drink 2 liters of water",
            periodicity: Periodicity::Daily,
        },
        HabitTemplate {
            name: "Exercise",
            description: "Do 30 minutes of exercise",
            periodicity: Periodicity::Daily,
        },
        HabitTemplate {
            name: "Read a Book",
            description: "Read a book for 30 minutes",
            periodicity: Periodicity::Daily,
        },
        HabitTemplate {
            name: "Meditate",
            description: "Meditate for 10 minutes",
            periodicity: Periodicity::Daily,
        },
        HabitTemplate {
            name: "Grocery Shopping",
            description: "Do grocery shopping",
            periodicity: Periodicity::Weekly,
        },
    ]
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub habits: Vec<Habit>,
    pub check_offs: usize,
    pub skipped: usize,
}

/// Upper bound for `weeks`, about a century of history.
pub const MAX_WEEKS: u32 = 5200;

pub struct GenerateLogic;

impl GenerateLogic {
    /// Latest start date that still puts `weeks` weeks of history in the past.
    /// `None` when that date is outside the calendar range.
    pub fn latest_start_date(today: NaiveDate, weeks: u32) -> Option<NaiveDate> {
        Duration::try_weeks(i64::from(weeks)).and_then(|span| today.checked_sub_signed(span))
    }

    /// Create the template habits and back-fill `weeks` weeks of check-offs
    /// starting at `start_date`.
    ///
    /// Each check-off attempt is its own isolated unit: a step rejected by
    /// the periodicity rules is rolled back and skipped, earlier steps stay.
    /// Any other error aborts and rolls back the whole generation.
    pub fn run<S: HabitStore>(
        store: &mut S,
        templates: &[HabitTemplate],
        start_date: NaiveDate,
        weeks: u32,
        today: NaiveDate,
    ) -> AppResult<GenerationReport> {
        if weeks == 0 || weeks > MAX_WEEKS {
            return Err(AppError::InvalidWeeks(weeks));
        }

        let latest = Self::latest_start_date(today, weeks).ok_or(AppError::InvalidWeeks(weeks))?;
        if start_date > latest {
            return Err(AppError::InvalidStartDate {
                start: start_date,
                latest,
            });
        }

        let end = Duration::try_weeks(i64::from(weeks))
            .and_then(|span| start_date.checked_add_signed(span))
            .ok_or(AppError::InvalidWeeks(weeks))?;

        store.run_isolated(|store| {
            let mut report = GenerationReport::default();

            for template in templates {
                let new_habit = NewHabit::new(
                    template.name,
                    Some(template.description),
                    template.periodicity,
                )?;
                report.habits.push(HabitLogic::create(store, &new_habit)?);
            }

            for habit in &report.habits {
                let step = Duration::days(habit.periodicity.interval_days());
                let mut current = start_date;

                while current < end {
                    let at = current.and_time(NaiveTime::MIN);
                    match store.run_isolated(|s| CheckOffLogic::record(s, habit.id, Some(at))) {
                        Ok(_) => report.check_offs += 1,
                        Err(AppError::MultipleCheckOff(_)) => report.skipped += 1,
                        Err(e) => return Err(e),
                    }
                    current += step;
                }
            }

            Ok(report)
        })
    }
}
