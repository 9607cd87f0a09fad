//! Run detection over check-off dates.
//!
//! A streak is a maximal run of calendar dates where every adjacent gap is
//! exactly the periodicity interval. Its length is the number of calendar
//! days it spans, not the number of check-offs: four weekly check-offs
//! spaced 7 days apart make a streak of 22 days.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakRun {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StreakRun {
    fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Calendar days spanned, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Sorted, one entry per calendar date.
pub fn normalize_dates<I>(dates: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut out: Vec<NaiveDate> = dates.into_iter().collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Partition the dates into maximal runs. Input order and duplicates do not
/// matter. Any gap other than `interval_days` closes the current run, a gap
/// shorter than the interval included.
pub fn runs<I>(dates: I, interval_days: i64) -> Vec<StreakRun>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut out = Vec::new();
    let mut dates = normalize_dates(dates).into_iter();

    let Some(first) = dates.next() else {
        return out;
    };

    let mut current = StreakRun::single(first);
    for date in dates {
        if (date - current.end).num_days() == interval_days {
            current.end = date;
        } else {
            out.push(current);
            current = StreakRun::single(date);
        }
    }
    out.push(current);

    out
}

/// Longest run length in days, 0 for no dates.
pub fn longest_streak_days<I>(dates: I, interval_days: i64) -> i64
where
    I: IntoIterator<Item = NaiveDate>,
{
    runs(dates, interval_days)
        .iter()
        .map(StreakRun::days)
        .max()
        .unwrap_or(0)
}

/// Length of the latest run, or 0 once more than one interval has passed
/// since its last date.
pub fn current_streak_days<I>(dates: I, interval_days: i64, today: NaiveDate) -> i64
where
    I: IntoIterator<Item = NaiveDate>,
{
    match runs(dates, interval_days).last() {
        Some(run) if (today - run.end).num_days() <= interval_days => run.days(),
        _ => 0,
    }
}
