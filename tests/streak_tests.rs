use chrono::NaiveDate;
use rhabits::core::calculator::streak::{
    StreakRun, current_streak_days, longest_streak_days, normalize_dates, runs,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn dates(list: &[&str]) -> Vec<NaiveDate> {
    list.iter().map(|s| d(s)).collect()
}

#[test]
fn test_daily_streak_breaks_on_missing_day() {
    let input = dates(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"]);
    assert_eq!(longest_streak_days(input, 1), 3);
}

#[test]
fn test_weekly_streak_counts_span_in_days() {
    let input = dates(&[
        "2024-01-01",
        "2024-01-08",
        "2024-01-15",
        "2024-01-22",
        "2024-02-14",
    ]);
    assert_eq!(longest_streak_days(input, 7), 22);
}

#[test]
fn test_no_dates_means_no_streak() {
    assert_eq!(longest_streak_days(Vec::new(), 1), 0);
    assert_eq!(longest_streak_days(Vec::new(), 7), 0);
}

#[test]
fn test_single_check_off_is_one_day() {
    assert_eq!(longest_streak_days(dates(&["2024-03-10"]), 7), 1);
}

#[test]
fn test_input_order_does_not_matter() {
    let sorted = dates(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"]);
    let shuffled = dates(&["2024-01-05", "2024-01-02", "2024-01-03", "2024-01-01"]);
    assert_eq!(
        longest_streak_days(sorted, 1),
        longest_streak_days(shuffled, 1)
    );
}

#[test]
fn test_duplicate_dates_are_ignored() {
    let input = dates(&[
        "2024-01-01",
        "2024-01-01",
        "2024-01-02",
        "2024-01-02",
        "2024-01-03",
    ]);
    assert_eq!(longest_streak_days(input, 1), 3);
}

#[test]
fn test_gap_shorter_than_interval_breaks_weekly_run() {
    // 01-01 → 01-08 is a week, 01-08 → 01-12 is only 4 days
    let input = dates(&["2024-01-01", "2024-01-08", "2024-01-12", "2024-01-19"]);
    let found = runs(input, 7);

    assert_eq!(
        found,
        vec![
            StreakRun {
                start: d("2024-01-01"),
                end: d("2024-01-08"),
            },
            StreakRun {
                start: d("2024-01-12"),
                end: d("2024-01-19"),
            },
        ]
    );
    assert_eq!(found[0].days(), 8);
}

#[test]
fn test_gap_of_six_or_eight_days_is_not_a_week() {
    assert_eq!(longest_streak_days(dates(&["2024-01-01", "2024-01-07"]), 7), 1);
    assert_eq!(longest_streak_days(dates(&["2024-01-01", "2024-01-09"]), 7), 1);
}

#[test]
fn test_normalize_sorts_and_dedups() {
    let out = normalize_dates(dates(&["2024-01-03", "2024-01-01", "2024-01-03"]));
    assert_eq!(out, dates(&["2024-01-01", "2024-01-03"]));
}

#[test]
fn test_current_streak_daily() {
    let input = dates(&["2024-01-01", "2024-01-02", "2024-01-03"]);

    assert_eq!(current_streak_days(input.clone(), 1, d("2024-01-03")), 3);
    assert_eq!(current_streak_days(input.clone(), 1, d("2024-01-04")), 3);
    assert_eq!(current_streak_days(input, 1, d("2024-01-05")), 0);
}

#[test]
fn test_current_streak_uses_latest_run_only() {
    let input = dates(&[
        "2024-01-01",
        "2024-01-08",
        "2024-01-15",
        "2024-01-22",
        "2024-02-14",
    ]);

    assert_eq!(current_streak_days(input.clone(), 7, d("2024-02-20")), 1);
    assert_eq!(current_streak_days(input, 7, d("2024-02-22")), 0);
}
