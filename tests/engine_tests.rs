use chrono::{Duration, NaiveDate, NaiveDateTime};
use rhabits::core::checkoff::CheckOffLogic;
use rhabits::core::generate::{GenerateLogic, default_templates};
use rhabits::core::habit::HabitLogic;
use rhabits::core::streak::StreakLogic;
use rhabits::db::store::HabitStore;
use rhabits::errors::AppError;
use rhabits::models::habit::{Habit, NewHabit};
use rhabits::models::periodicity::Periodicity;
use rhabits::utils::date::parse_datetime;

mod common;
use common::memory_store;

fn at(s: &str) -> NaiveDateTime {
    parse_datetime(s).expect("valid timestamp")
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn new_habit<S: HabitStore>(store: &mut S, name: &str, periodicity: Periodicity) -> Habit {
    let input = NewHabit::new(name, None, periodicity).expect("valid habit");
    HabitLogic::create(store, &input).expect("create habit")
}

fn check_all<S: HabitStore>(store: &mut S, habit_id: i64, stamps: &[&str]) {
    for s in stamps {
        CheckOffLogic::record(store, habit_id, Some(at(s))).expect("check-off accepted");
    }
}

#[test]
fn test_daily_rejects_second_check_off_same_date() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Drink Water", Periodicity::Daily);

    CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-01 08:00"))).unwrap();

    let err = CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-01 22:30"))).unwrap_err();
    assert!(matches!(err, AppError::MultipleCheckOff(Periodicity::Daily)));
    assert_eq!(err.to_string(), "You can only check off once per day.");

    // next calendar day is fine, even less than 24h later
    CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-02 00:30"))).unwrap();

    assert_eq!(store.list_check_offs(habit.id).unwrap().len(), 2);
}

#[test]
fn test_daily_rejects_backfill_on_already_checked_date() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Read", Periodicity::Daily);

    check_all(&mut store, habit.id, &["2024-01-01 09:00", "2024-01-05 09:00"]);

    let err = CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-01 18:00"))).unwrap_err();
    assert!(matches!(err, AppError::MultipleCheckOff(_)));

    // an unchecked date in the past is accepted
    CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-03 18:00"))).unwrap();
}

#[test]
fn test_weekly_requires_seven_days() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Grocery Shopping", Periodicity::Weekly);

    CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-01 10:00"))).unwrap();

    let err = CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-07 23:59"))).unwrap_err();
    assert!(matches!(err, AppError::MultipleCheckOff(Periodicity::Weekly)));
    assert_eq!(err.to_string(), "You can only check off once every 7 days.");

    CheckOffLogic::record(&mut store, habit.id, Some(at("2024-01-08 00:00"))).unwrap();

    let last = CheckOffLogic::last(&store, habit.id).unwrap().unwrap();
    assert_eq!(last.timestamp, at("2024-01-08 00:00"));
}

#[test]
fn test_check_off_unknown_habit() {
    let mut store = memory_store();

    let err = CheckOffLogic::record(&mut store, 42, Some(at("2024-01-01"))).unwrap_err();
    assert!(matches!(err, AppError::HabitNotFound(42)));
    assert_eq!(err.to_string(), "Habit with id 42 does not exist.");

    assert!(matches!(
        StreakLogic::longest(&store, 42),
        Err(AppError::HabitNotFound(42))
    ));
    assert!(matches!(
        CheckOffLogic::last(&store, 42),
        Err(AppError::HabitNotFound(42))
    ));
}

#[test]
fn test_check_off_without_time_uses_now() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Meditate", Periodicity::Daily);

    let check_off = CheckOffLogic::record(&mut store, habit.id, None).unwrap();
    let age = rhabits::utils::date::now() - check_off.timestamp;
    assert!(age >= Duration::zero() && age < Duration::minutes(1));
}

#[test]
fn test_longest_streak_per_habit_and_overall() {
    let mut store = memory_store();
    let daily = new_habit(&mut store, "Exercise", Periodicity::Daily);
    let weekly = new_habit(&mut store, "Grocery Shopping", Periodicity::Weekly);

    check_all(
        &mut store,
        daily.id,
        &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"],
    );
    check_all(
        &mut store,
        weekly.id,
        &[
            "2024-01-01",
            "2024-01-08",
            "2024-01-15",
            "2024-01-22",
            "2024-02-14",
        ],
    );

    assert_eq!(StreakLogic::longest(&store, daily.id).unwrap(), 3);
    assert_eq!(StreakLogic::longest(&store, weekly.id).unwrap(), 22);
    assert_eq!(
        StreakLogic::longest_overall(&store).unwrap(),
        (22, Some(weekly.id))
    );
}

#[test]
fn test_longest_overall_without_check_offs() {
    let mut store = memory_store();
    assert_eq!(StreakLogic::longest_overall(&store).unwrap(), (0, None));

    new_habit(&mut store, "Exercise", Periodicity::Daily);
    assert_eq!(StreakLogic::longest_overall(&store).unwrap(), (0, None));
}

#[test]
fn test_longest_overall_tie_keeps_first_habit() {
    let mut store = memory_store();
    let first = new_habit(&mut store, "A", Periodicity::Daily);
    let second = new_habit(&mut store, "B", Periodicity::Daily);

    check_all(&mut store, first.id, &["2024-01-01", "2024-01-02"]);
    check_all(&mut store, second.id, &["2024-02-01", "2024-02-02"]);

    assert_eq!(
        StreakLogic::longest_overall(&store).unwrap(),
        (2, Some(first.id))
    );
}

#[test]
fn test_current_streak_and_details() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Exercise", Periodicity::Daily);
    check_all(
        &mut store,
        habit.id,
        &["2024-01-01 07:00", "2024-01-02 07:00", "2024-01-03 07:00"],
    );

    assert_eq!(StreakLogic::current(&store, habit.id, day("2024-01-04")).unwrap(), 3);
    assert_eq!(StreakLogic::current(&store, habit.id, day("2024-01-05")).unwrap(), 0);

    let details = HabitLogic::details(&store, habit.id, day("2024-01-03")).unwrap();
    assert_eq!(details.habit.name, "Exercise");
    assert_eq!(details.check_off_count, 3);
    assert_eq!(details.longest_streak, 3);
    assert_eq!(details.current_streak, 3);
    assert_eq!(
        details.last_check_off.map(|c| c.timestamp),
        Some(at("2024-01-03 07:00"))
    );
}

#[test]
fn test_list_filters_by_periodicity() {
    let mut store = memory_store();
    new_habit(&mut store, "Water", Periodicity::Daily);
    new_habit(&mut store, "Shopping", Periodicity::Weekly);
    new_habit(&mut store, "Read", Periodicity::Daily);

    let all = HabitLogic::list(&store, None).unwrap();
    assert_eq!(
        all.iter().map(|h| h.name.as_str()).collect::<Vec<_>>(),
        vec!["Water", "Shopping", "Read"]
    );

    let weekly = HabitLogic::list(&store, Some(Periodicity::Weekly)).unwrap();
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].name, "Shopping");
}

#[test]
fn test_new_habit_validation() {
    assert!(matches!(
        NewHabit::new("   ", None, Periodicity::Daily),
        Err(AppError::InvalidName(_))
    ));
    assert!(matches!(
        NewHabit::new(&"x".repeat(151), None, Periodicity::Daily),
        Err(AppError::InvalidName(_))
    ));
    assert!(matches!(
        NewHabit::new("Run", Some(&"y".repeat(401)), Periodicity::Daily),
        Err(AppError::InvalidDescription(_))
    ));

    let ok = NewHabit::new("  Run  ", Some("  "), Periodicity::Weekly).unwrap();
    assert_eq!(ok.name, "Run");
    assert_eq!(ok.description, None);
}

#[test]
fn test_delete_removes_habit_and_its_check_offs() {
    let mut store = memory_store();
    let doomed = new_habit(&mut store, "Doomed", Periodicity::Daily);
    let kept = new_habit(&mut store, "Kept", Periodicity::Daily);

    check_all(&mut store, doomed.id, &["2024-01-01", "2024-01-02"]);
    check_all(&mut store, kept.id, &["2024-01-01"]);

    let deleted = HabitLogic::delete(&mut store, doomed.id).unwrap();
    assert_eq!(deleted.name, "Doomed");

    assert!(store.get_habit(doomed.id).unwrap().is_none());
    assert!(store.list_check_offs(doomed.id).unwrap().is_empty());
    assert_eq!(store.list_check_offs(kept.id).unwrap().len(), 1);

    assert!(matches!(
        HabitLogic::delete(&mut store, doomed.id),
        Err(AppError::HabitNotFound(_))
    ));
}

#[test]
fn test_delete_all() {
    let mut store = memory_store();
    let a = new_habit(&mut store, "A", Periodicity::Daily);
    new_habit(&mut store, "B", Periodicity::Weekly);
    check_all(&mut store, a.id, &["2024-01-01"]);

    assert_eq!(HabitLogic::delete_all(&mut store).unwrap(), 2);
    assert!(store.list_habits().unwrap().is_empty());
    assert!(store.list_all_check_offs().unwrap().is_empty());
}

#[test]
fn test_rejected_isolated_step_keeps_earlier_steps() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Water", Periodicity::Daily);

    let accepted = store
        .run_isolated(|s| {
            let mut accepted = 0;
            for stamp in ["2024-01-01 08:00", "2024-01-01 09:00", "2024-01-02 08:00"] {
                match s.run_isolated(|s| CheckOffLogic::record(s, habit.id, Some(at(stamp)))) {
                    Ok(_) => accepted += 1,
                    Err(AppError::MultipleCheckOff(_)) => {}
                    Err(e) => return Err(e),
                }
            }
            Ok(accepted)
        })
        .unwrap();

    assert_eq!(accepted, 2);
    assert_eq!(store.list_check_offs(habit.id).unwrap().len(), 2);
}

#[test]
fn test_failed_isolated_unit_rolls_back() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Water", Periodicity::Daily);

    let result: Result<(), AppError> = store.run_isolated(|s| {
        s.add_check_off(habit.id, at("2024-01-01 08:00"))?;
        Err(AppError::Other("abort".into()))
    });

    assert!(result.is_err());
    assert!(store.list_check_offs(habit.id).unwrap().is_empty());
}

#[test]
fn test_generate_rejects_recent_start_date() {
    let mut store = memory_store();
    let today = day("2024-06-30");
    let weeks = 4;
    let start = today - Duration::weeks(i64::from(weeks) - 2);

    let err = GenerateLogic::run(&mut store, &default_templates(), start, weeks, today).unwrap_err();
    assert!(matches!(err, AppError::InvalidStartDate { .. }));

    // nothing was written
    assert!(store.list_habits().unwrap().is_empty());
}

#[test]
fn test_generate_rejects_zero_weeks() {
    let mut store = memory_store();
    let err = GenerateLogic::run(
        &mut store,
        &default_templates(),
        day("2024-01-01"),
        0,
        day("2024-06-30"),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidWeeks(0)));
}

#[test]
fn test_generate_rejects_huge_week_count() {
    let mut store = memory_store();
    let err = GenerateLogic::run(
        &mut store,
        &default_templates(),
        day("2020-01-01"),
        20_000_000,
        day("2026-10-17"),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidWeeks(20_000_000)));

    // out of calendar range even below the cap
    assert_eq!(GenerateLogic::latest_start_date(NaiveDate::MIN, 1), None);
    assert!(store.list_habits().unwrap().is_empty());
}

#[test]
fn test_generate_fills_requested_weeks() {
    let mut store = memory_store();
    let today = day("2024-06-30");
    let start = GenerateLogic::latest_start_date(today, 4).expect("date in range");
    assert_eq!(start, day("2024-06-02"));

    let report = GenerateLogic::run(&mut store, &default_templates(), start, 4, today).unwrap();

    assert_eq!(report.habits.len(), 5);
    // 4 daily habits * 28 days + 1 weekly habit * 4 weeks
    assert_eq!(report.check_offs, 4 * 28 + 4);
    assert_eq!(report.skipped, 0);
    assert_eq!(store.list_all_check_offs().unwrap().len(), 116);

    let water = &report.habits[0];
    assert_eq!(water.name, "Drink Water");
    assert_eq!(StreakLogic::longest(&store, water.id).unwrap(), 28);

    let shopping = &report.habits[4];
    assert_eq!(shopping.periodicity, Periodicity::Weekly);
    assert_eq!(StreakLogic::longest(&store, shopping.id).unwrap(), 22);

    let first = CheckOffLogic::list(&store, Some(shopping.id)).unwrap();
    assert_eq!(first[0].timestamp, at("2024-06-02 00:00:00"));

    assert_eq!(
        StreakLogic::longest_overall(&store).unwrap(),
        (28, Some(water.id))
    );
}

#[test]
fn test_details_with_backfilled_check_off() {
    let mut store = memory_store();
    let habit = new_habit(&mut store, "Read", Periodicity::Daily);
    check_all(
        &mut store,
        habit.id,
        &["2024-01-01 21:00", "2024-01-03 21:00", "2024-01-02 21:00"],
    );

    let details = HabitLogic::details(&store, habit.id, day("2024-01-04")).unwrap();
    assert_eq!(details.check_off_count, 3);
    assert_eq!(details.longest_streak, 3);
    assert_eq!(details.current_streak, 3);
    assert_eq!(
        details.last_check_off.map(|c| c.timestamp),
        Some(at("2024-01-03 21:00"))
    );
}
