use rhabits::db::initialize::init_db;
use rhabits::db::pool::DbPool;
use rhabits::db::store::HabitStore;
use rhabits::models::periodicity::Periodicity;
use rusqlite::Connection;

fn legacy_store() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        r#"
        CREATE TABLE habits (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            description   TEXT,
            periodicity   INTEGER NOT NULL,
            creation_date TEXT NOT NULL
        );
        CREATE TABLE check_offs (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            habit_id   INTEGER NOT NULL,
            date_time  TEXT NOT NULL
        );

        INSERT INTO habits (name, description, periodicity, creation_date)
        VALUES ('Exercise', 'Do 30 minutes of exercise', 1, '2024-01-01 08:00:00.123456'),
               ('Grocery Shopping', '', 2, '2024-01-02 09:00:00');

        INSERT INTO check_offs (habit_id, date_time)
        VALUES (1, '2024-01-01 08:30:00.5'),
               (1, '2024-01-02 08:30:00'),
               (2, '2024-01-03 18:00:00');
        "#,
    )
    .expect("legacy schema");
    DbPool::from_connection(conn)
}

#[test]
fn test_legacy_habits_are_migrated() {
    let store = legacy_store();
    init_db(&store.conn).expect("migrate");

    let habits = store.list_habits().expect("list habits");
    assert_eq!(habits.len(), 2);

    assert_eq!(habits[0].name, "Exercise");
    assert_eq!(habits[0].periodicity, Periodicity::Daily);
    assert_eq!(habits[0].created_at_str(), "2024-01-01 08:00");

    assert_eq!(habits[1].periodicity, Periodicity::Weekly);
    assert_eq!(habits[1].description, None);

    let check_offs = store.list_check_offs(1).expect("list check-offs");
    assert_eq!(check_offs.len(), 2);
}

#[test]
fn test_migration_is_recorded_and_idempotent() {
    let store = legacy_store();
    init_db(&store.conn).expect("first run");
    init_db(&store.conn).expect("second run");

    let applied: i64 = store
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("count migrations");
    assert_eq!(applied, 1);
    assert_eq!(store.list_habits().expect("list habits").len(), 2);
}

#[test]
fn test_fresh_database_gets_current_schema() {
    let store = DbPool::in_memory().expect("open in-memory db");
    init_db(&store.conn).expect("init");

    assert!(store.list_habits().expect("list habits").is_empty());
    assert!(store.list_all_check_offs().expect("list check-offs").is_empty());
}

#[test]
fn test_failed_rebuild_leaves_no_open_transaction() {
    let store = legacy_store();
    // a leftover table blocks the rename step
    store
        .conn
        .execute_batch("CREATE TABLE habits_old (id INTEGER);")
        .expect("leftover table");

    let err = init_db(&store.conn).unwrap_err();
    assert!(err.to_string().contains("Failed to rebuild habits table"));

    assert!(store.conn.is_autocommit());

    let legacy_rows: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM habits WHERE creation_date IS NOT NULL", [], |row| {
            row.get(0)
        })
        .expect("legacy table intact");
    assert_eq!(legacy_rows, 2);
}
