use crate::errors::{AppError, AppResult};
use crate::models::check_off::CheckOff;
use crate::models::habit::{Habit, NewHabit};
use crate::models::periodicity::Periodicity;
use crate::utils::date::{format_db_datetime, parse_db_datetime};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_habit_row(row: &Row) -> Result<Habit> {
    let periodicity_str: String = row.get("periodicity")?;
    let periodicity = Periodicity::from_db_str(&periodicity_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidPeriodicity(periodicity_str.clone())))?;

    let created_str: String = row.get("created_at")?;
    let created_at = parse_db_datetime(&created_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidDateTime(created_str.clone())))?;

    Ok(Habit {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        periodicity,
        created_at,
    })
}

pub fn map_check_off_row(row: &Row) -> Result<CheckOff> {
    let ts_str: String = row.get("date_time")?;
    let timestamp = parse_db_datetime(&ts_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidDateTime(ts_str.clone())))?;

    Ok(CheckOff {
        id: row.get("id")?,
        habit_id: row.get("habit_id")?,
        timestamp,
    })
}

// ---------------------------------------------------------------------------
// Habits
// ---------------------------------------------------------------------------

pub fn insert_habit(conn: &Connection, habit: &NewHabit, created_at: &NaiveDateTime) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO habits (name, description, periodicity, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            habit.name,
            habit.description,
            habit.periodicity.to_db_str(),
            format_db_datetime(created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_habit(conn: &Connection, id: i64) -> AppResult<Option<Habit>> {
    let habit = conn
        .query_row(
            "SELECT id, name, description, periodicity, created_at
             FROM habits WHERE id = ?1",
            [id],
            map_habit_row,
        )
        .optional()?;
    Ok(habit)
}

/// All habits in enumeration order (ascending id).
pub fn load_habits(conn: &Connection) -> AppResult<Vec<Habit>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, periodicity, created_at
         FROM habits ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_habit_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_habit_row(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM habits WHERE id = ?1", [id])?)
}

pub fn delete_all_habit_rows(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM habits", [])?)
}

pub fn count_habits(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))
}

// ---------------------------------------------------------------------------
// Check-offs
// ---------------------------------------------------------------------------

pub fn insert_check_off(conn: &Connection, habit_id: i64, timestamp: &NaiveDateTime) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO check_offs (habit_id, date_time) VALUES (?1, ?2)",
        params![habit_id, format_db_datetime(timestamp)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Check-offs of one habit, oldest first.
pub fn load_check_offs(conn: &Connection, habit_id: i64) -> AppResult<Vec<CheckOff>> {
    let mut stmt = conn.prepare(
        "SELECT id, habit_id, date_time FROM check_offs
         WHERE habit_id = ?1
         ORDER BY date_time ASC, id ASC",
    )?;

    let rows = stmt.query_map([habit_id], map_check_off_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_check_offs(conn: &Connection) -> AppResult<Vec<CheckOff>> {
    let mut stmt = conn.prepare(
        "SELECT id, habit_id, date_time FROM check_offs
         ORDER BY date_time ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_check_off_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_last_check_off(conn: &Connection, habit_id: i64) -> AppResult<Option<CheckOff>> {
    let check_off = conn
        .query_row(
            "SELECT id, habit_id, date_time FROM check_offs
             WHERE habit_id = ?1
             ORDER BY date_time DESC, id DESC
             LIMIT 1",
            [habit_id],
            map_check_off_row,
        )
        .optional()?;
    Ok(check_off)
}

pub fn delete_check_offs_for_habit(conn: &Connection, habit_id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM check_offs WHERE habit_id = ?1", [habit_id])?)
}

pub fn delete_all_check_offs(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM check_offs", [])?)
}

pub fn count_check_offs(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM check_offs", [], |row| row.get(0))
}

// ---------------------------------------------------------------------------
// Internal log
// ---------------------------------------------------------------------------

pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
