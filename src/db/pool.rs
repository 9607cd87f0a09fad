//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! `DbPool` owns the single connection of a CLI invocation and implements
//! [`HabitStore`] on top of `db::queries`.

use crate::db::queries;
use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::models::check_off::CheckOff;
use crate::models::habit::{Habit, NewHabit};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    savepoint_depth: u32,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self::from_connection(conn))
    }

    /// Private in-memory database, mainly for tests.
    pub fn in_memory() -> Result<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            savepoint_depth: 0,
        }
    }
}

impl HabitStore for DbPool {
    fn get_habit(&self, id: i64) -> AppResult<Option<Habit>> {
        queries::load_habit(&self.conn, id)
    }

    fn list_habits(&self) -> AppResult<Vec<Habit>> {
        queries::load_habits(&self.conn)
    }

    fn add_habit(&mut self, habit: &NewHabit, created_at: NaiveDateTime) -> AppResult<Habit> {
        let id = queries::insert_habit(&self.conn, habit, &created_at)?;
        Ok(Habit {
            id,
            name: habit.name.clone(),
            description: habit.description.clone(),
            periodicity: habit.periodicity,
            created_at,
        })
    }

    fn delete_habit(&mut self, id: i64) -> AppResult<bool> {
        // cascade: check-offs first, then the owning habit
        self.run_isolated(|pool| {
            queries::delete_check_offs_for_habit(&pool.conn, id)?;
            Ok(queries::delete_habit_row(&pool.conn, id)? > 0)
        })
    }

    fn delete_all_habits(&mut self) -> AppResult<usize> {
        self.run_isolated(|pool| {
            queries::delete_all_check_offs(&pool.conn)?;
            queries::delete_all_habit_rows(&pool.conn)
        })
    }

    fn list_check_offs(&self, habit_id: i64) -> AppResult<Vec<CheckOff>> {
        queries::load_check_offs(&self.conn, habit_id)
    }

    fn list_all_check_offs(&self) -> AppResult<Vec<CheckOff>> {
        queries::load_all_check_offs(&self.conn)
    }

    fn most_recent_check_off(&self, habit_id: i64) -> AppResult<Option<CheckOff>> {
        queries::load_last_check_off(&self.conn, habit_id)
    }

    fn add_check_off(&mut self, habit_id: i64, timestamp: NaiveDateTime) -> AppResult<CheckOff> {
        let id = queries::insert_check_off(&self.conn, habit_id, &timestamp)?;
        Ok(CheckOff {
            id,
            habit_id,
            timestamp,
        })
    }

    fn run_isolated<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        // SAVEPOINTs nest, and outside a transaction the outermost one
        // behaves like BEGIN ... COMMIT.
        let name = format!("isolated_{}", self.savepoint_depth);
        self.conn.execute_batch(&format!("SAVEPOINT {name};"))?;
        self.savepoint_depth += 1;

        let result = f(self);

        self.savepoint_depth -= 1;
        match result {
            Ok(value) => {
                self.conn.execute_batch(&format!("RELEASE {name};"))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self
                    .conn
                    .execute_batch(&format!("ROLLBACK TO {name}; RELEASE {name};"))
                {
                    return Err(AppError::Other(format!(
                        "rollback failed ({rollback_err}) after: {err}"
                    )));
                }
                Err(err)
            }
        }
    }
}
