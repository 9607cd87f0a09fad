use crate::core::backup::zip_file;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result};
use std::path::Path;

const LEGACY_HABITS_MIGRATION: &str = "20240301_0001_habits_modern_schema";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

const HABITS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS habits (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        name         TEXT NOT NULL,
        description  TEXT,
        periodicity  TEXT NOT NULL CHECK(periodicity IN ('daily','weekly')),
        created_at   TEXT NOT NULL
    );
"#;

const CHECK_OFFS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS check_offs (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        habit_id   INTEGER NOT NULL REFERENCES habits(id),
        date_time  TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_check_offs_habit_time ON check_offs(habit_id, date_time);
"#;

/// Legacy databases have `creation_date` and an integer periodicity.
fn habits_is_legacy(conn: &Connection) -> Result<bool> {
    Ok(table_exists(conn, "habits")? && table_has_column(conn, "habits", "creation_date")?)
}

fn backup_before_migration(db_path: &str) -> AppResult<()> {
    let src = Path::new(db_path);
    let backup_name = format!(
        "{}-backup_db_pre_modern_schema.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let Some(parent) = src.parent() else {
        warning("Could not determine DB directory, backup skipped.");
        return Ok(());
    };

    let backup_path = parent.join(backup_name);
    zip_file(src, &backup_path)?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Rebuild a legacy `habits` table in the modern schema.
fn migrate_legacy_habits(conn: &Connection) -> AppResult<()> {
    warning("Legacy habits schema detected, rebuilding habits table...");

    conn.execute_batch("PRAGMA foreign_keys=OFF; BEGIN;")?;

    let rebuilt = conn.execute_batch(&format!(
        r#"
        ALTER TABLE habits RENAME TO habits_old;

        {HABITS_DDL}

        INSERT INTO habits (id, name, description, periodicity, created_at)
        SELECT id,
               COALESCE(NULLIF(TRIM(name), ''), 'Unnamed habit'),
               NULLIF(TRIM(description), ''),
               CASE CAST(periodicity AS INTEGER) WHEN 2 THEN 'weekly' ELSE 'daily' END,
               COALESCE(creation_date, datetime('now', 'localtime'))
        FROM habits_old;

        DROP TABLE habits_old;
        "#
    ))
    .and_then(|_| {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Rebuilt habits table with text periodicity')",
            [LEGACY_HABITS_MIGRATION],
        )
    });

    // the transaction never outlives this function
    let finish = if rebuilt.is_ok() { "COMMIT;" } else { "ROLLBACK;" };
    let closed = conn.execute_batch(&format!("{finish} PRAGMA foreign_keys=ON;"));

    rebuilt.map_err(|e| AppError::Migration(format!("Failed to rebuild habits table: {}", e)))?;
    closed?;

    success(format!(
        "Migration applied: {} → habits table uses the modern schema",
        LEGACY_HABITS_MIGRATION
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Legacy habits table → safety backup, then rebuild
    if habits_is_legacy(conn)? && !migration_applied(conn, LEGACY_HABITS_MIGRATION)? {
        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path, backup skipped.");
        }

        migrate_legacy_habits(conn)?;
    }

    // 3) Create missing tables (no-op on an up to date schema)
    conn.execute_batch(HABITS_DDL)?;
    conn.execute_batch(CHECK_OFFS_DDL)?;

    Ok(())
}
