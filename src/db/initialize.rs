use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)
}

/// Open the configured database and make sure its schema is current.
/// Every command that touches habits goes through here.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
