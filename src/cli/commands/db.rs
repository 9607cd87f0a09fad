use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// Database maintenance. Flags combine and run in a fixed order:
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            info("Running migrations…");
            run_pending_migrations(&pool.conn)?;
            success("Habit schema is up to date.");
        }

        if *show_info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            info("Running integrity check…");
            let verdict: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if verdict == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", verdict));
            }
        }

        if *vacuum {
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            audit(&pool.conn, "vacuum", "", "Database compacted");
            success("Vacuum completed.");
        }
    }

    Ok(())
}
