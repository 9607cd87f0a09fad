use crate::db::pool::DbPool;
use crate::db::queries::{count_check_offs, count_habits};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_db_datetime;
use rusqlite::{OptionalExtension, Result};
use std::fs;

fn check_off_bound(pool: &DbPool, order: &str) -> Result<Option<String>> {
    pool.conn
        .query_row(
            &format!("SELECT date_time FROM check_offs ORDER BY date_time {order} LIMIT 1"),
            [],
            |row| row.get(0),
        )
        .optional()
}

fn habits_per_periodicity(pool: &DbPool) -> Result<Vec<(String, i64)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT periodicity, COUNT(*) FROM habits GROUP BY periodicity ORDER BY periodicity",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect()
}

/// `db --info`: file, totals, check-off range.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> Result<()> {
    let size_kb = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0) as f64 / 1024.0;

    println!();
    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {size_kb:.1} KB");

    let habits = count_habits(&pool.conn)?;
    println!("{CYAN}• Habits:{RESET} {GREEN}{habits}{RESET}");
    for (periodicity, n) in habits_per_periodicity(pool)? {
        println!("    {periodicity}: {n}");
    }

    let check_offs = count_check_offs(&pool.conn)?;
    println!("{CYAN}• Check-offs:{RESET} {GREEN}{check_offs}{RESET}");

    let first = check_off_bound(pool, "ASC")?;
    let last = check_off_bound(pool, "DESC")?;
    let dash = format!("{GREY}--{RESET}");

    println!("{CYAN}• Date range:{RESET}");
    println!("    from: {}", first.as_deref().unwrap_or(&dash));
    println!("    to:   {}", last.as_deref().unwrap_or(&dash));

    if let (Some(f), Some(l)) = (
        first.as_deref().and_then(parse_db_datetime),
        last.as_deref().and_then(parse_db_datetime),
    ) {
        let days = (l.date() - f.date()).num_days() + 1;
        println!(
            "{CYAN}• Check-offs per day:{RESET} {:.2}",
            check_offs as f64 / days as f64
        );
    }

    println!();
    Ok(())
}
