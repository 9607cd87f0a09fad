use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate::{GenerateLogic, default_templates};
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::{parse_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate { start_date, weeks } = cmd {
        let start = parse_date(start_date).ok_or_else(|| {
            AppError::InvalidDate(format!("{}. Use format YYYY-MM-DD.", start_date))
        })?;
        let weeks = weeks.unwrap_or(cfg.default_weeks);

        info(format!(
            "Generating data starting from {} for {} weeks...",
            start, weeks
        ));

        let mut pool = open_db(&cfg.database)?;
        let report = GenerateLogic::run(&mut pool, &default_templates(), start, weeks, today())?;

        audit(
            &pool.conn,
            "generate",
            &start.to_string(),
            &format!(
                "Generated {} habits and {} check-offs over {} weeks",
                report.habits.len(),
                report.check_offs,
                weeks
            ),
        );

        success(format!(
            "Created {} habits with {} check-offs ({} skipped).",
            report.habits.len(),
            report.check_offs,
            report.skipped
        ));
        for habit in &report.habits {
            println!("  #{} {} ({})", habit.id, habit.name, habit.periodicity);
        }
    }

    Ok(())
}
