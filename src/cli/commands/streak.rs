use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkoff::require_habit;
use crate::core::streak::StreakLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::today;
use crate::utils::days_label;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Streak { id, all } = cmd {
        let pool = open_db(&cfg.database)?;

        if *all {
            match StreakLogic::longest_overall(&pool)? {
                (longest, Some(habit_id)) => println!(
                    "The longest streak is {} for habit {}.",
                    bold(&days_label(longest)),
                    habit_id
                ),
                (_, None) => info("No streaks yet."),
            }
            return Ok(());
        }

        if let Some(id) = id {
            let habit = require_habit(&pool, *id)?;
            let longest = StreakLogic::longest(&pool, *id)?;
            let current = StreakLogic::current(&pool, *id, today())?;

            println!(
                "Longest streak for habit {} ({}): {}",
                habit.id,
                habit.name,
                days_label(longest)
            );
            println!("Current streak: {}", days_label(current));
        }
    }

    Ok(())
}
