use crate::cli::commands::list::print_habits;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::habit::NewHabit;
use crate::ui::messages::success;

/// Create a habit, then show every habit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Create {
        name,
        description,
        periodicity,
    } = cmd
    {
        let new_habit = NewHabit::new(name, description.as_deref(), *periodicity)?;

        let mut pool = open_db(&cfg.database)?;
        let habit = HabitLogic::create(&mut pool, &new_habit)?;

        audit(
            &pool.conn,
            "create",
            &format!("habit #{}", habit.id),
            &format!("Created {} habit '{}'", habit.periodicity, habit.name),
        );

        success(format!(
            "Created habit #{} '{}' ({}).",
            habit.id, habit.name, habit.periodicity
        ));

        println!();
        print_habits(&HabitLogic::list(&pool, None)?, cfg);
    }

    Ok(())
}
