use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkoff::require_habit;
use crate::core::habit::HabitLogic;
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { id, all, force } = cmd {
        let mut pool = open_db(&cfg.database)?;

        if *all {
            if !*force && !confirm("Delete ALL habits and check-offs? This action is irreversible.") {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = HabitLogic::delete_all(&mut pool)?;
            audit(
                &pool.conn,
                "delete_all",
                "",
                &format!("Deleted {} habits", removed),
            );
            success(format!("Deleted {} habits and all their check-offs.", removed));
            return Ok(());
        }

        if let Some(id) = id {
            // fail early on unknown ids, before prompting
            let habit = require_habit(&pool, *id)?;

            if !*force
                && !confirm(format!(
                    "Delete habit #{} '{}' and all its check-offs? This action is irreversible.",
                    habit.id, habit.name
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let deleted = HabitLogic::delete(&mut pool, *id)?;
            audit(
                &pool.conn,
                "delete",
                &format!("habit #{}", deleted.id),
                &format!("Deleted habit '{}'", deleted.name),
            );
            success(format!("Habit #{} '{}' has been deleted.", deleted.id, deleted.name));
        }
    }

    Ok(())
}
