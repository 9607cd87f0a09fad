use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { periodicity } = cmd {
        let pool = open_db(&cfg.database)?;
        let habits = HabitLogic::list(&pool, *periodicity)?;

        match periodicity {
            Some(p) if habits.is_empty() => info(format!("No {} habits.", p)),
            None if habits.is_empty() => {
                info("No habits yet. Create one with `rhabits create <NAME>`.")
            }
            _ => print_habits(&habits, cfg),
        }
    }
    Ok(())
}

/// Habit table shared by `list` and `create`.
pub(crate) fn print_habits(habits: &[Habit], cfg: &Config) {
    let mut headers = vec!["ID", "NAME", "PERIODICITY", "CREATED"];
    if cfg.show_descriptions {
        headers.push("DESCRIPTION");
    }

    let mut table = Table::new(headers);
    for h in habits {
        let mut row = vec![
            h.id.to_string(),
            h.name.clone(),
            h.periodicity.as_str().to_string(),
            h.created_at_str(),
        ];
        if cfg.show_descriptions {
            row.push(h.description_or_dash().to_string());
        }
        table.add_row(row);
    }

    print!("{}", table.render());
}
