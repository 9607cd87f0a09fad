use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkoff::CheckOffLogic;
use crate::core::habit::HabitLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::CheckOffs { habit } = cmd {
        let pool = open_db(&cfg.database)?;

        let check_offs = CheckOffLogic::list(&pool, *habit)?;
        if check_offs.is_empty() {
            info("No check offs yet");
            return Ok(());
        }

        let names: HashMap<i64, String> = HabitLogic::list(&pool, None)?
            .into_iter()
            .map(|h| (h.id, h.name))
            .collect();

        let mut table = Table::new(["ID", "HABIT", "NAME", "CHECKED OFF"]);
        for c in &check_offs {
            table.add_row(vec![
                c.id.to_string(),
                c.habit_id.to_string(),
                names.get(&c.habit_id).cloned().unwrap_or_default(),
                c.timestamp.format(&cfg.date_format).to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
