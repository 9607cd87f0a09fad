use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkoff::CheckOffLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Last { id } = cmd {
        let pool = open_db(&cfg.database)?;

        match CheckOffLogic::last(&pool, *id)? {
            Some(c) => println!("Last check off was {}", c.timestamp.format(&cfg.date_format)),
            None => println!("No check offs yet"),
        }
    }

    Ok(())
}
