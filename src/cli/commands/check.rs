use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkoff::CheckOffLogic;
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_datetime;

/// Check off a habit. A periodicity violation is reported, not returned:
/// it is an expected outcome of the command, not a failure.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { id, at } = cmd {
        let at = match at {
            Some(s) => Some(parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.clone()))?),
            None => None,
        };

        let mut pool = open_db(&cfg.database)?;

        match CheckOffLogic::record(&mut pool, *id, at) {
            Ok(check_off) => {
                audit(
                    &pool.conn,
                    "check",
                    &format!("habit #{}", id),
                    &format!("Checked off at {}", check_off.timestamp_str()),
                );
                success(format!(
                    "Checked off habit {} at {}.",
                    id,
                    check_off.timestamp.format(&cfg.date_format)
                ));
            }
            Err(e @ AppError::MultipleCheckOff(_)) => warning(e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
