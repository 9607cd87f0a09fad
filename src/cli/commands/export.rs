use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        habit,
        force,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        let exported = ExportLogic::export(&pool, *format, file, *habit, *force)?;

        if exported > 0 {
            audit(
                &pool.conn,
                "export",
                file,
                &format!("Exported {} check-offs as {}", exported, format.as_str()),
            );
        }
    }
    Ok(())
}
