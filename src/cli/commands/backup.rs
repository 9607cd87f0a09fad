use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;

/// Copy the habit database, optionally zipped.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Backup { file, compress } = cmd else {
        return Ok(());
    };

    let mut pool = open_db(&cfg.database)?;
    BackupLogic::backup(&mut pool, cfg, file, *compress)
}
