//! rHabits library root.
//! Exposes the CLI parser, the high-level run() function and the habit engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Create { .. } => c::create::handle(&cli.command, cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Details { .. } => c::details::handle(&cli.command, cfg),
        Commands::Check { .. } => c::check::handle(&cli.command, cfg),
        Commands::Last { .. } => c::last::handle(&cli.command, cfg),
        Commands::CheckOffs { .. } => c::check_offs::handle(&cli.command, cfg),
        Commands::Streak { .. } => c::streak::handle(&cli.command, cfg),
        Commands::Delete { .. } => c::delete::handle(&cli.command, cfg),
        Commands::Generate { .. } => c::generate::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` creates the config itself, so a missing or broken file is not an error there
    let mut cfg = match &cli.command {
        Commands::Init => Config::load().unwrap_or_default(),
        _ => Config::load()?,
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
