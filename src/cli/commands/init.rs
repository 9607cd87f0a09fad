use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: config directory and file (the file is
/// skipped with `--test`), then the habit database with its schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rHabits…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_str);

    let pool = open_db(&db_str)?;
    audit(&pool.conn, "init", &db_str, "Habit database ready");

    success(format!("Ready to track habits in {}", db_str));
    Ok(())
}
