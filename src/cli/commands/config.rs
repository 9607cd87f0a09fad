use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if !path.exists() {
                info("No configuration file yet, showing defaults (run `rhabits init`).");
            }
            println!("📄 Configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let fallback = platform_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if open_in(&chosen, &path) {
                success(format!("Configuration edited with '{}'", chosen));
            } else if chosen != fallback {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    chosen, fallback
                ));
                if open_in(&fallback, &path) {
                    success(format!("Configuration edited with '{}'", fallback));
                } else {
                    error(format!("Could not open the configuration with '{}'", fallback));
                }
            } else {
                error(format!("Could not open the configuration with '{}'", chosen));
            }
        }
    }

    Ok(())
}
