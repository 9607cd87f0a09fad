//! User-facing status lines. Everything goes to stdout except `error`.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;
use std::io::{self, Write};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, ICON_ERR, msg));
}

/// Title line above a habit's details.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}── {msg} ──{RESET}\n");
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no,
/// including a closed stdin.
pub fn confirm<T: fmt::Display>(prompt: T) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
