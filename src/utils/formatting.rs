//! Formatting utilities used for CLI outputs.

use crate::models::periodicity::Periodicity;
use crate::utils::colors::{BLUE, BOLD, MAGENTA, RESET};

pub fn bold(s: &str) -> String {
    format!("{BOLD}{s}{RESET}")
}

/// "1 day", "22 days"
pub fn days_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Coloured periodicity label for human-readable output.
pub fn describe_periodicity(p: Periodicity) -> String {
    let color = match p {
        Periodicity::Daily => BLUE,
        Periodicity::Weekly => MAGENTA,
    };
    format!("{}{}{}", color, p.as_str(), RESET)
}
