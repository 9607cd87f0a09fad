use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_streak};
use crate::utils::date::today;
use crate::utils::{days_label, describe_periodicity};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Details { id } = cmd {
        let pool = open_db(&cfg.database)?;
        let d = HabitLogic::details(&pool, *id, today())?;

        header(format!("#{} {}", d.habit.id, d.habit.name));

        println!(
            "{}• Description:{} {}",
            CYAN,
            RESET,
            d.habit.description_or_dash()
        );
        println!(
            "{}• Periodicity:{} {}",
            CYAN,
            RESET,
            describe_periodicity(d.habit.periodicity)
        );
        println!("{}• Created:{} {}", CYAN, RESET, d.habit.created_at_str());
        println!("{}• Check-offs:{} {}", CYAN, RESET, d.check_off_count);

        let last = match &d.last_check_off {
            Some(c) => c.timestamp.format(&cfg.date_format).to_string(),
            None => format!("{GREY}--{RESET}"),
        };
        println!("{}• Last check-off:{} {}", CYAN, RESET, last);

        println!(
            "{}• Longest streak:{} {}{}{}",
            CYAN,
            RESET,
            color_for_streak(d.longest_streak),
            days_label(d.longest_streak),
            RESET
        );
        println!(
            "{}• Current streak:{} {}{}{}",
            CYAN,
            RESET,
            color_for_streak(d.current_streak),
            days_label(d.current_streak),
            RESET
        );
    }

    Ok(())
}
