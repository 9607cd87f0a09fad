use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create" => Colour::Green,
        "check" => Colour::Cyan,
        "delete" | "delete_all" => Colour::Red,
        "generate" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" | "vacuum" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;

        let rows = load_log(&pool.conn)?;
        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let entries: Vec<(i64, String, String, String, String)> = rows
            .into_iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(r.date);

                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };

                (r.id, date, r.operation, op_target, r.message)
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in entries {
            let color = color_for_operation(&operation);

            // truncate on the visible text, then recolour the first word only
            let visible = strip_ansi(&ansi, &op_target);
            let truncated = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            let recolored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &recolored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                recolored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
