// src/export/logic.rs

use crate::core::checkoff::CheckOffLogic;
use crate::db::store::HabitStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::CheckOffExport;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::collections::HashMap;
use std::io;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export check-offs, joined with their habit.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `habit_id`: restrict to one habit, `None` exports everything
    ///
    /// Returns the number of exported rows.
    pub fn export<S: HabitStore>(
        store: &S,
        format: ExportFormat,
        file: &str,
        habit_id: Option<i64>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        let rows = load_rows(store, habit_id)?;

        if rows.is_empty() {
            warning("No check-offs found. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

fn load_rows<S: HabitStore>(store: &S, habit_id: Option<i64>) -> AppResult<Vec<CheckOffExport>> {
    let habits: HashMap<i64, _> = store
        .list_habits()?
        .into_iter()
        .map(|h| (h.id, h))
        .collect();

    let check_offs = CheckOffLogic::list(store, habit_id)?;

    check_offs
        .iter()
        .map(|c| {
            let habit = habits.get(&c.habit_id).ok_or_else(|| {
                AppError::Export(format!(
                    "check-off {} references missing habit {}",
                    c.id, c.habit_id
                ))
            })?;
            Ok(CheckOffExport::new(c, habit))
        })
        .collect()
}
