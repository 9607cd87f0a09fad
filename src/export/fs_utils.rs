// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists, no `force` → ask the user
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
