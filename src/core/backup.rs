use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(pool: &mut DbPool, cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask
        if dest.exists()
            && !confirm(format!(
                "The file '{}' already exists. Overwrite it?",
                dest.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        // 4️⃣ Copy database
        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                match fs::remove_file(&dest) {
                    Ok(_) => info(format!("Removed uncompressed backup: {}", dest.display())),
                    Err(e) => warning(format!("Failed to remove uncompressed backup: {}", e)),
                }
            }

            compressed
        } else {
            dest
        };

        // 6️⃣ Audit
        audit(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }
}

/// Compress a backup into a sibling `.zip`.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    zip_file(path, &zip_path)?;
    success(format!("📦 Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

/// Write `src` as the single deflated entry of a new zip archive at `zip_path`.
pub fn zip_file(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "database.sqlite".to_string());

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
