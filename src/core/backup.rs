use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the configured store file to `dest_file`, optionally as a `.zip`.
    /// Returns the path of the file actually written.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = expand_tilde(&cfg.database);
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check store exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "store not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Ask before overwriting
        ensure_writable(&dest, force)?;

        // 4️⃣ Copy store
        fs::copy(&src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                if let Err(e) = fs::remove_file(&dest) {
                    warning(format!("Failed to remove uncompressed backup: {e}"));
                }
            }

            compressed
        } else {
            dest
        };

        // 6️⃣ Internal log
        LogLogic::record(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Backup(format!("invalid backup path: {}", path.display())))?;

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(|e| AppError::Backup(e.to_string()))?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    success(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
