//! Backup of the storage directory: plain copy or tar.gz archive.

use crate::errors::{AppError, AppResult};
use crate::store::Storage;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy every stored JSON document into `dest`. With `compress`, `dest` names
/// a `.tar.gz` archive instead of a directory.
pub fn backup_data(storage: &Storage, dest: &str, compress: bool) -> AppResult<PathBuf> {
    if compress {
        let final_path = if dest.ends_with(".tar.gz") {
            PathBuf::from(dest)
        } else {
            PathBuf::from(format!("{dest}.tar.gz"))
        };
        archive_dir(storage.dir(), &final_path)?;
        Ok(final_path)
    } else {
        let dest_dir = PathBuf::from(dest);
        fs::create_dir_all(&dest_dir)?;
        for file in storage.files()? {
            let name = file
                .file_name()
                .ok_or_else(|| AppError::Backup(format!("unreadable file name: {}", file.display())))?;
            fs::copy(&file, dest_dir.join(name))?;
        }
        Ok(dest_dir)
    }
}

fn archive_dir(src: &Path, dest: &Path) -> AppResult<()> {
    let file = fs::File::create(dest)?;
    let enc = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(enc);
    tar.append_dir_all("attendo-data", src)?;
    tar.into_inner()?.finish()?;
    Ok(())
}
