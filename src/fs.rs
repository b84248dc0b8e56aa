use crc32fast::Hasher;
use data_encoding::BASE64URL_NOPAD;
use std::path::{Path, PathBuf};
use tokio::{
    fs::{OpenOptions, canonicalize, create_dir_all, remove_dir_all},
    io::AsyncWriteExt,
};

use crate::error::{ContextExt, LuminaErr};

pub async fn canonicalize_and_ensure_path(path: &Path) -> Result<PathBuf, LuminaErr> {
    create_dir_all(path)
        .await
        .with_context(|| format!("create directory: {}", path.display()))?;
    canonicalize(path)
        .await
        .with_context(|| format!("canonicalize: {}", path.display()))
}

/// Removes everything under `path` and leaves an empty directory behind.
pub async fn clean_dir(path: &Path) -> Result<PathBuf, LuminaErr> {
    if path.exists() {
        remove_dir_all(path)
            .await
            .with_context(|| format!("remove directory: {}", path.display()))?;
    }
    canonicalize_and_ensure_path(path).await
}

pub async fn write_file(path: &Path, content: &[u8]) -> Result<(), LuminaErr> {
    let prefix = path
        .parent()
        .ok_or_else(|| format!("{} has no parent directory", path.display()))?;
    create_dir_all(prefix)
        .await
        .with_context(|| format!("create directory: {}", prefix.display()))?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .await
        .with_context(|| format!("open file: {}", path.display()))?;
    file.write_all(content)
        .await
        .with_context(|| format!("write to file: {}", path.display()))?;
    Ok(())
}

pub fn crc32_checksum(content: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(content);
    BASE64URL_NOPAD.encode(hasher.finalize().to_be_bytes().as_ref())
}
