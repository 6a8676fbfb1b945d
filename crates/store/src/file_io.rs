//! Atomic file persistence
//!
//! Artifacts are written to `<file name>.tmp` next to the target and then
//! renamed over it. A failed write removes the temp file and leaves any
//! existing target untouched.

use crate::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Temp path used while writing `path`
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to `path` atomically
pub fn write_atomic(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp = temp_path(path);

    let written = (|| -> std::io::Result<()> {
        let file = File::create(&temp)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);
        fs::rename(&temp, path)
    })();

    if let Err(err) = written {
        let _ = fs::remove_file(&temp);
        return Err(err.into());
    }

    debug!(path = %path.display(), bytes = bytes.len(), "persisted file");
    Ok(())
}

/// Write `bytes` to `path` atomically using tokio file I/O
pub async fn write_atomic_async(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let path = path.as_ref();
    let temp = temp_path(path);

    let written = async {
        let mut file = tokio::fs::File::create(&temp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&temp, path).await
    }
    .await;

    if let Err(err) = written {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(err.into());
    }

    debug!(path = %path.display(), bytes = bytes.len(), "persisted file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path(Path::new("/out/chat-A-B-2024-01-01.pdf")),
            PathBuf::from("/out/chat-A-B-2024-01-01.pdf.tmp")
        );
    }

    #[test]
    fn test_write_atomic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_failed_write_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("a.txt");

        assert!(write_atomic(&path, b"data").is_err());
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_failed_rename_removes_temp() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path makes the rename fail
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        assert!(write_atomic(&path, b"data").is_err());
        assert!(!temp_path(&path).exists());
        assert!(path.join("keep").exists());
    }

    #[tokio::test]
    async fn test_write_atomic_async() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("b.pdf");

        write_atomic_async(&path, b"%PDF-1.4").await.unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.4");
        assert!(!temp_path(&path).exists());
    }
}
