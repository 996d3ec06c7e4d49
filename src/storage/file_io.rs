//! File lifecycle and line-oriented I/O
//!
//! [`StorageFile`] owns one ledger file path. It creates the file (and any
//! missing parent directories) on demand, reads it back as lines, and
//! replaces its contents atomically (write to temp, then rename).

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FinanceError;

/// One on-disk ledger file
#[derive(Debug, Clone)]
pub struct StorageFile {
    path: PathBuf,
}

impl StorageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Make sure the file exists, creating parent directories and an empty
    /// file if needed. Calling this on an existing file changes nothing.
    pub fn obtain(&self) -> Result<&Path, FinanceError> {
        if self.path.exists() {
            return Ok(&self.path);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                FinanceError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                FinanceError::Io(format!("Failed to create {}: {}", self.path.display(), e))
            })?;

        debug!(path = %self.path.display(), "created storage file");
        Ok(&self.path)
    }

    /// Read every line of the file, or `None` if the file does not exist
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the
    /// whole read, so one damaged line cannot hide the rest of the file.
    pub fn read_lines(&self) -> Result<Option<Vec<String>>, FinanceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(FinanceError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Ok(Some(
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_owned)
                .collect(),
        ))
    }

    /// Replace the file's contents with `lines`, each newline-terminated
    ///
    /// The data goes to a sibling temp file which is synced and then renamed
    /// over the target, so a crash leaves either the old or the new file.
    pub fn write_lines<I, S>(&self, lines: I) -> Result<(), FinanceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = self.obtain()?;
        let temp_path = self.temp_path();

        let file = File::create(&temp_path)
            .map_err(|e| FinanceError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writer
                .write_all(line.as_ref().as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| FinanceError::Io(format!("Failed to write data: {}", e)))?;
        }

        writer
            .flush()
            .map_err(|e| FinanceError::Io(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| FinanceError::Io(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            FinanceError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("ledger"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_obtain_creates_parents_and_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("list.txt");
        let file = StorageFile::new(&path);

        assert!(!file.exists());
        assert_eq!(file.obtain().unwrap(), path.as_path());
        assert!(file.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_obtain_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        fs::write(&path, "keep me\n").unwrap();

        let file = StorageFile::new(&path);
        file.obtain().unwrap();
        file.obtain().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
    }

    #[test]
    fn test_obtain_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let file = StorageFile::new(blocker.join("list.txt"));
        assert!(matches!(file.obtain(), Err(FinanceError::Io(_))));
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let file = StorageFile::new(temp_dir.path().join("missing.txt"));

        assert!(file.read_lines().unwrap().is_none());
        assert!(!file.exists());
    }

    #[test]
    fn test_write_and_read_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("list.txt");
        let file = StorageFile::new(&path);

        file.write_lines(["first", "second"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(
            file.read_lines().unwrap().unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_write_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        let file = StorageFile::new(&path);

        file.write_lines(["a", "b", "c"]).unwrap();
        file.write_lines(["z"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "z\n");
    }

    #[test]
    fn test_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        let file = StorageFile::new(&path);

        file.write_lines(["x"]).unwrap();

        assert!(!temp_dir.path().join("list.txt.tmp").exists());
    }

    #[test]
    fn test_read_tolerates_crlf_and_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.txt");
        fs::write(&path, b"one\r\n\xff\xfe\ntwo\n").unwrap();

        let lines = StorageFile::new(&path).read_lines().unwrap().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "one");
        assert_eq!(lines[2], "two");
    }
}
