//! # Receipt Store
//!
//! Append-only text log of printed receipts. The store never truncates
//! and never reads the log back; each saved receipt is followed by a
//! blank line and a 40-character separator line.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Appends receipt texts to a log file.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    path: PathBuf,
}

impl ReceiptStore {
    /// Creates a store writing to `path`. The file is created on first
    /// save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        ReceiptStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `receipt_text` to the log.
    pub fn save(&self, receipt_text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(receipt_text.as_bytes())?;
        file.write_all(b"\n\n")?;
        file.write_all("=".repeat(40).as_bytes())?;
        file.write_all(b"\n\n")?;

        debug!(path = %self.path.display(), "receipt appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_appends_with_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipts.txt");
        let store = ReceiptStore::new(&path);

        store.save("первый чек").unwrap();
        store.save("второй чек").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let separator = "=".repeat(40);
        assert_eq!(
            contents,
            format!("первый чек\n\n{separator}\n\nвторой чек\n\n{separator}\n\n")
        );
    }

    #[test]
    fn test_save_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipts.txt");

        ReceiptStore::new(&path).save("чек").unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        // A fresh store over the same file keeps the existing log
        ReceiptStore::new(&path).save("ещё чек").unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert!(second.starts_with(&first));
        assert!(second.len() > first.len());
    }
}
