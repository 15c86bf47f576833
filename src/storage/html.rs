//! Directory of extracted per-row HTML files.

use std::path::{Path, PathBuf};

use crate::{SplitError, SplitResult};

#[derive(Debug, Clone)]
pub struct HtmlStore {
    dir: PathBuf,
}

impl HtmlStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        HtmlStore {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory (and parents) when missing.
    pub fn ensure(&self) -> SplitResult<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| SplitError::io(&self.dir, e))?;
        }
        Ok(())
    }

    /// Write `contents` verbatim to `<dir>/<file_name>`, replacing any existing file.
    pub fn write(&self, file_name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = HtmlStore::new(tmp.path().join("a").join("b"));
        store.ensure().unwrap();
        store.ensure().unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_write_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let store = HtmlStore::new(tmp.path());
        store.write("x.html", "<p>first</p>").unwrap();
        let path = store.write("x.html", "<p>second</p>").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "<p>second</p>");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let store = HtmlStore::new(tmp.path().join("missing"));
        assert!(store.write("x.html", "<p></p>").is_err());
    }
}
