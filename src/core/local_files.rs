use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;

/// Filesystem primitives used by the install and clean lifecycle.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;
    fn delete(&self, path: &Path) -> Result<()>;
    fn ensure_dir(&self, dir: &Path) -> Result<()>;
    /// Files matching `pattern` under `dir`, sorted. `dir` is taken literally.
    fn glob(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// Local filesystem implementation
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<String> {
        io::read_file(path, "read file")
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        io::write_file(path, content, "write file")
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        io::copy_file(from, to, "copy file")
    }

    fn delete(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::internal_io(
                format!("File not found: {}", path.display()),
                Some("delete file".to_string()),
            ));
        }

        io::remove_file(path, "delete file")
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                Error::internal_io(e.to_string(), Some("create directory".to_string()))
            })?;
        }
        Ok(())
    }

    fn glob(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let full = format!(
            "{}/{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            pattern
        );

        let paths = glob::glob(&full).map_err(|e| {
            Error::validation_invalid_argument(
                "artifact_pattern",
                format!("Invalid glob pattern '{}': {}", pattern, e),
                Some(pattern.to_string()),
            )
        })?;

        let mut matches = Vec::new();
        for entry in paths {
            let path = entry
                .map_err(|e| Error::internal_io(e.to_string(), Some("glob".to_string())))?;
            if path.is_file() {
                matches.push(path);
            }
        }
        matches.sort();

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn glob_matches_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sitemap1.xml.gz"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sitemap_dir.xml.gz")).unwrap();

        let found = LocalFs::new()
            .glob(dir.path(), "sitemap*.xml.gz")
            .unwrap();

        assert_eq!(found, vec![dir.path().join("sitemap1.xml.gz")]);
    }

    #[test]
    fn glob_treats_directory_literally() {
        let root = TempDir::new().unwrap();
        let odd = root.path().join("site[1]");
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("sitemap.xml.gz"), "").unwrap();

        let found = LocalFs::new().glob(&odd, "sitemap*.xml.gz").unwrap();

        assert_eq!(found, vec![odd.join("sitemap.xml.gz")]);
    }

    #[test]
    fn glob_rejects_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let err = LocalFs::new().glob(dir.path(), "sitemap[.xml").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn glob_of_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let found = LocalFs::new()
            .glob(&dir.path().join("public"), "*.gz")
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn write_then_read_returns_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.json");
        let local = LocalFs::new();

        local.write(&path, "{\"a\": 1}").unwrap();
        assert_eq!(local.read(&path).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn read_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = LocalFs::new().read(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "read file");
    }

    #[test]
    fn delete_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = LocalFs::new()
            .delete(&dir.path().join("nope"))
            .unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        LocalFs::new().ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
