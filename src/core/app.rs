//! Project root resolution.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;
use crate::settings::Settings;

/// The project a command operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    root: PathBuf,
}

impl App {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Use `root` when given, the current directory otherwise.
    pub fn resolve(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(path) => Ok(Self::new(path)),
            None => std::env::current_dir()
                .map(Self::new)
                .map_err(|e| Error::internal_io(e.to_string(), Some("current dir".to_string()))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.join(paths::SETTINGS_FILE)
    }

    pub fn config_script(&self, settings: &Settings) -> PathBuf {
        self.join(&settings.config_script)
    }

    pub fn public_dir(&self, settings: &Settings) -> PathBuf {
        self.join(&settings.public_dir)
    }

    /// Display form of `path`: relative to the root when it lives inside it.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
