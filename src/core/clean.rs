//! Removal of generated sitemap files from the output directory.

use serde::Serialize;
use std::path::PathBuf;

use crate::app::App;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::local_files::FileSystem;
use crate::settings::Settings;

#[derive(Debug, Clone, Serialize)]
pub struct CleanResult {
    pub directory: PathBuf,
    pub pattern: String,
    pub removed: Vec<PathBuf>,
}

/// Delete every file in the output directory matching the artifact pattern.
///
/// Stops at the first file that cannot be deleted.
pub fn clean<F: FileSystem>(
    fs: &F,
    app: &App,
    settings: &Settings,
    diag: &Diagnostics,
) -> Result<CleanResult> {
    let directory = app.public_dir(settings);
    let matches = fs.glob(&directory, &settings.artifact_pattern)?;

    if matches.is_empty() {
        diag.warn(format!(
            "no files matching {} in {}",
            settings.artifact_pattern,
            app.relative(&directory).display()
        ));
    }

    let mut removed = Vec::with_capacity(matches.len());
    for path in matches {
        fs.delete(&path)?;
        log_status!("clean", "Removed {}", app.relative(&path).display());
        removed.push(path);
    }

    Ok(CleanResult {
        directory,
        pattern: settings.artifact_pattern.clone(),
        removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::local_files::LocalFs;
    use std::cell::Cell;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Deletes through `LocalFs` until the `fail_at`-th call (1-based).
    struct FailingDelete {
        inner: LocalFs,
        calls: Cell<usize>,
        fail_at: usize,
    }

    impl FileSystem for FailingDelete {
        fn exists(&self, path: &Path) -> bool {
            self.inner.exists(path)
        }
        fn read(&self, path: &Path) -> Result<String> {
            self.inner.read(path)
        }
        fn write(&self, path: &Path, content: &str) -> Result<()> {
            self.inner.write(path, content)
        }
        fn copy(&self, from: &Path, to: &Path) -> Result<()> {
            self.inner.copy(from, to)
        }
        fn delete(&self, path: &Path) -> Result<()> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if call == self.fail_at {
                return Err(Error::internal_io(
                    format!("{}: permission denied", path.display()),
                    Some("delete file".to_string()),
                ));
            }
            self.inner.delete(path)
        }
        fn ensure_dir(&self, dir: &Path) -> Result<()> {
            self.inner.ensure_dir(dir)
        }
        fn glob(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
            self.inner.glob(dir, pattern)
        }
    }

    fn project_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        fs::create_dir(&public).unwrap();
        for name in files {
            fs::write(public.join(name), "").unwrap();
        }
        dir
    }

    #[test]
    fn removes_only_matching_artifacts() {
        let dir = project_with(&["sitemap1.xml.gz", "sitemap_index.xml.gz", "unrelated.txt"]);
        let app = App::new(dir.path());

        let result = clean(
            &LocalFs::new(),
            &app,
            &Settings::default(),
            &Diagnostics::captured(),
        )
        .unwrap();

        let public = dir.path().join("public");
        assert_eq!(
            result.removed,
            vec![
                public.join("sitemap1.xml.gz"),
                public.join("sitemap_index.xml.gz"),
            ]
        );
        assert!(!public.join("sitemap1.xml.gz").exists());
        assert!(!public.join("sitemap_index.xml.gz").exists());
        assert!(public.join("unrelated.txt").exists());
    }

    #[test]
    fn nothing_to_clean_warns() {
        let dir = project_with(&["robots.txt"]);
        let diag = Diagnostics::captured();

        let result = clean(&LocalFs::new(), &App::new(dir.path()), &Settings::default(), &diag)
            .unwrap();

        assert!(result.removed.is_empty());
        assert_eq!(
            diag.lines(),
            vec!["warning: no files matching sitemap*.xml.gz in public"]
        );
    }

    #[test]
    fn warning_suppressed_inside_quiet_scope() {
        let dir = project_with(&[]);
        let diag = Diagnostics::captured();
        let app = App::new(dir.path());
        let settings = Settings::default();

        let result = diag
            .with_warnings(false, || clean(&LocalFs::new(), &app, &settings, &diag))
            .unwrap();

        assert!(result.removed.is_empty());
        assert!(diag.lines().is_empty());
    }

    #[test]
    fn uses_configured_directory_and_pattern() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("sitemap.xml"), "").unwrap();
        fs::write(out.join("sitemap1.xml.gz"), "").unwrap();

        let settings = Settings {
            public_dir: PathBuf::from("dist"),
            artifact_pattern: "sitemap*.xml".to_string(),
            ..Settings::default()
        };

        let result = clean(
            &LocalFs::new(),
            &App::new(dir.path()),
            &settings,
            &Diagnostics::captured(),
        )
        .unwrap();

        assert_eq!(result.removed, vec![out.join("sitemap.xml")]);
        assert!(out.join("sitemap1.xml.gz").exists());
    }

    #[test]
    fn first_delete_failure_stops_cleaning() {
        let dir = project_with(&["sitemap1.xml.gz", "sitemap2.xml.gz", "sitemap3.xml.gz"]);
        let fs_impl = FailingDelete {
            inner: LocalFs::new(),
            calls: Cell::new(0),
            fail_at: 2,
        };

        let err = clean(
            &fs_impl,
            &App::new(dir.path()),
            &Settings::default(),
            &Diagnostics::captured(),
        )
        .unwrap_err();

        let public = dir.path().join("public");
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "delete file");
        assert!(!public.join("sitemap1.xml.gz").exists());
        assert!(public.join("sitemap2.xml.gz").exists());
        assert!(public.join("sitemap3.xml.gz").exists());
        assert_eq!(fs_impl.calls.get(), 2);
    }
}
