//! Install and uninstall the user-editable config script.

use serde::Serialize;
use std::path::PathBuf;

use crate::app::App;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::local_files::FileSystem;
use crate::settings::Settings;
use crate::templates::{Template, TemplateSource, Templates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UninstallOutcome {
    Removed,
    NotPresent,
}

pub struct Installer<'a, F: FileSystem> {
    fs: &'a F,
    app: &'a App,
    templates: &'a Templates,
    target: PathBuf,
}

impl<'a, F: FileSystem> Installer<'a, F> {
    pub fn new(fs: &'a F, app: &'a App, settings: &Settings, templates: &'a Templates) -> Self {
        Self {
            fs,
            app,
            templates,
            target: app.config_script(settings),
        }
    }

    /// Absolute path of the config script.
    pub fn target(&self) -> &PathBuf {
        &self.target
    }

    /// Write the sample template to the config script path unless a config
    /// script is already there.
    pub fn install(&self, verbose: bool, diag: &Diagnostics) -> Result<InstallOutcome> {
        let display = self.app.relative(&self.target).display().to_string();

        if self.fs.exists(&self.target) {
            if verbose {
                diag.say(format!("already exists: {}, file not copied", display));
            }
            return Ok(InstallOutcome::AlreadyExists);
        }

        let template = Template::SitemapSample;
        let source = self.templates.source(template);
        if let TemplateSource::File(path) = &source {
            if !self.fs.exists(path) {
                return Err(Error::template_not_found(
                    template.name(),
                    path.to_string_lossy(),
                ));
            }
        }

        if let Some(parent) = self.target.parent() {
            self.fs.ensure_dir(parent)?;
        }
        match &source {
            TemplateSource::File(path) => {
                self.fs.copy(path, &self.target)?;
                log_status!("install", "Copied {} -> {}", path.display(), display);
            }
            TemplateSource::Embedded(content) => {
                self.fs.write(&self.target, content)?;
                log_status!("install", "Wrote built-in {} -> {}", template.name(), display);
            }
        }

        if verbose {
            diag.say(format!("created: {}", display));
        }

        Ok(InstallOutcome::Created)
    }

    /// Delete the config script if it exists.
    pub fn uninstall(&self) -> Result<UninstallOutcome> {
        if !self.fs.exists(&self.target) {
            return Ok(UninstallOutcome::NotPresent);
        }

        self.fs.delete(&self.target)?;
        log_status!(
            "uninstall",
            "Removed {}",
            self.app.relative(&self.target).display()
        );

        Ok(UninstallOutcome::Removed)
    }
}
