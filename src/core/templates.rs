//! Template lookup for installable files.
//!
//! Templates come from a templates directory when one is configured and
//! from the copies compiled into the binary otherwise.

use std::path::PathBuf;

use crate::app::App;
use crate::paths;
use crate::settings::Settings;

const SITEMAP_SAMPLE: &str = include_str!("../../templates/sitemap.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Starting point for the user-editable config script.
    SitemapSample,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::SitemapSample => "sitemap_sample",
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            Template::SitemapSample => "sitemap.json",
        }
    }

    /// Contents shipped inside the binary.
    pub fn embedded(&self) -> &'static str {
        match self {
            Template::SitemapSample => SITEMAP_SAMPLE,
        }
    }
}

/// Where a template's contents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Embedded(&'static str),
}

/// Resolves templates to a file in a templates directory, or to the
/// embedded copy when no directory is configured.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    dir: Option<PathBuf>,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn embedded() -> Self {
        Self { dir: None }
    }

    /// Pick the templates directory: settings (relative to the project
    /// root), then environment, then none.
    pub fn resolve(settings: &Settings, app: &App) -> Self {
        let dir = settings
            .templates_dir
            .as_ref()
            .map(|dir| app.join(dir))
            .or_else(paths::templates_from_env);
        Self { dir }
    }

    pub fn dir(&self) -> Option<&PathBuf> {
        self.dir.as_ref()
    }

    pub fn source(&self, template: Template) -> TemplateSource {
        match &self.dir {
            Some(dir) => TemplateSource::File(dir.join(template.file_name())),
            None => TemplateSource::Embedded(template.embedded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_dir_resolves_to_file() {
        let templates = Templates::new("/opt/templates");
        assert_eq!(
            templates.source(Template::SitemapSample),
            TemplateSource::File(PathBuf::from("/opt/templates/sitemap.json"))
        );
    }

    #[test]
    fn absolute_settings_dir_is_kept() {
        let settings = Settings {
            templates_dir: Some(PathBuf::from("/custom")),
            ..Settings::default()
        };
        let templates = Templates::resolve(&settings, &App::new("/srv/site"));
        assert_eq!(templates.dir(), Some(&PathBuf::from("/custom")));
    }

    #[test]
    fn relative_settings_dir_is_under_project_root() {
        let settings = Settings {
            templates_dir: Some(PathBuf::from("tpl")),
            ..Settings::default()
        };
        let templates = Templates::resolve(&settings, &App::new("/srv/site"));
        assert_eq!(templates.dir(), Some(&PathBuf::from("/srv/site/tpl")));
    }

    #[test]
    fn no_dir_uses_embedded_sample() {
        let source = Templates::embedded().source(Template::SitemapSample);
        assert_eq!(source, TemplateSource::Embedded(SITEMAP_SAMPLE));
    }

    #[test]
    fn embedded_sample_is_a_json_object() {
        let value: serde_json::Value =
            serde_json::from_str(Template::SitemapSample.embedded()).unwrap();
        assert!(value.is_object());
    }
}
