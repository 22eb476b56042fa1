use std::env;
use std::path::PathBuf;

/// Config script location, relative to the project root.
pub const CONFIG_SCRIPT: &str = "config/sitemap.json";

/// Output directory for generated sitemaps, relative to the project root.
pub const PUBLIC_DIR: &str = "public";

/// Glob matching generated sitemap files inside the output directory.
pub const ARTIFACT_PATTERN: &str = "sitemap*.xml.gz";

/// Optional per-project settings file, relative to the project root.
pub const SETTINGS_FILE: &str = ".sitemapgen.json";

/// Environment variable overriding the templates directory.
pub const TEMPLATES_ENV: &str = "SITEMAPGEN_TEMPLATES";

/// Templates directory from the environment, if set and non-empty.
pub fn templates_from_env() -> Option<PathBuf> {
    env::var_os(TEMPLATES_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
