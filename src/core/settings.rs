//! Per-project settings from `.sitemapgen.json`.
//!
//! User keys are read as strings, symbolized, checked against the known
//! option names, stripped of blank values and then filled in from the
//! defaults, so a partial file only overrides what it names.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::app::App;
use crate::error::{Error, Result};
use crate::local_files::FileSystem;
use crate::paths;
use crate::utils::blank::Blank;
use crate::utils::keys::{assert_valid_keys, symbolize_keys_in_place, Key};
use crate::utils::merge::reverse_merge_in_place;
use crate::utils::round::round;

/// Option mapping as read from user configuration.
pub type Options = BTreeMap<Key, Value>;

const CONFIG_SCRIPT: &str = "config_script";
const PUBLIC_DIR: &str = "public_dir";
const ARTIFACT_PATTERN: &str = "artifact_pattern";
const TEMPLATES_DIR: &str = "templates_dir";
const DEFAULT_PRIORITY: &str = "default_priority";
const COMPRESS: &str = "compress";

const OPTION_KEYS: [&str; 6] = [
    CONFIG_SCRIPT,
    PUBLIC_DIR,
    ARTIFACT_PATTERN,
    TEMPLATES_DIR,
    DEFAULT_PRIORITY,
    COMPRESS,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub config_script: PathBuf,
    pub public_dir: PathBuf,
    pub artifact_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    pub default_priority: f64,
    pub compress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_script: PathBuf::from(paths::CONFIG_SCRIPT),
            public_dir: PathBuf::from(paths::PUBLIC_DIR),
            artifact_pattern: paths::ARTIFACT_PATTERN.to_string(),
            templates_dir: None,
            default_priority: 0.5,
            compress: true,
        }
    }
}

/// Built-in option values, keyed by symbol.
pub fn default_options() -> Options {
    let defaults = Settings::default();
    BTreeMap::from([
        (
            Key::sym(CONFIG_SCRIPT),
            json!(defaults.config_script.to_string_lossy()),
        ),
        (
            Key::sym(PUBLIC_DIR),
            json!(defaults.public_dir.to_string_lossy()),
        ),
        (Key::sym(ARTIFACT_PATTERN), json!(defaults.artifact_pattern)),
        (Key::sym(DEFAULT_PRIORITY), json!(defaults.default_priority)),
        (Key::sym(COMPRESS), json!(defaults.compress)),
    ])
}

/// Load settings for `app`, falling back to defaults when no settings file exists.
pub fn load<F: FileSystem>(fs: &F, app: &App) -> Result<Settings> {
    let path = app.settings_file();
    if !fs.exists(&path) {
        return Ok(Settings::default());
    }

    let content = fs.read(&path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.to_string_lossy(), e))?;

    log_status!("settings", "Loaded {}", app.relative(&path).display());
    from_json(value)
}

/// Resolve settings from a parsed settings document.
pub fn from_json(value: Value) -> Result<Settings> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::config_invalid_value(
                "settings",
                Some(other.to_string()),
                "expected a JSON object",
            ))
        }
    };

    let mut options: Options = map.into_iter().map(|(k, v)| (Key::Str(k), v)).collect();
    symbolize_keys_in_place(&mut options);
    from_options(options)
}

/// Resolve settings from an option mapping with symbol keys.
pub fn from_options(mut options: Options) -> Result<Settings> {
    assert_valid_keys(&options, OPTION_KEYS.iter().map(|name| Key::sym(*name)))?;

    // `false` is blank but still a deliberate setting.
    options.retain(|_, value| value.is_boolean() || value.is_present());
    reverse_merge_in_place(&mut options, &default_options());

    Ok(Settings {
        config_script: PathBuf::from(string(&options, CONFIG_SCRIPT)?),
        public_dir: PathBuf::from(string(&options, PUBLIC_DIR)?),
        artifact_pattern: string(&options, ARTIFACT_PATTERN)?,
        templates_dir: optional_string(&options, TEMPLATES_DIR)?.map(PathBuf::from),
        default_priority: priority(&options, DEFAULT_PRIORITY)?,
        compress: boolean(&options, COMPRESS)?,
    })
}

fn string(options: &Options, key: &str) -> Result<String> {
    optional_string(options, key)?
        .ok_or_else(|| Error::config_invalid_value(key, None, "missing value"))
}

fn optional_string(options: &Options, key: &str) -> Result<Option<String>> {
    match options.get(&Key::sym(key)) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.trim().to_string())),
        Some(other) => Err(Error::config_invalid_value(
            key,
            Some(other.to_string()),
            "expected a string",
        )),
    }
}

fn boolean(options: &Options, key: &str) -> Result<bool> {
    match options.get(&Key::sym(key)) {
        Some(Value::Bool(flag)) => Ok(*flag),
        other => Err(Error::config_invalid_value(
            key,
            other.map(Value::to_string),
            "expected true or false",
        )),
    }
}

fn priority(options: &Options, key: &str) -> Result<f64> {
    let value = options.get(&Key::sym(key));
    match value.and_then(Value::as_f64) {
        Some(p) if (0.0..=1.0).contains(&p) => Ok(round(p, Some(1))),
        _ => Err(Error::config_invalid_value(
            key,
            value.map(Value::to_string),
            "expected a number between 0.0 and 1.0",
        )),
    }
}
