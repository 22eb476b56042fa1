use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use sitemapgen::settings::Settings;
use sitemapgen::templates::Templates;

use super::{CmdResult, GlobalArgs, Project};

#[derive(Args)]
pub struct SettingsArgs {}

#[derive(Serialize)]
pub struct SettingsOutput {
    pub command: &'static str,
    pub root: PathBuf,
    pub settings_file: PathBuf,
    pub settings_file_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    pub settings: Settings,
}

pub fn run(_args: SettingsArgs, global: &GlobalArgs) -> CmdResult<SettingsOutput> {
    let project = Project::load(global)?;
    let settings_file = project.app.settings_file();
    let templates = Templates::resolve(&project.settings, &project.app);

    Ok((
        SettingsOutput {
            command: "settings",
            root: project.app.root().to_path_buf(),
            settings_file_exists: settings_file.is_file(),
            settings_file,
            template_dir: templates.dir().cloned(),
            settings: project.settings,
        },
        0,
    ))
}
