use std::path::PathBuf;

use sitemapgen::app::App;
use sitemapgen::diagnostics::Diagnostics;
use sitemapgen::local_files::LocalFs;
use sitemapgen::settings::{self, Settings};

pub type CmdResult<T> = sitemapgen::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub root: Option<PathBuf>,
}

/// Everything a lifecycle command needs: project, its settings, and where
/// diagnostics go.
pub(crate) struct Project {
    pub fs: LocalFs,
    pub app: App,
    pub settings: Settings,
    pub diag: Diagnostics,
}

impl Project {
    pub fn load(global: &GlobalArgs) -> sitemapgen::Result<Self> {
        let fs = LocalFs::new();
        let app = App::resolve(global.root.as_deref())?;
        let settings = settings::load(&fs, &app)?;

        Ok(Self {
            fs,
            app,
            settings,
            diag: Diagnostics::stderr(),
        })
    }
}

pub mod clean;
pub mod install;
pub mod settings_cmd;
pub mod uninstall;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (sitemapgen::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Install(args) => dispatch!(args, global, install),
        crate::Commands::Uninstall(args) => dispatch!(args, global, uninstall),
        crate::Commands::Clean(args) => dispatch!(args, global, clean),
        crate::Commands::Settings(args) => dispatch!(args, global, settings_cmd),
    }
}
