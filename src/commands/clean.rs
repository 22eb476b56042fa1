use clap::Args;
use serde::Serialize;

use sitemapgen::clean::{self, CleanResult};

use super::{CmdResult, GlobalArgs, Project};

#[derive(Args)]
pub struct CleanArgs {
    /// Suppress warnings (e.g. when there is nothing to remove)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Serialize)]
pub struct CleanOutput {
    pub command: &'static str,
    pub total_removed: usize,
    pub result: CleanResult,
}

pub fn run(args: CleanArgs, global: &GlobalArgs) -> CmdResult<CleanOutput> {
    let project = Project::load(global)?;

    let result = project.diag.with_warnings(!args.quiet, || {
        clean::clean(&project.fs, &project.app, &project.settings, &project.diag)
    })?;

    Ok((
        CleanOutput {
            command: "clean",
            total_removed: result.removed.len(),
            result,
        },
        0,
    ))
}
