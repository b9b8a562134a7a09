use std::path::PathBuf;

use evx_core::{action, style};

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Results artifact to render (defaults to `run.results_file` from
    /// the config, falling back to `test-results.json`).
    #[arg()] // positional argument
    pub file: Option<PathBuf>,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let path = match &args.file {
        Some(path) => path.clone(),
        None => global_args
            .load_config()
            .map(|cfg| cfg.run.results_file)
            .unwrap_or_else(|_| "test-results.json".into()),
    };

    let outcomes = action::load_results(&path)?;
    style::print_summary(&outcomes);
    Ok(())
}
