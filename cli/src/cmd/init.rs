use anyhow::{ensure, Context as _};

use evx_core::Config;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: &Args, _global_args: &GlobalArgs) -> SubcmdResult {
    let dest = util::current_dir().join(Config::FILENAME);
    ensure!(
        !dest.exists(),
        "{} already exists here, refusing to overwrite",
        Config::FILENAME
    );

    std::fs::write(&dest, Config::example_toml())
        .with_context(|| format!("Failed to write {:?}", dest))?;
    evx_core::print_success!("Wrote example config to {}", dest.to_string_lossy());
    Ok(())
}
