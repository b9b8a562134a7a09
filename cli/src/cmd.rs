pub mod init;
pub mod list;
pub mod report;
pub mod run;

use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Path to evx.toml (defaults to searching the current dir and its
    /// ancestors).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Init(init::Args),
    List(list::Args),
    Report(report::Args),

    #[command(alias("r"))]
    Run(run::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Init(args) => init::exec(args, self),
            List(args) => list::exec(args, self),
            Report(args) => report::exec(args, self),
            Run(args) => run::exec(args, self).await,
        }
    }

    pub fn load_config(&self) -> anyhow::Result<evx_core::Config> {
        match &self.config {
            Some(path) => evx_core::Config::from_toml_file(path.clone()),
            None => evx_core::Config::from_file_finding_in_ancestors(crate::util::current_dir()),
        }
    }
}
