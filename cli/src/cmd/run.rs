use std::path::PathBuf;

use anyhow::ensure;
use chrono::Local;

use evx_core::{action, suite};
use evx_webclient::ExtractClient;

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Exit non-zero when any case is not PASS (for CI).
    #[arg(long)]
    pub strict: bool,

    /// Skip the delay between test cases.
    #[arg(long)]
    pub no_pacing: bool,

    /// Where to write the results artifact (defaults to
    /// `run.results_file` from the config).
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = global_args.load_config()?;
    let client = ExtractClient::new(&cfg.api)?;

    let pacing = if args.no_pacing {
        action::Pacing::none()
    } else {
        cfg.run.pacing()
    };

    let cases = suite::builtin();
    log::info!(
        "Run started at {} ({} cases, endpoint {})",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        cases.len(),
        client.endpoint(),
    );

    let outcomes = action::run_suite(&client, cases, &pacing).await;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| cfg.run.results_file.clone());
    action::save_results(&outcomes, &output)?;
    evx_core::print_success!(
        "Detailed results saved to: {}",
        output.to_string_lossy()
    );

    if args.strict {
        let not_passed = outcomes.iter().filter(|o| !o.passed()).count();
        ensure!(
            not_passed == 0,
            "{} of {} cases did not pass",
            not_passed,
            outcomes.len()
        );
    }
    Ok(())
}
