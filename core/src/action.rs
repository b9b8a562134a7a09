pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use error::*;
use indicatif::{ProgressBar, ProgressStyle};

use evx_webclient::ExtractApi;

use crate::fsutil;
use crate::style;
use crate::testing::{evaluate, TestCase, TestOutcome};

/// Fixed-interval delay between requests, so the suite does not hammer
/// the remote endpoint. A zero interval disables sleeping entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    interval: Duration,
}

impl Pacing {
    pub fn every(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn none() -> Self {
        Self {
            interval: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn wait(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Run every case strictly in sequence against the given API.
///
/// A transport/decoding failure is converted into an ERROR outcome for
/// that case and the suite continues; every case yields exactly one
/// outcome, in suite order.
pub async fn run_suite(
    api: &impl ExtractApi,
    cases: &[TestCase],
    pacing: &Pacing,
) -> Vec<TestOutcome> {
    let spinner_style = ProgressStyle::default_bar()
        .template("{spinner} {msg}")
        .unwrap();

    let mut outcomes = Vec::with_capacity(cases.len());

    for (i, case) in cases.iter().enumerate() {
        style::print_case_banner(&case.id, &case.description);

        let bar = ProgressBar::new_spinner()
            .with_style(spinner_style.clone())
            .with_message(format!("Test {} ...", case.id).cyan().to_string());
        bar.enable_steady_tick(Duration::from_millis(50));

        let res = api.extract(&case.input).await;
        bar.finish_and_clear();

        let outcome = match res {
            Ok(response) => {
                println!("{}", "✓ API Call Successful".green());
                let extraction = response.into_extraction();
                style::print_extraction(&extraction);

                let checks = evaluate(&extraction, &case.expected);
                style::print_checks(&checks);

                TestOutcome::from_checks(&case.id, extraction, &checks)
            }
            Err(e) => {
                log::warn!("Test {}: request failed: {:#}", case.id, e);
                println!("{}", format!("✗ Test Failed: {}", e).bright_red());
                TestOutcome::from_error(&case.id, e)
            }
        };

        style::print_case_status(&outcome);
        outcomes.push(outcome);

        let is_last = i + 1 == cases.len();
        if !is_last {
            pacing.wait().await;
        }
    }

    style::print_summary(&outcomes);
    outcomes
}

/// Persist the full ordered outcome list. Written exactly once, after
/// all cases complete.
pub fn save_results(outcomes: &[TestOutcome], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fsutil::write_json_pretty_with_mkdir(path, &outcomes)
        .with_context(|| format!("Failed to save results to {:?}", path))?;
    log::info!("Saved {} results to {:?}", outcomes.len(), path);
    Ok(())
}

pub fn load_results(path: impl AsRef<Path>) -> Result<Vec<TestOutcome>> {
    let path = path.as_ref();
    fsutil::read_json_with_deserialize(path)
        .with_context(|| format!("Failed to load results from {:?}", path))
}
