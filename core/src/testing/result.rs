use serde::{Deserialize, Serialize};

use evx_webclient::Extraction;

use super::validate::{self, Check};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
    /// Transport or decoding failure. Never used for expectation
    /// mismatches, and always carries `extraction: null`.
    Error,
}

/// The recorded result of one test case. Created once, never mutated,
/// serialized in exactly this field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub test_id: String,
    pub status: Status,
    pub issues: Vec<String>,
    pub extraction: Option<Extraction>,
}

impl TestOutcome {
    /// Outcome of a reachable, well-formed response: PASS iff every check
    /// passed, FAIL otherwise, with one issue string per failed check.
    pub fn from_checks(test_id: impl Into<String>, extraction: Extraction, checks: &[Check]) -> Self {
        let issues = validate::issues(checks);
        let status = if issues.is_empty() {
            Status::Pass
        } else {
            Status::Fail
        };
        Self {
            test_id: test_id.into(),
            status,
            issues,
            extraction: Some(extraction),
        }
    }

    /// Outcome of a transport/decoding failure.
    pub fn from_error(test_id: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self {
            test_id: test_id.into(),
            status: Status::Error,
            issues: vec![err.to_string()],
            extraction: None,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}
