use serde_json::Value;

use evx_webclient::Extraction;

use super::testcase::Expectation;

/// One evaluated expectation, kept around so the reporter can print a
/// mark line per check and not just the failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub key: String,
    pub expectation: Expectation,
    pub actual: Option<Value>,
    pub passed: bool,
}

impl Check {
    /// Human-readable issue string, present iff the check failed.
    pub fn issue(&self) -> Option<String> {
        if self.passed {
            return None;
        }
        let msg = match &self.expectation {
            Expectation::GreaterThan(_) | Expectation::LessThan(_) => {
                if self.actual.as_ref().and_then(Value::as_f64).is_none() {
                    format!("{} validation failed (no value)", self.key)
                } else {
                    format!("{} validation failed", self.key)
                }
            }
            Expectation::ReasoningContains(_) => "Reasoning missing expected text".to_owned(),
            Expectation::Equals(_) => format!("{} mismatch", self.key),
        };
        Some(msg)
    }
}

/// Evaluate every expectation independently, in declaration order.
/// No short-circuiting: every failure is recorded.
pub fn evaluate(extraction: &Extraction, expected: &[(String, Expectation)]) -> Vec<Check> {
    expected
        .iter()
        .map(|(key, expectation)| {
            let actual = match expectation {
                Expectation::ReasoningContains(_) => extraction.get("reasoning"),
                _ => extraction.get(key),
            }
            .cloned();

            let passed = match expectation {
                Expectation::GreaterThan(t) => {
                    matches!(actual.as_ref().and_then(Value::as_f64), Some(v) if v > *t)
                }
                Expectation::LessThan(t) => {
                    matches!(actual.as_ref().and_then(Value::as_f64), Some(v) if v < *t)
                }
                Expectation::ReasoningContains(text) => {
                    let reasoning = extraction.reasoning().unwrap_or("");
                    reasoning.to_lowercase().contains(&text.to_lowercase())
                }
                Expectation::Equals(want) => {
                    json_eq(actual.as_ref().unwrap_or(&Value::Null), want)
                }
            };

            Check {
                key: key.clone(),
                expectation: expectation.clone(),
                actual,
                passed,
            }
        })
        .collect()
}

/// Issue strings of failed checks, in check order. Empty means PASS.
pub fn issues(checks: &[Check]) -> Vec<String> {
    checks.iter().filter_map(Check::issue).collect()
}

/// JSON value equality, with integers and floats comparing by numeric
/// value so a response `1500.0` satisfies an expected `1500`.
fn json_eq(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Render a field value for report lines; absent fields print as `null`.
pub fn fmt_value(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => "null".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
