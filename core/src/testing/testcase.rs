use serde_json::Value;

use evx_webclient::ExtractRequest;

/// One expectation on an extraction field, resolved at definition time.
/// `GreaterThan`/`LessThan` are only ever attached to numeric fields
/// (in practice: `confidence`); `ReasoningContains` is a case-insensitive
/// substring check on the `reasoning` text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    Equals(Value),
    GreaterThan(f64),
    LessThan(f64),
    ReasoningContains(String),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseExpectationError {
    #[error("Comparator must start with '>' or '<': {0:?}")]
    MissingOperator(String),

    #[error("Invalid threshold in comparator {0:?}")]
    InvalidThreshold(String),
}

impl Expectation {
    /// Parse a comparator notation like `">0.75"` or `"<0.6"`.
    /// Malformed notation is an error here, never a silent no-op later.
    pub fn comparator(s: &str) -> Result<Self, ParseExpectationError> {
        let threshold = |rest: &str| {
            rest.parse::<f64>()
                .map_err(|_| ParseExpectationError::InvalidThreshold(s.to_owned()))
        };
        match s.as_bytes().first() {
            Some(b'>') => Ok(Self::GreaterThan(threshold(&s[1..])?)),
            Some(b'<') => Ok(Self::LessThan(threshold(&s[1..])?)),
            _ => Err(ParseExpectationError::MissingOperator(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Expectation::*;
        match self {
            Equals(v) => write!(f, "{}", super::validate::fmt_value(Some(v))),
            GreaterThan(t) => write!(f, ">{}", t),
            LessThan(t) => write!(f, "<{}", t),
            ReasoningContains(s) => write!(f, "contains {:?}", s),
        }
    }
}

/// A single immutable test case: what to send and what the extraction
/// must look like.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub id: String,
    pub description: String,
    pub input: ExtractRequest,
    pub expected: Vec<(String, Expectation)>,
}

impl TestCase {
    pub fn new(id: impl Into<String>, description: impl Into<String>, input: ExtractRequest) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            input,
            expected: Vec::new(),
        }
    }

    pub fn expecting(mut self, key: impl Into<String>, e: Expectation) -> Self {
        self.expected.push((key.into(), e));
        self
    }
}
