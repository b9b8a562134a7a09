pub mod result;
pub mod testcase;
pub mod validate;

pub use result::{Status, TestOutcome};
pub use testcase::{Expectation, TestCase};
pub use validate::{evaluate, issues, Check};
