//! Visual test cases organized by category


use crate::runner::TestSuite;

/// Create all test suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![segments::suite(), composite::suite()]
}
