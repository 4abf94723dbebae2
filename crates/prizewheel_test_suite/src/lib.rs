//! Prize wheel visual test suite
//!
//! Renders named wheel scenarios to PNG files and compares them with
//! reference images.
//!
//! # Test Categories
//!
//! - **segments**: the wheel face on its own, as the segment renderer draws it
//! - **composite**: finished wheels with bezel, avatar hub and pointer

pub mod harness;
pub mod runner;
pub mod tests;

pub use harness::{TestContext, TestHarness, TestHarnessConfig, TestResult};
pub use runner::TestRunner;
