//! prizewheel-visual-tests
//!
//! Renders every wheel scenario to PNG and compares it with its reference
//! image. Missing references are created from the current output.
//!
//! ```text
//! prizewheel-visual-tests --list
//! prizewheel-visual-tests --filter composite --threshold 0.005
//! prizewheel-visual-tests --output-dir /tmp/wheels --reference-dir refs/
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use prizewheel_test_suite::tests::all_suites;
use prizewheel_test_suite::{TestHarness, TestHarnessConfig, TestRunner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "prizewheel-visual-tests")]
#[command(about = "Render wheel scenarios and compare them with reference images")]
struct Args {
    /// Only run cases whose name or category contains this pattern
    #[arg(short, long)]
    filter: Option<String>,

    /// Print the scenarios and exit
    #[arg(long)]
    list: bool,

    /// Where rendered PNGs and diff images are written
    #[arg(long, default_value = "test_output")]
    output_dir: PathBuf,

    /// Reference images; defaults to `<output-dir>/references`
    #[arg(long)]
    reference_dir: Option<PathBuf>,

    /// Largest mean per-channel difference that still passes (0.0-1.0)
    #[arg(long, default_value_t = 0.001, value_parser = parse_threshold)]
    threshold: f32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn harness_config(&self) -> TestHarnessConfig {
        TestHarnessConfig {
            output_dir: self.output_dir.clone(),
            reference_dir: self
                .reference_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.join("references")),
            threshold: self.threshold,
        }
    }
}

fn parse_threshold(value: &str) -> std::result::Result<f32, String> {
    let threshold: f32 = value
        .parse()
        .map_err(|e| format!("not a number: {e}"))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("{threshold} is outside 0.0..=1.0"))
    }
}

fn list_scenarios() {
    for suite in all_suites() {
        println!("{}:", suite.name);
        for case in &suite.cases {
            println!("  {}::{}", suite.name, case.name);
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if args.list {
        list_scenarios();
        return Ok(ExitCode::SUCCESS);
    }

    let config = args.harness_config();
    tracing::info!(
        "Writing to {}, references in {}, threshold {:.4}",
        config.output_dir.display(),
        config.reference_dir.display(),
        config.threshold
    );
    let harness = TestHarness::with_config(config).context("setting up the test harness")?;

    let mut runner = TestRunner::with_harness(harness);
    for suite in all_suites() {
        runner.add_suite(suite);
    }
    if let Some(pattern) = &args.filter {
        runner.filter(pattern);
    }

    let result = runner.run();
    result.print_summary();

    if result.total() == 0 {
        tracing::warn!("No scenario matched {:?}", args.filter);
    }
    Ok(if result.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_harness_config() {
        let args = Args::try_parse_from(["prizewheel-visual-tests"]).unwrap();
        let config = args.harness_config();
        let defaults = TestHarnessConfig::default();

        assert_eq!(config.output_dir, defaults.output_dir);
        assert_eq!(config.reference_dir, defaults.reference_dir);
        assert_eq!(config.threshold, defaults.threshold);
        assert!(!args.list);
    }

    #[test]
    fn test_reference_dir_follows_output_dir() {
        let args =
            Args::try_parse_from(["prizewheel-visual-tests", "--output-dir", "/tmp/wheels"])
                .unwrap();
        assert_eq!(
            args.harness_config().reference_dir,
            PathBuf::from("/tmp/wheels/references")
        );

        let args = Args::try_parse_from([
            "prizewheel-visual-tests",
            "--output-dir",
            "/tmp/wheels",
            "--reference-dir",
            "refs",
            "--threshold",
            "0.01",
            "--filter",
            "composite",
        ])
        .unwrap();
        let config = args.harness_config();
        assert_eq!(config.reference_dir, PathBuf::from("refs"));
        assert_eq!(config.threshold, 0.01);
        assert_eq!(args.filter.as_deref(), Some("composite"));
    }

    #[test]
    fn test_threshold_must_be_a_ratio() {
        assert!(Args::try_parse_from(["prizewheel-visual-tests", "--threshold", "1.5"]).is_err());
        assert!(Args::try_parse_from(["prizewheel-visual-tests", "--threshold", "abc"]).is_err());
        assert_eq!(parse_threshold("0").unwrap(), 0.0);
    }
}
