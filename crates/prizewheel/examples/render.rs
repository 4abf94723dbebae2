//! Render a prize wheel to PNG
//!
//! Run with: cargo run -p prizewheel --example render -- --segments wheel.json --avatar https://example.com/me.png
//!
//! `wheel.json` holds an array of `{ "label": "...", "winner": true }` records.
//! Without `--segments` a small built-in wheel is drawn.

use anyhow::{Context, Result};
use clap::Parser;
use prizewheel::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "render")]
#[command(about = "Render a prize wheel to PNG", long_about = None)]
struct Args {
    /// JSON file with the segments
    #[arg(short, long)]
    segments: Option<PathBuf>,

    /// TOML style overrides
    #[arg(long)]
    style: Option<PathBuf>,

    /// Avatar URL, data URI or file path
    #[arg(short, long, default_value = "")]
    avatar: String,

    /// Asset directory to use instead of the bundled assets
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Output path
    #[arg(short, long, default_value = "wheel.png")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn default_segments() -> Vec<Segment> {
    vec![
        Segment::new("Free coffee"),
        Segment::new("10% off"),
        Segment::winner("Weekend getaway for two"),
        Segment::new("Try again"),
        Segment::new("Sticker pack"),
        Segment::new("Mystery box"),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
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

    let segments = match &args.segments {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading segments from {}", path.display()))?;
            serde_json::from_str::<Vec<Segment>>(&json)
                .with_context(|| format!("parsing segments in {}", path.display()))?
        }
        None => default_segments(),
    };

    let style = match &args.style {
        Some(path) => {
            let toml = std::fs::read_to_string(path)
                .with_context(|| format!("reading style from {}", path.display()))?;
            WheelStyle::from_toml_str(&toml)
                .with_context(|| format!("parsing style in {}", path.display()))?
        }
        None => WheelStyle::default(),
    };

    let assets = match &args.assets {
        Some(dir) => WheelAssets::from_dir(dir)?,
        None => WheelAssets::bundled()?,
    };

    let renderer = CompositeRenderer::new(style, Arc::new(assets))?;
    let png = renderer.render(&segments, &args.avatar).await?;

    std::fs::write(&args.output, &png)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(
        "Wrote {} ({} segments, {} bytes)",
        args.output.display(),
        segments.len(),
        png.len()
    );

    Ok(())
}
