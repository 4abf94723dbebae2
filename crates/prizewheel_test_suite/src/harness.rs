//! Test harness for visual tests
//!
//! Provides infrastructure for running visual tests, including:
//! - Shared renderers and assets
//! - Rendering scenarios to PNG files
//! - Reference image comparison

use anyhow::{Context, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use prizewheel::{AvatarImage, Canvas, CompositeRenderer, WheelAssets};
use prizewheel_core::WheelStyle;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of a visual test
#[derive(Debug)]
pub enum TestResult {
    /// Test passed
    Passed,
    /// Test passed but reference image was created
    PassedWithNewReference,
    /// Test failed with difference ratio
    Failed { difference: f32, diff_path: PathBuf },
    /// Test produced no image
    Skipped { reason: String },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(
            self,
            TestResult::Passed | TestResult::PassedWithNewReference
        )
    }
}

/// Context handed to each test case
pub struct TestContext<'a> {
    /// Test name
    pub name: String,
    harness: &'a TestHarness,
    output: Option<Canvas>,
}

impl<'a> TestContext<'a> {
    /// Renderer with the default style
    pub fn renderer(&self) -> &CompositeRenderer {
        &self.harness.renderer
    }

    /// Renderer with a custom style, sharing the harness assets
    pub fn renderer_with(&self, style: WheelStyle) -> Result<CompositeRenderer> {
        CompositeRenderer::new(style, Arc::clone(&self.harness.assets))
            .context("Failed to create renderer")
    }

    /// Load an avatar the way the composite renderer does
    pub fn avatar(&self, source: &str) -> AvatarImage {
        self.harness
            .runtime
            .block_on(self.renderer().avatar_loader().load(source))
    }

    pub fn fallback_avatar(&self) -> AvatarImage {
        self.renderer().avatar_loader().fallback()
    }

    /// Set the image this test is judged by
    pub fn output(&mut self, canvas: Canvas) {
        self.output = Some(canvas);
    }
}

/// Test harness for running visual tests
pub struct TestHarness {
    assets: Arc<WheelAssets>,
    renderer: CompositeRenderer,
    /// Runtime for avatar loading
    runtime: tokio::runtime::Runtime,
    /// Output directory for test results
    output_dir: PathBuf,
    /// Reference image directory
    reference_dir: PathBuf,
    /// Difference threshold for visual comparison (0.0-1.0)
    threshold: f32,
}

impl TestHarness {
    /// Create a new test harness with custom configuration
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        let assets = Arc::new(WheelAssets::bundled().context("Failed to load bundled assets")?);
        let renderer = CompositeRenderer::new(WheelStyle::default(), Arc::clone(&assets))
            .context("Failed to create renderer")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create async runtime")?;

        std::fs::create_dir_all(&config.output_dir).context("Failed to create output directory")?;
        std::fs::create_dir_all(&config.reference_dir)
            .context("Failed to create reference directory")?;

        Ok(Self {
            assets,
            renderer,
            runtime,
            output_dir: config.output_dir,
            reference_dir: config.reference_dir,
            threshold: config.threshold,
        })
    }

    /// Mean per-channel difference: 0.0 for identical images, 1.0 for a size mismatch
    pub fn compare_images(img1: &RgbaImage, img2: &RgbaImage) -> f32 {
        if img1.dimensions() != img2.dimensions() {
            return 1.0;
        }

        let (width, height) = img1.dimensions();
        let total_pixels = width as f64 * height as f64;
        if total_pixels == 0.0 {
            return 0.0;
        }

        let diff_sum: f64 = img1
            .pixels()
            .zip(img2.pixels())
            .map(|(p1, p2)| {
                let channels: f64 = (0..4)
                    .map(|c| (p1[c] as f64 - p2[c] as f64).abs() / 255.0)
                    .sum();
                channels / 4.0
            })
            .sum();

        (diff_sum / total_pixels) as f32
    }

    /// Highlight differing pixels in red over a dimmed copy of `img1`
    pub fn generate_diff_image(img1: &RgbaImage, img2: &RgbaImage) -> Option<RgbaImage> {
        if img1.dimensions() != img2.dimensions() {
            return None;
        }

        let (width, height) = img1.dimensions();
        Some(ImageBuffer::from_fn(width, height, |x, y| {
            let p1 = img1.get_pixel(x, y);
            let p2 = img2.get_pixel(x, y);
            let max_diff = (0..4)
                .map(|c| (p1[c] as i32 - p2[c] as i32).abs())
                .max()
                .unwrap_or(0);

            if max_diff > 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([p1[0] / 3, p1[1] / 3, p1[2] / 3, 128])
            }
        }))
    }

    /// Run a test, save its output as PNG and compare it with the reference
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> Result<TestResult>
    where
        F: FnOnce(&mut TestContext) -> Result<()>,
    {
        let mut ctx = TestContext {
            name: name.to_string(),
            harness: self,
            output: None,
        };
        test_fn(&mut ctx)?;

        let Some(canvas) = ctx.output else {
            return Ok(TestResult::Skipped {
                reason: "test produced no image".to_string(),
            });
        };

        let output_path = self.output_path(name);
        let png = canvas.encode_png().context("Failed to encode PNG")?;
        std::fs::write(&output_path, &png)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        tracing::info!("Rendered test '{}' to {:?}", name, output_path);

        self.compare_with_reference(name, &output_path)
    }

    fn compare_with_reference(&self, name: &str, output_path: &Path) -> Result<TestResult> {
        let reference_path = self.reference_path(name);

        if !reference_path.exists() {
            std::fs::copy(output_path, &reference_path)
                .context("Failed to create reference image")?;
            tracing::info!(
                "Test '{}' created new reference at {:?}",
                name,
                reference_path
            );
            return Ok(TestResult::PassedWithNewReference);
        }

        let output_img = image::open(output_path)
            .context("Failed to open output image")?
            .to_rgba8();
        let reference_img = image::open(&reference_path)
            .context("Failed to open reference image")?
            .to_rgba8();

        let difference = Self::compare_images(&output_img, &reference_img);

        if difference <= self.threshold {
            tracing::info!("Test '{}' PASSED (diff: {:.4}%)", name, difference * 100.0);
            Ok(TestResult::Passed)
        } else {
            let diff_path = self.diff_path(name);
            if let Some(diff_img) = Self::generate_diff_image(&output_img, &reference_img) {
                diff_img.save(&diff_path).ok();
            }
            tracing::warn!(
                "Test '{}' FAILED (diff: {:.4}%, threshold: {:.4}%)",
                name,
                difference * 100.0,
                self.threshold * 100.0
            );
            Ok(TestResult::Failed {
                difference,
                diff_path,
            })
        }
    }

    /// Get the reference image path for a test
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.reference_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the output image path for a test
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the diff image path for a test
    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}_diff.png", file_stem(name)))
    }
}

/// `category::name` becomes `category__name`
fn file_stem(name: &str) -> String {
    name.replace("::", "__")
}

/// Configuration for test harness
#[derive(Debug, Clone)]
pub struct TestHarnessConfig {
    /// Output directory for test results
    pub output_dir: PathBuf,
    /// Reference image directory
    pub reference_dir: PathBuf,
    /// Difference threshold for visual comparison (0.0-1.0)
    pub threshold: f32,
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("test_output"),
            reference_dir: PathBuf::from("test_output/references"),
            threshold: 0.001, // 0.1% difference allowed
        }
    }
}
