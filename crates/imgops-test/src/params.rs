//! Regression checks and golden-file bookkeeping
//!
//! Every check bumps a running index, so the n-th image written by a test
//! is always `<name>.<nn>.<ext>` in the output directory and
//! `<name>_golden.<nn>.<ext>` among the golden files.

use crate::error::{TestError, TestResult};
use crate::{golden_dir, init_logging, regout_dir};
use imgops_core::PixelMatrix;
use imgops_io::ImageFormat;
use std::fs;
use std::path::Path;

/// What `write_pix_and_check` does with golden files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Overwrite the golden files with this run's output
    Generate,
    /// Decode both files and require identical pixels
    #[default]
    Compare,
    /// Write output only, for inspection by eye
    Display,
}

impl RegTestMode {
    /// Read `REGTEST_MODE`; unset or unrecognized values mean [`Compare`](Self::Compare).
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test
///
/// Checks never panic. They record a failure and return `false`; the test
/// asserts on [`RegParams::cleanup`] at the end.
pub struct RegParams {
    /// Name used in output file names and log lines
    pub test_name: String,
    /// Golden file handling for this run
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a regression test.
    ///
    /// Installs the test logger, reads the mode from `REGTEST_MODE` and
    /// makes sure the output and golden directories exist.
    pub fn new(test_name: &str) -> Self {
        init_logging();
        let mode = RegTestMode::from_env();

        for dir in [golden_dir(), regout_dir()] {
            if let Err(e) = fs::create_dir_all(&dir) {
                log::warn!("cannot create {}: {}", dir, e);
            }
        }
        log::info!("{}_reg: starting in {:?} mode", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far.
    pub fn index(&self) -> usize {
        self.index
    }

    fn next_index(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn fail(&mut self, what: std::fmt::Arguments<'_>) {
        let msg = format!("{}_reg #{}: {}", self.test_name, self.index, what);
        log::error!("{}", msg);
        self.failures.push(msg);
    }

    /// Check `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.next_index();
        let diff = (expected - actual).abs();
        if diff <= delta {
            return true;
        }
        self.fail(format_args!(
            "expected {expected}, got {actual} (off by {diff}, allowed {delta})"
        ));
        false
    }

    /// Check that two matrices have the same size and pixels.
    pub fn compare_pix(&mut self, expected: &PixelMatrix, actual: &PixelMatrix) -> bool {
        self.next_index();
        if !expected.sizes_equal(actual) {
            let (ew, eh) = expected.dimensions();
            let (aw, ah) = actual.dimensions();
            self.fail(format_args!("expected {ew}x{eh} matrix, got {aw}x{ah}"));
            return false;
        }
        match first_difference(expected, actual) {
            None => true,
            Some((x, y)) => {
                self.fail(format_args!(
                    "pixel ({x}, {y}) is {:?}, expected {:?}",
                    actual.get_pixel_unchecked(x, y),
                    expected.get_pixel_unchecked(x, y)
                ));
                false
            }
        }
    }

    /// Write `m` to the output directory and check it against its golden file.
    ///
    /// Without a golden file, compare mode reads the output back instead:
    /// sizes must match, and PNG or BMP output must match pixel for pixel.
    /// Run once with `REGTEST_MODE=generate` to create golden files.
    ///
    /// # Errors
    ///
    /// Returns [`TestError`] if the image cannot be written or read back.
    /// Pixel differences are recorded as check failures instead.
    pub fn write_pix_and_check(&mut self, m: &PixelMatrix, format: ImageFormat) -> TestResult<()> {
        let index = self.next_index();
        let ext = format.extension();
        let local = format!("{}/{}.{:02}.{}", regout_dir(), self.test_name, index, ext);
        let golden = format!("{}/{}_golden.{:02}.{}", golden_dir(), self.test_name, index, ext);

        imgops_io::write_image(m, &local, format).map_err(|source| TestError::Image {
            path: local.clone(),
            source,
        })?;

        match self.mode {
            RegTestMode::Display => {}
            RegTestMode::Generate => {
                fs::copy(&local, &golden)?;
                log::info!("generated {}", golden);
            }
            RegTestMode::Compare if !Path::new(&golden).exists() => {
                log::info!("no golden file {}, checking read-back of {}", golden, local);
                let written = read_back(&local)?;
                let lossless = matches!(format, ImageFormat::Png | ImageFormat::Bmp);
                if !written.sizes_equal(m) {
                    self.fail(format_args!(
                        "{} reads back as {:?}, wrote {:?}",
                        local,
                        written.dimensions(),
                        m.dimensions()
                    ));
                } else if lossless && first_difference(&written, m).is_some() {
                    self.fail(format_args!("{} does not read back losslessly", local));
                }
            }
            RegTestMode::Compare => {
                let written = read_back(&local)?;
                let expected = read_back(&golden)?;
                if !(written.sizes_equal(&expected) && first_difference(&written, &expected).is_none())
                {
                    self.fail(format_args!("{} differs from {}", local, golden));
                }
            }
        }
        Ok(())
    }

    /// Log the outcome and return `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            log::info!("{}_reg: {} checks passed", self.test_name, self.index);
            return true;
        }
        log::error!(
            "{}_reg: {} of {} checks failed",
            self.test_name,
            self.failures.len(),
            self.index
        );
        false
    }

    /// Whether no check has failed yet.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Messages of the failed checks, in order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn read_back(path: &str) -> TestResult<PixelMatrix> {
    imgops_io::read_image(path).map_err(|source| TestError::Image {
        path: path.to_string(),
        source,
    })
}

/// First pixel (x, y) at which two equally sized matrices differ.
fn first_difference(m1: &PixelMatrix, m2: &PixelMatrix) -> Option<(u32, u32)> {
    let height = m1.height() as usize;
    m1.data()
        .iter()
        .zip(m2.data())
        .position(|(a, b)| a != b)
        .map(|i| ((i / height) as u32, (i % height) as u32))
}
