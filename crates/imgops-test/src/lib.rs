//! imgops-test - Regression harness shared by the imgops crates
//!
//! Each `tests/*_reg.rs` file creates a [`RegParams`], runs its checks and
//! asserts on [`RegParams::cleanup`]. Images written with
//! [`RegParams::write_pix_and_check`] land in `tests/regout/` and are
//! checked against `tests/golden/` depending on `REGTEST_MODE`:
//!
//! | value      | effect                                   |
//! |------------|------------------------------------------|
//! | `compare`  | default; decoded pixels must match       |
//! | `generate` | refresh the golden files                 |
//! | `display`  | write output only                        |
//!
//! Inputs come from [`fixtures`], so no image files are checked in.
//! `RUST_LOG` controls log output of the crates under test.
//!
//! ```ignore
//! use imgops_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("equalize");
//! let m = fixtures::gradient(16, 16).equalize().unwrap();
//! rp.compare_values(255.0, m.get_pixel(15, 0).unwrap()[0] as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Install the test logger; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `tests/<sub>` under the workspace root.
fn workspace_tests_dir(sub: &str) -> String {
    // this crate lives at crates/imgops-test
    format!("{}/../../tests/{}", env!("CARGO_MANIFEST_DIR"), sub)
}

/// Directory holding golden files.
pub fn golden_dir() -> String {
    workspace_tests_dir("golden")
}

/// Directory receiving regression output.
pub fn regout_dir() -> String {
    workspace_tests_dir("regout")
}
