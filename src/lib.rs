//! testdrive - build-pipeline test suite driver
//!
//! This library backs the `testdrive` binary, which a larger build system
//! invokes to run the automated test suite of an already-configured build
//! directory. It resolves the external tools involved, checks out missing
//! test fixtures from the versioned library archive, reconfigures the
//! build directory when new fixtures appear, and hands the process exit
//! status to the test runner.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod exec;
pub mod fixtures;
pub mod release;

pub use cli::Cli;
pub use config::{DriverConfig, FileConfig, Validate, ValidationResult};
pub use driver::{RunSummary, TestDriver};
pub use error::{Error, Result};
pub use fixtures::{FixtureStore, DEFAULT_TESTS_DIR};
pub use release::{ReleaseChannel, DEFAULT_FIXTURES_URL};
