//! On-demand test fixture checkout.
//!
//! Fixture files are versioned outside the main source tree and fetched
//! only when the local copy is missing. Presence of the directory is the
//! whole check; keeping an existing copy up to date is the user's problem.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::exec;

/// Default location of the fixture files, relative to the invocation
/// directory.
pub const DEFAULT_TESTS_DIR: &str = "../lib/tests";

/// Local store of test fixture files.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    /// Creates a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the fixture directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether a local copy of the fixtures exists.
    pub fn is_present(&self) -> bool {
        self.dir.is_dir()
    }

    /// Checks the fixtures out from `url` into the store directory.
    ///
    /// `svn` must already be resolved; a checkout failure propagates the
    /// client's exit status.
    pub fn fetch(&self, svn: &Path, url: &str) -> Result<()> {
        tracing::info!(url = %url, dir = ?self.dir, "checking out test fixtures");
        let args: [&OsStr; 3] = [
            OsStr::new("checkout"),
            OsStr::new(url),
            self.dir.as_os_str(),
        ];
        exec::run_checked(svn, args, None)
    }
}
