//! Test run orchestration.
//!
//! A run is a fixed sequence of fallible steps: resolve the test runner,
//! fetch missing fixtures, reconfigure the build directory if anything was
//! fetched, then hand off to the test runner. Every failure is terminal;
//! there are no retries.

use std::path::Path;

use serde::Serialize;

use crate::config::DriverConfig;
use crate::error::{Error, Result};
use crate::exec;
use crate::fixtures::FixtureStore;
use crate::release::ReleaseChannel;

/// What a run did and how the test suite exited.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Whether missing fixtures were checked out.
    pub fixtures_fetched: bool,
    /// Whether the build directory was reconfigured to register new tests.
    pub reconfigured: bool,
    /// Exit code of the test runner invocation.
    pub test_exit_code: i32,
}

/// Sequential driver for one test run.
pub struct TestDriver {
    config: DriverConfig,
}

impl TestDriver {
    /// Creates a driver for the given resolved configuration.
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Runs the whole sequence and reports how the test suite exited.
    ///
    /// The test runner's own exit code is data in the summary, not an
    /// error; a failing prerequisite step aborts with an [`Error`] instead.
    pub fn run(&self) -> Result<RunSummary> {
        // The runner check comes first so a misconfigured environment fails
        // before any checkout or reconfigure side effect.
        let ctest = exec::find_tool(&self.config.ctest).ok_or_else(|| Error::ToolNotFound {
            tool: self.config.ctest.clone(),
        })?;
        tracing::debug!(path = ?ctest, "resolved test runner");

        let store = FixtureStore::new(self.config.tests_dir.clone());
        let mut fixtures_fetched = false;
        let mut reconfigured = false;

        if !store.is_present() {
            tracing::info!(dir = ?store.dir(), "test fixtures not found, downloading");
            self.fetch_fixtures(&store)?;
            fixtures_fetched = true;

            self.reconfigure()?;
            reconfigured = true;
        }

        tracing::info!(build_dir = ?self.config.build_dir, "running test suite");
        let test_exit_code = exec::run_status(
            &ctest,
            [".", "--output-on-failure"],
            Some(&self.config.build_dir),
        )?;

        Ok(RunSummary {
            fixtures_fetched,
            reconfigured,
            test_exit_code,
        })
    }

    /// Checks out the fixture files for the current release channel.
    fn fetch_fixtures(&self, store: &FixtureStore) -> Result<()> {
        let svn = exec::find_tool(&self.config.svn).ok_or_else(|| Error::ToolNotFound {
            tool: self.config.svn.clone(),
        })?;

        let channel = ReleaseChannel::detect(Path::new(&self.config.git))?;
        let url = channel.fixtures_url(&self.config.fixtures_url);
        store.fetch(&svn, &url)
    }

    /// Re-runs the build configurator so it registers the new test files.
    fn reconfigure(&self) -> Result<()> {
        tracing::info!(build_dir = ?self.config.build_dir, "reconfiguring to register new test files");
        exec::run_checked(
            Path::new(&self.config.cmake),
            ["."],
            Some(&self.config.build_dir),
        )
    }
}
