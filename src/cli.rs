//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;

/// Runs the automated test suite for an already-configured build directory,
/// fetching versioned test fixtures first if they are missing locally.
#[derive(Parser, Debug)]
#[command(name = "testdrive", version, about)]
pub struct Cli {
    /// Test runner executable [default: ctest]
    #[arg(long, value_name = "CMD")]
    pub ctest_command: Option<String>,

    /// Build configurator executable [default: cmake]
    #[arg(long, value_name = "CMD")]
    pub cmake_command: Option<String>,

    /// Client used to check out test fixtures [default: svn]
    #[arg(long, value_name = "CMD")]
    pub svn_command: Option<String>,

    /// Client used to detect the current branch [default: git]
    #[arg(long, value_name = "CMD")]
    pub git_command: Option<String>,

    /// Directory holding the test fixture files [default: ../lib/tests]
    #[arg(long, value_name = "DIR")]
    pub tests_dir: Option<PathBuf>,

    /// Root URL the fixture checkout URL is derived from
    #[arg(long, value_name = "URL")]
    pub fixtures_url: Option<String>,

    /// TOML config file supplying defaults for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a machine-readable run summary on stdout after the run
    #[arg(long)]
    pub json: bool,

    /// The configured build directory to run tests in
    pub build_directory: PathBuf,
}
