//! Driver configuration: file config, resolution, and validation.
//!
//! Tool names resolve in layers: an explicit CLI flag wins, then a value
//! from the optional TOML config file, then the built-in default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::fixtures::DEFAULT_TESTS_DIR;
use crate::release::DEFAULT_FIXTURES_URL;

/// Default test runner executable.
pub const DEFAULT_CTEST_COMMAND: &str = "ctest";
/// Default build configurator executable.
pub const DEFAULT_CMAKE_COMMAND: &str = "cmake";
/// Default fixture checkout client.
pub const DEFAULT_SVN_COMMAND: &str = "svn";
/// Default branch detection client.
pub const DEFAULT_GIT_COMMAND: &str = "git";

/// Optional config file contents. Every field is optional; missing
/// sections fall through to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Tool name overrides.
    #[serde(default)]
    pub tools: ToolsSection,
    /// Fixture location overrides.
    #[serde(default)]
    pub fixtures: FixturesSection,
}

/// `[tools]` section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsSection {
    pub ctest: Option<String>,
    pub cmake: Option<String>,
    pub svn: Option<String>,
    pub git: Option<String>,
}

/// `[fixtures]` section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixturesSection {
    /// Root URL the checkout URL is derived from.
    pub url: Option<String>,
    /// Local fixture directory.
    pub dir: Option<PathBuf>,
}

impl FileConfig {
    /// Loads a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Fully resolved driver configuration.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Test runner command.
    pub ctest: String,
    /// Build configurator command.
    pub cmake: String,
    /// Fixture checkout client command.
    pub svn: String,
    /// Branch detection client command.
    pub git: String,
    /// Local fixture directory.
    pub tests_dir: PathBuf,
    /// Root URL the fixture checkout URL is derived from.
    pub fixtures_url: String,
    /// The configured build directory tests run in.
    pub build_dir: PathBuf,
}

impl DriverConfig {
    /// Merges CLI arguments over file config over built-in defaults.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        Self {
            ctest: cli
                .ctest_command
                .clone()
                .or(file.tools.ctest)
                .unwrap_or_else(|| DEFAULT_CTEST_COMMAND.to_string()),
            cmake: cli
                .cmake_command
                .clone()
                .or(file.tools.cmake)
                .unwrap_or_else(|| DEFAULT_CMAKE_COMMAND.to_string()),
            svn: cli
                .svn_command
                .clone()
                .or(file.tools.svn)
                .unwrap_or_else(|| DEFAULT_SVN_COMMAND.to_string()),
            git: cli
                .git_command
                .clone()
                .or(file.tools.git)
                .unwrap_or_else(|| DEFAULT_GIT_COMMAND.to_string()),
            tests_dir: cli
                .tests_dir
                .clone()
                .or(file.fixtures.dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TESTS_DIR)),
            fixtures_url: cli
                .fixtures_url
                .clone()
                .or(file.fixtures.url)
                .unwrap_or_else(|| DEFAULT_FIXTURES_URL.to_string()),
            build_dir: cli.build_directory.clone(),
        }
    }
}

/// Validation result containing all found issues.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors (fatal).
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal).
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Converts to a Result, failing if there are errors.
    pub fn into_result(self) -> Result<Vec<String>> {
        if self.is_valid() {
            Ok(self.warnings)
        } else {
            Err(Error::Config(self.errors.join("; ")))
        }
    }
}

/// Trait for validatable configuration types.
pub trait Validate {
    /// Validates the configuration and returns any issues found.
    fn validate(&self) -> ValidationResult;
}

impl Validate for DriverConfig {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        for (name, value) in [
            ("ctest", &self.ctest),
            ("cmake", &self.cmake),
            ("svn", &self.svn),
            ("git", &self.git),
        ] {
            if value.trim().is_empty() {
                result.add_error(format!("{} command cannot be empty", name));
            }
        }

        if !self.build_dir.is_dir() {
            result.add_error(format!(
                "build directory {} does not exist",
                self.build_dir.display()
            ));
        } else if !self.build_dir.join("CTestTestfile.cmake").exists() {
            result.add_warning(format!(
                "build directory {} has no CTestTestfile.cmake, it may not be configured for testing",
                self.build_dir.display()
            ));
        }

        result
    }
}
