//! Release channel detection.
//!
//! Test fixtures live in a versioned repository whose layout mirrors the
//! project's release process: tagged releases keep a frozen copy of their
//! fixtures, everything else tracks trunk. The current git branch decides
//! which copy a checkout should come from.

use std::path::Path;

use crate::error::{Error, Result};
use crate::exec;

/// Default root URL fixtures are checked out from. Overridable via
/// `--fixtures-url` or the `[fixtures]` config section.
pub const DEFAULT_FIXTURES_URL: &str = "https://svn.example.org/svnroot/libraries";

/// Which fixture archive the current build should fetch from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseChannel {
    /// A numbered release build, on a branch named `v<version>-release`.
    Release(String),
    /// An in-development build on any other branch.
    Development,
}

impl ReleaseChannel {
    /// Detects the channel from the current branch of the repository the
    /// driver is invoked in.
    pub fn detect(git: &Path) -> Result<Self> {
        let branch = exec::capture_stdout(git, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        if branch.is_empty() {
            return Err(Error::Branch("git reported an empty branch name".to_string()));
        }
        tracing::debug!(branch = %branch, "detected current branch");
        Ok(Self::from_branch(&branch))
    }

    /// Classifies a branch name. Only `v<version>-release` counts as a
    /// release; detached `HEAD` and everything else is development.
    pub fn from_branch(branch: &str) -> Self {
        let branch = branch.trim();
        match branch
            .strip_prefix('v')
            .and_then(|rest| rest.strip_suffix("-release"))
        {
            Some(version) if !version.is_empty() => ReleaseChannel::Release(version.to_string()),
            _ => ReleaseChannel::Development,
        }
    }

    /// Base URL of the library archive for this channel.
    pub fn libraries_base_url(&self, root: &str) -> String {
        let root = root.trim_end_matches('/');
        match self {
            ReleaseChannel::Release(version) => {
                format!("{}/tags/v{}-release/lib", root, version)
            }
            ReleaseChannel::Development => format!("{}/trunk/lib", root),
        }
    }

    /// Checkout URL for the test fixtures of this channel.
    pub fn fixtures_url(&self, root: &str) -> String {
        format!("{}/tests", self.libraries_base_url(root))
    }
}
