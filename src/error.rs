//! Error types for the test driver.

use thiserror::Error;

/// Top-level error type for driver operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required external tool could not be resolved.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external command exited with a non-zero status.
    #[error("{program} exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    /// The current branch could not be determined.
    #[error("branch detection failed: {0}")]
    Branch(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while invoking external tools.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Maps the error to the process exit status the driver terminates with.
    ///
    /// Missing tools and local failures exit 1; a failed external command
    /// propagates that command's own exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, Error>;
