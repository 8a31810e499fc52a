//! Process invocation and executable lookup.
//!
//! Every external tool the driver touches goes through this module. Child
//! processes run with `Command::current_dir` rather than changing the
//! driver's own working directory, so no step can leave the process in an
//! unexpected location.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};

/// Resolves an executable the way a shell would.
///
/// A name containing a path separator is checked directly; a bare name is
/// searched for in every `PATH` entry. Returns `None` if nothing runnable
/// is found.
pub fn find_tool(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|p| is_executable(p))
}

/// Runs a command to completion with inherited stdio, failing on a
/// non-zero exit.
///
/// The child's exit status is carried in [`Error::CommandFailed`] so the
/// driver can propagate it as its own.
pub fn run_checked<I, S>(program: &Path, args: I, dir: Option<&Path>) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let code = run_status(program, args, dir)?;
    if code == 0 {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            program: display_name(program),
            code,
        })
    }
}

/// Runs a command to completion with inherited stdio and returns its exit
/// code without judging it.
///
/// A child terminated by a signal reports exit code 1.
pub fn run_status<I, S>(program: &Path, args: I, dir: Option<&Path>) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let status = command.status().map_err(|e| spawn_error(program, e))?;
    Ok(exit_code_of(status))
}

/// Runs a command and returns its trimmed stdout.
///
/// Used for short queries like asking git for the current branch name.
pub fn capture_stdout(program: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(program = ?program, stderr = %stderr, "command failed");
        return Err(Error::CommandFailed {
            program: display_name(program),
            code: exit_code_of(output.status),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// A spawn failure with `NotFound` means the tool itself is missing, which
/// gets its own diagnostic; anything else is a plain IO error.
fn spawn_error(program: &Path, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::ToolNotFound {
            tool: display_name(program),
        }
    } else {
        Error::Io(err)
    }
}

fn display_name(program: &Path) -> String {
    program.display().to_string()
}

fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
