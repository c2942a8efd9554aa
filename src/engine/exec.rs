//! engine::exec
//!
//! The process executor.
//!
//! # Executor Contract
//!
//! The executor is the only component that spawns child processes. It:
//! 1. Runs the composed command line as a single shell command, so script
//!    bodies may use `&&`, pipes, and variable expansion unmodified
//! 2. Sets the child's working directory to the project root
//! 3. Prepends the project's local bin directory to the child's `PATH`
//! 4. Marks the child environment with [`NESTED_ENV`] so a script that
//!    re-invokes Runlet does not re-run lifecycle hooks
//! 5. Forwards the invocation directory via [`INIT_CWD_ENV`]
//!
//! A child exiting non-zero is **not** an executor error: the numeric code
//! is returned and the dispatcher decides what it means. Executor errors
//! are launch failures only.

use std::ffi::OsString;
use std::path::Path;

use thiserror::Error;
use tokio::process::Command;

/// Marker set in every child environment. Its presence in Runlet's own
/// environment means this is a nested invocation and hooks are suppressed.
pub const NESTED_ENV: &str = "RUNLET_NESTED";

/// Child environment variable carrying the directory Runlet was invoked
/// from, for package-manager-convention layers that locate configuration
/// relative to the original call site.
pub const INIT_CWD_ENV: &str = "RUNLET_INIT_CWD";

/// Errors from execution.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The shell could not be launched.
    #[error("failed to launch shell: {0}")]
    Spawn(#[from] std::io::Error),

    /// The child `PATH` could not be assembled.
    #[error("invalid PATH entry: {0}")]
    Path(#[from] std::env::JoinPathsError),
}

/// One child-process execution request.
#[derive(Debug)]
pub struct ExecRequest<'a> {
    /// The full shell command line to run.
    pub command_line: &'a str,
    /// Child working directory (the project root).
    pub work_dir: &'a Path,
    /// Directory Runlet was invoked from.
    pub init_dir: &'a Path,
    /// Local bin directory to prepend to the child's `PATH`.
    pub local_bin: &'a Path,
}

/// Run a command line to completion and return its exit code.
///
/// At most one child process is in flight per call; the future resolves
/// when the child terminates. A child killed by a signal carries no exit
/// code and maps to `1`.
pub async fn execute(req: &ExecRequest<'_>) -> Result<i32, ExecError> {
    let mut cmd = shell_command(req.command_line);
    cmd.current_dir(req.work_dir)
        .env(NESTED_ENV, "1")
        .env(INIT_CWD_ENV, req.init_dir)
        .env("PATH", prepend_path(req.local_bin)?);

    let status = cmd.status().await?;
    Ok(status.code().unwrap_or(1))
}

/// Build the platform shell command for a command line.
fn shell_command(command_line: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd.exe");
        cmd.args(["/d", "/s", "/c", command_line]);
        cmd
    } else {
        let mut cmd = Command::new("/bin/sh");
        cmd.args(["-c", command_line]);
        cmd
    }
}

/// Assemble the child's `PATH` with `local_bin` first.
fn prepend_path(local_bin: &Path) -> Result<OsString, std::env::JoinPathsError> {
    let mut parts = vec![local_bin.to_path_buf()];
    if let Some(path) = std::env::var_os("PATH") {
        parts.extend(std::env::split_paths(&path));
    }
    std::env::join_paths(parts)
}
