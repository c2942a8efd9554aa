//! engine
//!
//! Orchestrates the dispatch lifecycle: Resolve → Help | (Pre hook →
//! Execute → Post hook) → Finalize.
//!
//! # Architecture
//!
//! The engine owns the top-level error and exit-code policy. The result of
//! a dispatch is the tagged [`Outcome`], never an ambient process-global
//! exit code, so the mapping from result to exit code is exhaustive and
//! checked by the compiler:
//!
//! - [`Outcome::Success`] → exit 0
//! - [`Outcome::ProcessFailure`] → the script's own exit code, verbatim
//! - [`Outcome::UsageError`] / [`Outcome::UnexpectedError`] → exit 1
//!
//! # Invariants
//!
//! - All child processes are spawned through [`exec`]
//! - Hook failures never cross [`hooks::run_hook_best_effort`]
//! - At most one child process is in flight per dispatch; pre hook,
//!   script, and post hook are awaited strictly in sequence

pub mod dispatch;
pub mod exec;
pub mod hooks;
pub mod shell;

pub use dispatch::dispatch;
pub use exec::{ExecError, ExecRequest};
pub use hooks::{HookError, HookEvent, HookRunner};

use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Execution context assembled by the CLI layer from global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory Runlet was invoked from.
    pub cwd: PathBuf,
    /// Minimal output.
    pub quiet: bool,
    /// Enable debug logging.
    pub debug: bool,
    /// Skip pre/post lifecycle hooks.
    pub ignore_hooks: bool,
}

impl Context {
    /// Output verbosity derived from the quiet/debug flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// The terminal result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The pipeline completed and the script (if any) exited zero.
    Success,
    /// The script completed with a non-zero exit code. The code is
    /// propagated unchanged; no error message is printed for this case.
    ProcessFailure(i32),
    /// Caller error: not inside a project, unknown script name.
    UsageError(String),
    /// Anything else: I/O failures, spawn failures.
    UnexpectedError(String),
}

impl Outcome {
    /// Map the outcome to the process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::ProcessFailure(code) => *code,
            Outcome::UsageError(_) | Outcome::UnexpectedError(_) => 1,
        }
    }
}
