//! cli
//!
//! Command-line interface layer for Runlet.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to the dispatcher
//! - Map the dispatch [`Outcome`] to the process exit code
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses tokens via [`args::parse`] and hands the
//! request to [`crate::engine::dispatch`]. Error messages for usage and
//! unexpected failures are printed here, once, at the top level; a script's
//! own non-zero exit code is propagated silently.

pub mod args;

pub use args::Invocation;

use std::path::PathBuf;

use crate::engine::{self, Outcome};
use crate::ui::output;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns the process
/// exit code.
pub async fn run() -> i32 {
    let tokens: Vec<String> = std::env::args().skip(1).collect();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            output::error(format!("cannot determine working directory: {}", err));
            return 1;
        }
    };

    run_with(tokens, cwd).await
}

/// Run with an explicit token list and working directory.
///
/// Split out from [`run`] so tests can drive the full pipeline without
/// touching process globals.
pub async fn run_with(tokens: Vec<String>, cwd: PathBuf) -> i32 {
    let inv = args::parse(tokens);

    let ctx = engine::Context {
        cwd,
        quiet: inv.quiet,
        debug: inv.debug,
        ignore_hooks: inv.ignore_hooks,
    };

    let outcome = engine::dispatch::dispatch(&inv, &ctx).await;

    match &outcome {
        Outcome::UsageError(msg) | Outcome::UnexpectedError(msg) => output::error(msg),
        Outcome::Success | Outcome::ProcessFailure(_) => {}
    }

    outcome.exit_code()
}
