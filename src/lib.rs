//! Runlet - a CLI for running project-defined scripts
//!
//! Runlet looks up a named script in the nearest project manifest, composes
//! a shell command line from the script body plus any pass-through arguments,
//! runs optional pre/post lifecycle hooks around it, and exits with the
//! script's own exit code.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Orchestrates Parse → Resolve → Hook → Execute → Finalize
//! - [`core`] - Manifest, script table, naming rules, paths, configuration
//! - [`ui`] - Output formatting and the help screen
//!
//! # Correctness Invariants
//!
//! Runlet maintains the following invariants:
//!
//! 1. Tokens after the command name are forwarded verbatim to the script
//! 2. A failing lifecycle hook never prevents or fails script execution
//! 3. A script's non-zero exit code is propagated unchanged to the caller
//! 4. All child processes are spawned through the single executor

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
