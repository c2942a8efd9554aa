//! ui
//!
//! User-facing output: verbosity-gated printing and the help screen.

pub mod help;
pub mod output;

pub use output::Verbosity;
