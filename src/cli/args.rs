//! cli::args
//!
//! Command-line argument parsing.
//!
//! # Global Flags
//!
//! Flags are recognized only before the command name:
//! - `--help` / `-h`: Show usage and the script table
//! - `--quiet` / `-q`: Minimal output
//! - `--debug` / `-d`: Enable debug logging
//! - `--ignore-hooks`: Skip pre/post lifecycle hooks
//!
//! Everything after the command name belongs to the invoked script and is
//! forwarded verbatim, leading dashes included. An unrecognized flag before
//! the command name is advisory: it is collected, reported as a warning, and
//! forces the help screen - it is never an error.
//!
//! Parsing is a pure function of the token list. Clap is deliberately not
//! used here: it cannot express advisory unknown flags or the "flags after
//! the command name are data" rule.

/// A parsed invocation request.
///
/// Immutable after [`parse`] returns. If `command` is empty or any unknown
/// flags were seen, `help` is forced true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// Show usage and the script table.
    pub help: bool,
    /// Minimal output.
    pub quiet: bool,
    /// Enable debug logging.
    pub debug: bool,
    /// Skip pre/post lifecycle hooks.
    pub ignore_hooks: bool,
    /// The script name to run. Empty means no command was given.
    pub command: String,
    /// Pass-through arguments for the script, in order.
    pub args: Vec<String>,
    /// Unrecognized flags seen before the command name, in order.
    pub unknown_flags: Vec<String>,
}

/// Parse raw command-line tokens (everything after the program name).
///
/// First match wins per token. Once a command name has been chosen, every
/// remaining token is a pass-through argument, flags included.
pub fn parse<I, S>(tokens: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut inv = Invocation::default();

    for token in tokens {
        let token = token.into();

        if !inv.command.is_empty() {
            inv.args.push(token);
            continue;
        }

        match token.as_str() {
            "-h" | "--help" => inv.help = true,
            "-q" | "--quiet" => inv.quiet = true,
            "-d" | "--debug" => inv.debug = true,
            "--ignore-hooks" => inv.ignore_hooks = true,
            _ if token.starts_with('-') => inv.unknown_flags.push(token),
            _ => inv.command = token,
        }
    }

    if inv.command.is_empty() || !inv.unknown_flags.is_empty() {
        inv.help = true;
    }

    inv
}
