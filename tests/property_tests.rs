//! Property tests for shell argument escaping.
//!
//! The escaper's contract is round-trip fidelity: escaping a list of
//! arguments and splitting the result with POSIX word-splitting rules must
//! reproduce the original list token for token.

#![cfg(unix)]

use proptest::prelude::*;
use runlet::engine::shell;

proptest! {
    /// Printable ASCII covers every shell metacharacter: space, quotes,
    /// `$`, backslash, pipes, globs.
    #[test]
    fn escaping_round_trips(args in prop::collection::vec("[ -~]{0,16}", 0..8)) {
        let escaped = shell::escape_args(&args);
        let split = shell_words::split(&escaped).unwrap();
        prop_assert_eq!(split, args);
    }

    #[test]
    fn escaped_output_never_gains_or_loses_tokens(args in prop::collection::vec("[ -~]{1,12}", 1..6)) {
        let escaped = shell::escape_args(&args);
        prop_assert_eq!(shell_words::split(&escaped).unwrap().len(), args.len());
    }

    #[test]
    fn display_join_is_space_join(args in prop::collection::vec("[a-z]{1,8}", 0..8)) {
        prop_assert_eq!(shell::display_join(&args), args.join(" "));
    }
}

#[test]
fn hostile_examples_round_trip() {
    let args: Vec<String> = [
        "a b",
        r#"say "hi""#,
        "$HOME",
        "semi;colon && rm -rf /",
        "back\\slash",
        "don't",
        "",
        "new\nline",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let escaped = shell::escape_args(&args);
    assert_eq!(shell_words::split(&escaped).unwrap(), args);
}
