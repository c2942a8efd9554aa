//! engine::shell
//!
//! Shell-safe argument composition.
//!
//! Pass-through arguments are appended to the script body as a single
//! string, so each one must survive the shell as exactly one token. The
//! contract is round-trip fidelity: escaping then shell-splitting the
//! result reproduces the original arguments, including values with spaces,
//! quotes, and `$`.
//!
//! [`display_join`] is the unescaped rendering for user-facing echo only.
//! It must never be the string actually executed.

/// Render arguments as a single shell-safe string.
///
/// POSIX hosts delegate to `shell_words::join`; Windows uses `cmd.exe`
/// argv quoting rules.
///
/// # Example
///
/// ```
/// use runlet::engine::shell::escape_args;
///
/// let args = vec!["a b".to_string(), "c".to_string()];
/// assert_eq!(escape_args(&args), "'a b' c");
/// ```
pub fn escape_args(args: &[String]) -> String {
    if cfg!(windows) {
        args.iter()
            .map(|a| escape_windows(a))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        shell_words::join(args)
    }
}

/// Render arguments for human-readable display, without escaping.
pub fn display_join(args: &[String]) -> String {
    args.join(" ")
}

/// Quote one argument for the Windows command interpreter.
///
/// Arguments without whitespace or metacharacters pass through unchanged.
/// Otherwise the argument is double-quoted, with backslash runs doubled
/// before quotes and embedded quotes backslash-escaped, per the MSVCRT
/// argv parsing rules.
fn escape_windows(arg: &str) -> String {
    let needs_quoting = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '&' | '|' | '<' | '>' | '^' | '%'));

    if !needs_quoting {
        return arg.to_string();
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');

    let mut backslashes = 0;
    for c in arg.chars() {
        match c {
            '\\' => {
                backslashes += 1;
                out.push('\\');
            }
            '"' => {
                // Double pending backslashes, then escape the quote itself.
                for _ in 0..backslashes {
                    out.push('\\');
                }
                backslashes = 0;
                out.push('\\');
                out.push('"');
            }
            _ => {
                backslashes = 0;
                out.push(c);
            }
        }
    }

    // Backslashes before the closing quote must be doubled too.
    for _ in 0..backslashes {
        out.push('\\');
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_args_pass_through() {
        assert_eq!(escape_args(&args(&["a", "b", "c"])), "a b c");
    }

    #[test]
    fn empty_list_renders_empty() {
        assert_eq!(escape_args(&[]), "");
    }

    #[cfg(unix)]
    #[test]
    fn spaces_are_quoted() {
        let escaped = escape_args(&args(&["a b", "c"]));
        let split = shell_words::split(&escaped).unwrap();
        assert_eq!(split, args(&["a b", "c"]));
    }

    #[cfg(unix)]
    #[test]
    fn quotes_and_dollars_round_trip() {
        let original = args(&[r#"say "hi""#, "$HOME", "back\\slash", "semi;colon"]);
        let split = shell_words::split(&escape_args(&original)).unwrap();
        assert_eq!(split, original);
    }

    #[cfg(unix)]
    #[test]
    fn empty_argument_survives() {
        let original = args(&["", "x"]);
        let split = shell_words::split(&escape_args(&original)).unwrap();
        assert_eq!(split, original);
    }

    #[test]
    fn display_join_is_unescaped() {
        assert_eq!(display_join(&args(&["a b", "c"])), "a b c");
    }

    #[test]
    fn windows_quoting_rules() {
        assert_eq!(escape_windows("plain"), "plain");
        assert_eq!(escape_windows("a b"), "\"a b\"");
        assert_eq!(escape_windows(""), "\"\"");
        assert_eq!(escape_windows(r#"say "hi""#), r#""say \"hi\"""#);
        // Trailing backslash doubled before the closing quote.
        assert_eq!(escape_windows(r"dir\ name\"), r#""dir\ name\\""#);
    }
}
