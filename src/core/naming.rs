//! core::naming
//!
//! Script naming rules and validation.
//!
//! Script names must be shell-safe identifiers so they can be typed on the
//! command line and echoed without quoting. Names that fail the rule are
//! "malformed": excluded from lookup and enumeration, reported in help
//! output.

/// Check whether a script name is valid.
///
/// The first character must be ASCII alphanumeric or `_`; subsequent
/// characters may additionally be `-`, `.` or `:`.
///
/// # Example
///
/// ```
/// use runlet::core::naming::is_valid_name;
///
/// assert!(is_valid_name("build"));
/// assert!(is_valid_name("test:unit"));
/// assert!(!is_valid_name("bad name"));
/// assert!(!is_valid_name("-flag"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}
