//! ui::help
//!
//! The help screen: usage text plus the project's script table.
//!
//! Script names are padded to the longest name so bodies align; each body
//! is truncated to fit the terminal width minus the label prefix.

use crate::core::scripts::ScriptTable;

/// Fallback width when the output is not a terminal.
const DEFAULT_WIDTH: usize = 80;

/// Probe the terminal width, falling back to [`DEFAULT_WIDTH`].
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Render the full help screen for a script table.
///
/// Pure function of the table and width, so it is directly testable.
pub fn render(table: &ScriptTable, width: usize) -> String {
    let mut out = String::new();

    out.push_str("Runlet - run project-defined scripts\n");
    out.push('\n');
    out.push_str("Usage:\n");
    out.push_str("  rn [-h]\n");
    out.push_str("  rn [-q|--quiet] [-d|--debug] [--ignore-hooks] <command> [args...]\n");
    out.push('\n');

    if table.is_empty() {
        out.push_str("No scripts defined in the project manifest.\n");
    } else {
        out.push_str("Scripts:\n");
        let pad = table.names().map(str::len).max().unwrap_or(0);
        for (name, body) in table.entries() {
            let label = format!("  {:<pad$}  ", name, pad = pad);
            let avail = width.saturating_sub(label.len());
            out.push_str(&label);
            out.push_str(&truncate(body, avail));
            out.push('\n');
        }
    }

    for name in table.malformed() {
        out.push_str(&format!(
            "warning: ignoring script with invalid name: {:?}\n",
            name
        ));
    }

    out
}

/// Truncate to `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
