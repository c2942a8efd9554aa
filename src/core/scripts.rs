//! core::scripts
//!
//! The script table: an ordered, read-only mapping of script name to
//! script body, plus the list of malformed names found alongside it.
//!
//! # Invariants
//!
//! - Entry order equals the manifest's insertion order
//! - Malformed names never appear in [`ScriptTable::names`] or resolve via
//!   [`ScriptTable::body`]
//! - The table is immutable once built

/// An ordered script table for one project.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptTable {
    entries: Vec<(String, String)>,
    malformed: Vec<String>,
}

impl ScriptTable {
    /// Build a table from well-formed entries and malformed names.
    ///
    /// Callers are responsible for having already applied the naming rule;
    /// see [`crate::core::manifest::Manifest::script_table`].
    pub fn new(entries: Vec<(String, String)>, malformed: Vec<String>) -> Self {
        Self { entries, malformed }
    }

    /// Script names in insertion order, excluding malformed entries.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Look up the body for a script name.
    pub fn body(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, body)| body.as_str())
    }

    /// Well-formed entries in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Names that failed the naming rule, in insertion order.
    pub fn malformed(&self) -> &[String] {
        &self.malformed
    }

    /// True if the table holds no runnable scripts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
