//! Dialect resolution
//!
//! The configured language names the documents being edited ("Oracle",
//! "PostgreSQL", ...). It is resolved against the dialects sqlparser ships;
//! the rewriter itself is dialect-agnostic.

use sqlparser::dialect::{dialect_from_str, Dialect, GenericDialect};

/// Name of the fallback dialect
pub const GENERIC: &str = "generic";

/// sqlparser dialect for `name` (any casing), if sqlparser knows it.
pub fn resolve_dialect(name: &str) -> Option<Box<dyn Dialect>> {
    dialect_from_str(name.to_lowercase())
}

/// Whether sqlparser has a dialect called `name`
pub fn is_known_dialect(name: &str) -> bool {
    resolve_dialect(name).is_some()
}

pub(crate) fn generic_dialect() -> Box<dyn Dialect> {
    Box::new(GenericDialect {})
}

/// Read `(line, column)` back out of a sqlparser error message.
///
/// Messages end in "at Line: N, Column: M"; `(0, 0)` when either is missing.
pub(crate) fn error_location(message: &str) -> (usize, usize) {
    match (
        number_after(message, "Line: "),
        number_after(message, "Column: "),
    ) {
        (Some(line), Some(column)) => (line, column),
        _ => (0, 0),
    }
}

fn number_after(message: &str, label: &str) -> Option<usize> {
    let start = message.rfind(label)? + label.len();
    let digits: String = message[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
