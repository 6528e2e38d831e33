//! Strongly-typed table name wrapper.

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// A table name as written in configuration (e.g. "orders" or "sales.ORDERS").
    ///
    /// Display keeps the configured casing. Comparisons between tables go
    /// through [`canonical`](Self::canonical) so that `orders` and `ORDERS`
    /// refer to the same table.
    pub struct TableName;
}

impl TableName {
    /// Uppercased form used for membership and visited-set checks.
    pub fn canonical(&self) -> String {
        canonicalize(&self.0)
    }
}

/// Canonicalize a raw table name for comparison.
pub fn canonicalize(name: &str) -> String {
    name.to_uppercase()
}
