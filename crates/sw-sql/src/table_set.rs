//! Tables referenced by one query, in first-seen order

use sw_core::canonicalize;

/// Insertion-ordered map of canonical table name to the alias the query uses.
///
/// Keys are canonicalized on the way in; aliases keep their original casing.
/// The first alias recorded for a table wins. One set is built per rewrite
/// and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTableSet {
    entries: Vec<(String, String)>,
}

impl QueryTableSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `table` with `alias` unless the table is already present.
    ///
    /// Returns `true` when the table was newly added.
    pub fn insert(&mut self, table: &str, alias: impl Into<String>) -> bool {
        let key = canonicalize(table);
        if self.entries.iter().any(|(existing, _)| *existing == key) {
            return false;
        }
        self.entries.push((key, alias.into()));
        true
    }

    /// Whether `table` (any casing) is present
    pub fn contains(&self, table: &str) -> bool {
        self.alias_for(table).is_some()
    }

    /// Alias recorded for `table` (any casing)
    pub fn alias_for(&self, table: &str) -> Option<&str> {
        let key = canonicalize(table);
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, alias)| alias.as_str())
    }

    /// `(canonical table, alias)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(table, alias)| (table.as_str(), alias.as_str()))
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no table was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for QueryTableSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = QueryTableSet::new();
        for (table, alias) in iter {
            set.insert(table.as_ref(), alias);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_canonicalizes_key() {
        let mut set = QueryTableSet::new();
        assert!(set.insert("orders", "o"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![("ORDERS", "o")]);
        assert!(set.contains("Orders"));
        assert_eq!(set.alias_for("ORDERS"), Some("o"));
    }

    #[test]
    fn test_first_alias_wins() {
        let mut set = QueryTableSet::new();
        set.insert("ORDERS", "o");
        assert!(!set.insert("orders", "ord"));
        assert_eq!(set.alias_for("orders"), Some("o"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_alias_casing_preserved() {
        let set: QueryTableSet = [("customers", "Cust")].into_iter().collect();
        assert_eq!(set.alias_for("CUSTOMERS"), Some("Cust"));
    }

    #[test]
    fn test_insertion_order_kept() {
        let set: QueryTableSet = [("zeta", "z"), ("alpha", "a"), ("mid", "m")]
            .into_iter()
            .collect();
        let tables: Vec<&str> = set.iter().map(|(t, _)| t).collect();
        assert_eq!(tables, vec!["ZETA", "ALPHA", "MID"]);
    }

    #[test]
    fn test_empty_set() {
        let set = QueryTableSet::new();
        assert!(set.is_empty());
        assert!(!set.contains("ORDERS"));
        assert_eq!(set.alias_for("ORDERS"), None);
    }
}
