//! Strongly-typed replacement keyword.

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// A configured keyword token. Matching against it is exact and
    /// case-sensitive.
    pub struct KeywordKey;
}
