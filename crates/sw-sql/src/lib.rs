//! sw-sql - SQL rewriting layer for sqlweave
//!
//! This crate expands configured keywords in select lists and synthesizes
//! `FROM` clauses by walking the table relationship graph from `sw-core`.
//! Select-list facts can be supplied by the host or extracted from SQL text
//! with sqlparser-rs.

pub mod dialect;
pub mod error;
pub mod facts;
pub mod join_path;
pub mod keyword;
pub mod parser;
pub mod rewriter;
pub mod table_set;

#[cfg(test)]
pub(crate) mod test_utils;

pub use dialect::{is_known_dialect, resolve_dialect};
pub use error::{SqlError, SqlResult};
pub use facts::{extract_select_facts, from_clause_text, SelectColumn, SelectListFacts};
pub use join_path::{build_join_clause, build_join_plan, JoinPlan, JoinStep};
pub use keyword::{
    build_alias_expression, expand_keyword, expand_rule, is_applicable_token, is_from_keyword,
    is_select_keyword, TokenContext,
};
pub use parser::SqlParser;
pub use rewriter::{ColumnRewrite, FromRewrite, StatementRewriter};
pub use table_set::QueryTableSet;
