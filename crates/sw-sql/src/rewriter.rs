//! Statement rewriting
//!
//! Produces replacement text for a SELECT: a new `FROM` clause joining the
//! tables its aliased columns come from, or alias expressions for configured
//! keywords in the select list. Nothing here edits a document; callers apply
//! the returned values themselves.

use sw_core::ConfigModel;

use crate::error::SqlResult;
use crate::facts::{extract_select_facts, from_clause_text, SelectListFacts};
use crate::join_path::{build_join_plan, JoinPlan};
use crate::keyword::build_alias_expression;
use crate::parser::SqlParser;
use crate::table_set::QueryTableSet;

/// A rebuilt `FROM` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromRewrite {
    /// `from {join clause}`
    pub clause: String,
    /// The replaced clause, wrapped in a block comment
    pub trailing_comment: String,
}

impl FromRewrite {
    /// Clause followed by the preserved original on its own line
    pub fn to_sql(&self) -> String {
        let mut sql = self.clause.clone();
        if !sql.ends_with('\n') {
            sql.push('\n');
        }
        sql.push_str(&self.trailing_comment);
        sql
    }
}

/// Replacement for one keyword in a select list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRewrite {
    /// Keyword as typed
    pub token: String,
    /// `"{expansion} {token}"`
    pub replacement: String,
}

/// Rewrites select statements against one configuration.
#[derive(Debug, Clone, Copy)]
pub struct StatementRewriter<'a> {
    config: &'a ConfigModel,
}

impl<'a> StatementRewriter<'a> {
    pub fn new(config: &'a ConfigModel) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &'a ConfigModel {
        self.config
    }

    /// Tables behind the select list's aliased columns.
    ///
    /// Each alias that names a configured keyword contributes its rule's
    /// table and table alias. The first alias seen for a table wins.
    pub fn rewrite_select_list(&self, facts: &SelectListFacts) -> QueryTableSet {
        let mut used = QueryTableSet::new();
        for alias in facts.aliases() {
            match self.config.rule_for(alias) {
                Some(rule) => {
                    if used.insert(rule.table.as_str(), rule.table_alias.as_str()) {
                        log::trace!("'{}' uses {} {}", alias, rule.table, rule.table_alias);
                    }
                }
                None => log::trace!("Alias '{}' has no replacement rule", alias),
            }
        }
        used
    }

    /// Join plan for `used` over the configured relationship graph
    pub fn join_plan(&self, used: &QueryTableSet) -> JoinPlan {
        build_join_plan(used, self.config.relationship_graph())
    }

    /// Text to place after `FROM` for `used`
    pub fn build_join_clause(&self, used: &QueryTableSet) -> String {
        self.join_plan(used).render()
    }

    /// Rebuild the `FROM` clause from the select list.
    ///
    /// `original_from` is kept inside the trailing comment. Any `*/` in it is
    /// written as `* /` so the comment cannot end early.
    pub fn rewrite_from(&self, facts: &SelectListFacts, original_from: &str) -> FromRewrite {
        let used = self.rewrite_select_list(facts);
        let plan = self.join_plan(&used);
        log::debug!(
            "Rebuilt FROM over {} table(s) with graph '{}'",
            plan.table_count(),
            self.config.relationship_graph().name()
        );

        FromRewrite {
            clause: format!("from {}", plan),
            trailing_comment: preserve_as_comment(original_from),
        }
    }

    /// Alias expressions for every bare column reference that is a keyword.
    pub fn rewrite_columns(&self, facts: &SelectListFacts) -> Vec<ColumnRewrite> {
        facts
            .column_refs()
            .filter_map(|token| {
                build_alias_expression(self.config, token)
                    .ok()
                    .map(|replacement| ColumnRewrite {
                        token: token.to_string(),
                        replacement,
                    })
            })
            .collect()
    }

    /// Parse `sql` and rebuild its `FROM` clause.
    pub fn rewrite_from_sql(&self, parser: &SqlParser, sql: &str) -> SqlResult<FromRewrite> {
        let stmt = parser.parse_single(sql)?;
        let facts = extract_select_facts(&stmt)?;
        let original = from_clause_text(&stmt).unwrap_or_default();
        Ok(self.rewrite_from(&facts, &original))
    }

    /// Parse `sql` and compute keyword replacements for its select list.
    pub fn rewrite_columns_sql(&self, parser: &SqlParser, sql: &str) -> SqlResult<Vec<ColumnRewrite>> {
        let stmt = parser.parse_single(sql)?;
        let facts = extract_select_facts(&stmt)?;
        Ok(self.rewrite_columns(&facts))
    }
}

/// Wrap `text` in a block comment, breaking up any `*/` inside it.
fn preserve_as_comment(text: &str) -> String {
    format!("/*{}*/", text.replace("*/", "* /"))
}

#[cfg(test)]
#[path = "rewriter_test.rs"]
mod tests;
