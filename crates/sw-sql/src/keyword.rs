//! Keyword substitution
//!
//! A configured keyword typed into a select list expands into the expression
//! its rule describes, and the keyword itself becomes the column alias:
//! `amount` turns into `o.amt * 100 amount`.
//!
//! Templates use plain, single-pass text replacement of `#col#`, `#table#`
//! and `#table_alias#`. There is no escaping and no recursive expansion.

use sw_core::replace::{COL_PLACEHOLDER, TABLE_ALIAS_PLACEHOLDER, TABLE_PLACEHOLDER};
use sw_core::{substitute, ConfigModel, ReplacementRule};

use crate::error::{SqlError, SqlResult};

/// Where a token sits in the host's syntax tree.
///
/// The host fills this in from its own parse; the predicates below never
/// inspect a tree themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenContext {
    /// Token is part of an identifier
    pub in_identifier: bool,
    /// Token is inside a column reference expression
    pub in_column_reference: bool,
    /// Token is inside the select clause of a SELECT statement
    pub in_select_clause: bool,
    /// Token is inside the FROM clause of a SELECT statement
    pub in_from_clause: bool,
    /// Language of the document, when the host knows it
    pub language: Option<String>,
}

impl TokenContext {
    /// Context of a bare column name in a select list.
    pub fn select_column() -> Self {
        Self {
            in_identifier: true,
            in_column_reference: true,
            in_select_clause: true,
            ..Self::default()
        }
    }

    /// Context of the `SELECT` keyword itself.
    pub fn select_keyword() -> Self {
        Self {
            in_select_clause: true,
            ..Self::default()
        }
    }

    /// Context of the `FROM` keyword itself.
    pub fn from_keyword() -> Self {
        Self {
            in_from_clause: true,
            ..Self::default()
        }
    }

    /// Attach the document language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Expand a rule into its replacement expression.
///
/// A missing or blank template expands to `table_alias.column`.
pub fn expand_rule(rule: &ReplacementRule) -> String {
    match rule.template() {
        None => format!("{}.{}", rule.table_alias, rule.column),
        Some(template) => substitute(
            template,
            &[
                (COL_PLACEHOLDER, rule.column.as_str()),
                (TABLE_PLACEHOLDER, rule.table.as_str()),
                (TABLE_ALIAS_PLACEHOLDER, rule.table_alias.as_str()),
            ],
        ),
    }
}

/// Expand the rule configured for `token`.
pub fn expand_keyword(config: &ConfigModel, token: &str) -> SqlResult<String> {
    config
        .rule_for(token)
        .map(expand_rule)
        .ok_or_else(|| SqlError::UnknownKey(token.to_string()))
}

/// Build `"{expansion} {token}"`: the expansion becomes the column value and
/// the original keyword its alias.
pub fn build_alias_expression(config: &ConfigModel, token: &str) -> SqlResult<String> {
    let expansion = expand_keyword(config, token)?;
    Ok(format!("{} {}", expansion, token))
}

/// Whether the keyword rewrite applies to `token` in `context`.
///
/// The token must be an identifier inside a column reference of a select
/// clause, and a configured key. When the host reports a document language
/// it must match the configured one.
pub fn is_applicable_token(config: &ConfigModel, token: &str, context: &TokenContext) -> bool {
    context.in_identifier
        && context.in_column_reference
        && context.in_select_clause
        && language_matches(config, context)
        && config.contains_key(token)
}

/// Whether `token` is the `SELECT` keyword of a select clause.
pub fn is_select_keyword(config: &ConfigModel, token: &str, context: &TokenContext) -> bool {
    context.in_select_clause
        && token.eq_ignore_ascii_case("select")
        && language_matches(config, context)
}

/// Whether `token` is the `FROM` keyword of a from clause.
pub fn is_from_keyword(config: &ConfigModel, token: &str, context: &TokenContext) -> bool {
    context.in_from_clause && token.eq_ignore_ascii_case("from") && language_matches(config, context)
}

fn language_matches(config: &ConfigModel, context: &TokenContext) -> bool {
    context
        .language
        .as_deref()
        .map_or(true, |language| language.eq_ignore_ascii_case(config.language()))
}

#[cfg(test)]
#[path = "keyword_test.rs"]
mod tests;
