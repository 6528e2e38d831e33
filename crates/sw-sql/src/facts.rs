//! Select-list facts
//!
//! The rewriter works on a flat description of a query's select list rather
//! than on a syntax tree. Hosts with their own parser build [`SelectListFacts`]
//! directly; hosts that only hold SQL text can extract them with sqlparser.

use sqlparser::ast::{Expr, Query, Select, SelectItem, SetExpr, Statement};

use crate::error::{SqlError, SqlResult};

/// One output column of a select list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectColumn {
    /// `expression alias`, with or without `AS`
    Aliased {
        /// Expression text
        expression: String,
        /// Alias token
        alias: String,
    },
    /// A bare, unqualified column name
    ColumnRef {
        /// Column token
        token: String,
    },
    /// Anything else (qualified names, functions, wildcards)
    Other {
        /// Column text
        text: String,
    },
}

impl SelectColumn {
    /// Aliased column
    pub fn aliased(expression: impl Into<String>, alias: impl Into<String>) -> Self {
        SelectColumn::Aliased {
            expression: expression.into(),
            alias: alias.into(),
        }
    }

    /// Bare column reference
    pub fn column(token: impl Into<String>) -> Self {
        SelectColumn::ColumnRef {
            token: token.into(),
        }
    }

    /// Any other select item
    pub fn other(text: impl Into<String>) -> Self {
        SelectColumn::Other { text: text.into() }
    }
}

/// Output columns of one select list, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectListFacts {
    pub columns: Vec<SelectColumn>,
}

impl SelectListFacts {
    /// Create facts from columns
    pub fn new(columns: Vec<SelectColumn>) -> Self {
        Self { columns }
    }

    /// Alias tokens of aliased columns, in order
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|column| match column {
            SelectColumn::Aliased { alias, .. } => Some(alias.as_str()),
            _ => None,
        })
    }

    /// Tokens of bare column references, in order
    pub fn column_refs(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|column| match column {
            SelectColumn::ColumnRef { token } => Some(token.as_str()),
            _ => None,
        })
    }
}

impl FromIterator<SelectColumn> for SelectListFacts {
    fn from_iter<I: IntoIterator<Item = SelectColumn>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Extract select-list facts from the first SELECT of a query.
///
/// For set operations the left operand is used, by SQL convention the one
/// that names the output columns.
pub fn extract_select_facts(stmt: &Statement) -> SqlResult<SelectListFacts> {
    let select = select_of(stmt)?;
    Ok(select.projection.iter().map(select_column).collect())
}

/// Current `FROM` clause of the first SELECT, rendered by sqlparser.
///
/// Returns `None` for statements that are not queries or have no `FROM`.
pub fn from_clause_text(stmt: &Statement) -> Option<String> {
    let select = select_of(stmt).ok()?;
    if select.from.is_empty() {
        return None;
    }
    let tables: Vec<String> = select.from.iter().map(|t| t.to_string()).collect();
    Some(format!("FROM {}", tables.join(", ")))
}

fn select_of(stmt: &Statement) -> SqlResult<&Select> {
    match stmt {
        Statement::Query(query) => first_select(query).ok_or_else(|| {
            SqlError::UnsupportedStatement("query without a SELECT body".to_string())
        }),
        other => Err(SqlError::UnsupportedStatement(statement_kind(other))),
    }
}

fn first_select(query: &Query) -> Option<&Select> {
    first_select_in(query.body.as_ref())
}

fn first_select_in(set_expr: &SetExpr) -> Option<&Select> {
    match set_expr {
        SetExpr::Select(select) => Some(select),
        SetExpr::SetOperation { left, .. } => first_select_in(left),
        SetExpr::Query(query) => first_select(query),
        _ => None,
    }
}

fn select_column(item: &SelectItem) -> SelectColumn {
    match item {
        SelectItem::ExprWithAlias { expr, alias } => {
            SelectColumn::aliased(expr.to_string(), alias.value.clone())
        }
        SelectItem::UnnamedExpr(Expr::Identifier(ident)) => SelectColumn::column(ident.value.clone()),
        other => SelectColumn::other(other.to_string()),
    }
}

/// Leading keyword of a statement, for error messages
fn statement_kind(stmt: &Statement) -> String {
    stmt.to_string()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_uppercase()
}

#[cfg(test)]
#[path = "facts_test.rs"]
mod tests;
