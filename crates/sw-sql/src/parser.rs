//! SQL text to sqlparser statements

use sqlparser::ast::Statement;
use sqlparser::parser::Parser;

use crate::dialect::{error_location, generic_dialect, is_known_dialect, resolve_dialect, GENERIC};
use crate::error::{SqlError, SqlResult};

/// Parses SQL text with one named sqlparser dialect.
///
/// Only the dialect name is stored; the dialect itself is resolved per parse,
/// so a parser can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlParser {
    dialect: String,
}

impl SqlParser {
    /// Parser using sqlparser's permissive generic dialect
    pub fn generic() -> Self {
        Self {
            dialect: GENERIC.to_string(),
        }
    }

    /// Parser for a dialect sqlparser knows by `name` (any casing).
    pub fn from_dialect_name(name: &str) -> SqlResult<Self> {
        if !is_known_dialect(name) {
            return Err(SqlError::UnknownDialect(name.to_string()));
        }
        Ok(Self {
            dialect: name.to_lowercase(),
        })
    }

    /// Parser for a configured document language, falling back to generic.
    pub fn for_language(language: &str) -> Self {
        Self::from_dialect_name(language).unwrap_or_else(|_| {
            log::debug!("No sqlparser dialect for '{}', using generic", language);
            Self::generic()
        })
    }

    /// Parse SQL into statements
    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptySql);
        }

        let dialect = resolve_dialect(&self.dialect).unwrap_or_else(generic_dialect);
        Parser::parse_sql(dialect.as_ref(), sql).map_err(|e| {
            let message = e.to_string();
            let (line, column) = error_location(&message);
            SqlError::ParseError {
                message,
                line,
                column,
            }
        })
    }

    /// Parse SQL and return the first statement
    pub fn parse_single(&self, sql: &str) -> SqlResult<Statement> {
        self.parse(sql)?
            .into_iter()
            .next()
            .ok_or(SqlError::EmptySql)
    }

    /// Lowercased dialect name
    pub fn dialect_name(&self) -> &str {
        &self.dialect
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::generic()
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
