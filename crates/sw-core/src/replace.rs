//! Keyword replacement rules (`replaceProp.json`)

use crate::error::{CoreError, CoreResult};
use crate::keyword_key::KeywordKey;
use crate::table_name::TableName;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the rule's column name.
pub const COL_PLACEHOLDER: &str = "#col#";

/// Placeholder replaced by the rule's table name.
pub const TABLE_PLACEHOLDER: &str = "#table#";

/// Placeholder replaced by the rule's table alias.
pub const TABLE_ALIAS_PLACEHOLDER: &str = "#table_alias#";

/// Replacement configuration document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementConfig {
    /// SQL language the rules are written for (e.g. "Oracle")
    pub language: String,

    /// Configured substitutions, in declared order
    #[serde(rename = "replaceCols")]
    pub replace_cols: Vec<ReplacementRule>,
}

/// One configured keyword substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    /// Token recognised in a select list
    pub key: KeywordKey,

    /// Physical column name
    #[serde(rename = "col")]
    pub column: String,

    /// Owning table
    pub table: TableName,

    /// Alias the column is qualified with
    pub table_alias: String,

    /// Expression template; `None` or blank expands to `table_alias.col`
    #[serde(rename = "value", default, skip_serializing_if = "Option::is_none")]
    pub value_template: Option<String>,
}

impl ReplacementRule {
    /// The template, if one is set and not blank.
    pub fn template(&self) -> Option<&str> {
        self.value_template
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.column.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                document: "replacement".to_string(),
                message: format!("rule '{}' has an empty 'col'", self.key),
            });
        }
        if self.table_alias.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                document: "replacement".to_string(),
                message: format!("rule '{}' has an empty 'table_alias'", self.key),
            });
        }
        Ok(())
    }
}
