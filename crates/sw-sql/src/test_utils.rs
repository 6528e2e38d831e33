//! Shared test utilities for sw-sql

use sw_core::{
    BaseRelation, ConfigModel, Edge, KeywordKey, RelationshipGraph, ReplacementConfig,
    ReplacementRule, TableName,
};

/// Build a replacement rule
pub(crate) fn rule(
    key: &str,
    column: &str,
    table: &str,
    table_alias: &str,
    value: Option<&str>,
) -> ReplacementRule {
    ReplacementRule {
        key: KeywordKey::try_new(key).unwrap(),
        column: column.to_string(),
        table: TableName::try_new(table).unwrap(),
        table_alias: table_alias.to_string(),
        value_template: value.map(str::to_string),
    }
}

/// Build a join edge
pub(crate) fn edge(table: &str, alias: &str, join_type: &str, conditions: &str) -> Edge {
    Edge {
        associated_table: TableName::try_new(table).unwrap(),
        associated_alias: alias.to_string(),
        join_type: join_type.to_string(),
        condition_template: conditions.to_string(),
    }
}

/// Build a base relation
pub(crate) fn relation(table: &str, alias: &str, edges: Vec<Edge>) -> BaseRelation {
    BaseRelation {
        base_table: TableName::try_new(table).unwrap(),
        base_alias: alias.to_string(),
        edges,
    }
}

/// Build a relationship graph
pub(crate) fn graph(relations: Vec<BaseRelation>) -> RelationshipGraph {
    RelationshipGraph::new("test", relations)
}

/// Build a config model for the "Oracle" language
pub(crate) fn config(rules: Vec<ReplacementRule>, relations: Vec<BaseRelation>) -> ConfigModel {
    ConfigModel::new(
        ReplacementConfig {
            language: "Oracle".to_string(),
            replace_cols: rules,
        },
        graph(relations),
    )
    .unwrap()
}
