//! Table relationship graph (`tableRelationProp.json`)
//!
//! The graph is declared by hand: each [`BaseRelation`] names a table and the
//! tables it can be joined to. Nothing here requires the graph to be acyclic,
//! connected, or free of repeated base tables.

use crate::table_name::{canonicalize, TableName};
use crate::template::substitute;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Placeholder replaced by the associated table's alias in a join condition.
pub const A_ALIAS_PLACEHOLDER: &str = "#a_alias#";

/// Placeholder replaced by the base table's alias in a join condition.
pub const B_ALIAS_PLACEHOLDER: &str = "#b_alias#";

/// A named, directed relationship graph over tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipGraph {
    /// Graph name
    pub name: String,

    /// Base relations in declared order
    #[serde(rename = "relation")]
    pub relations: Vec<BaseRelation>,
}

/// A table and the joins that originate from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRelation {
    /// Table the joins originate from
    #[serde(rename = "baseTable")]
    pub base_table: TableName,

    /// Alias substituted for `#b_alias#`
    #[serde(rename = "b_alias")]
    pub base_alias: String,

    /// Outgoing joins in declared order
    #[serde(rename = "relations")]
    pub edges: Vec<Edge>,
}

/// A single declared join from a base table to an associated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Table being joined to
    #[serde(rename = "associatedTable")]
    pub associated_table: TableName,

    /// Alias substituted for `#a_alias#`
    #[serde(rename = "a_alias")]
    pub associated_alias: String,

    /// Join keyword text, emitted verbatim (e.g. "left join")
    #[serde(rename = "type")]
    pub join_type: String,

    /// Condition with `#a_alias#` / `#b_alias#` placeholders
    #[serde(rename = "conditions")]
    pub condition_template: String,
}

impl RelationshipGraph {
    /// Create a graph from already-built relations.
    pub fn new(name: impl Into<String>, relations: Vec<BaseRelation>) -> Self {
        Self {
            name: name.into(),
            relations,
        }
    }

    /// Graph name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base relations in declared order
    pub fn relations(&self) -> &[BaseRelation] {
        &self.relations
    }

    /// Whether no relation is declared
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Position of the first relation whose base table matches `table`.
    ///
    /// When several relations share a base table only the first one is ever
    /// returned.
    pub fn position_of(&self, table: &str) -> Option<usize> {
        let wanted = canonicalize(table);
        self.relations
            .iter()
            .position(|r| r.base_table.canonical() == wanted)
    }

    /// First relation whose base table matches `table`.
    pub fn find_relation(&self, table: &str) -> Option<&BaseRelation> {
        self.position_of(table).map(|idx| &self.relations[idx])
    }

    /// Canonical names of every table mentioned anywhere in the graph.
    pub fn tables(&self) -> BTreeSet<String> {
        let mut tables = BTreeSet::new();
        for relation in &self.relations {
            tables.insert(relation.base_table.canonical());
            for edge in &relation.edges {
                tables.insert(edge.associated_table.canonical());
            }
        }
        tables
    }

    /// Groups of tables that can reach each other through declared joins.
    ///
    /// Each group is a strongly connected component of two or more tables,
    /// or a single table with a join to itself. Names are canonical and
    /// sorted. Cycles are legal; this is for diagnostics only.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let mut graph: DiGraph<String, ()> = DiGraph::new();
        let mut nodes: HashMap<String, NodeIndex> = HashMap::new();

        let mut node_for = |graph: &mut DiGraph<String, ()>, name: String| -> NodeIndex {
            *nodes
                .entry(name.clone())
                .or_insert_with(|| graph.add_node(name))
        };

        for relation in &self.relations {
            let base = node_for(&mut graph, relation.base_table.canonical());
            for edge in &relation.edges {
                let target = node_for(&mut graph, edge.associated_table.canonical());
                graph.add_edge(base, target, ());
            }
        }

        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&idx| graph.contains_edge(idx, idx))
            })
            .map(|component| {
                let mut names: Vec<String> =
                    component.into_iter().map(|idx| graph[idx].clone()).collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }
}

impl BaseRelation {
    /// Render an edge's join condition with both aliases substituted.
    pub fn render_condition(&self, edge: &Edge) -> String {
        substitute(
            &edge.condition_template,
            &[
                (A_ALIAS_PLACEHOLDER, edge.associated_alias.as_str()),
                (B_ALIAS_PLACEHOLDER, self.base_alias.as_str()),
            ],
        )
    }
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
