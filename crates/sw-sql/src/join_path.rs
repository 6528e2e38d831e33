//! Join path construction
//!
//! Turns the set of tables a query uses into the text that follows `FROM`.
//! The relationship graph is walked depth-first in declared order. A used
//! table reached through a declared join is emitted as a join fragment; the
//! first used table of each unconnected component becomes a comma-separated
//! base entry. Used tables no declared path reaches are listed last, so every
//! used table appears exactly once.

use std::collections::HashSet;
use std::fmt;

use sw_core::{canonicalize, RelationshipGraph};

use crate::table_set::QueryTableSet;

/// One emitted piece of a join clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinStep {
    /// A table the walk started from
    Base {
        /// Table name as declared in the graph
        table: String,
        /// Alias the query uses for it
        alias: String,
    },
    /// A table reached through a declared join
    Join {
        /// Join keyword text, verbatim
        join_type: String,
        /// Table name as declared on the edge
        table: String,
        /// Alias the query uses for it
        alias: String,
        /// Rendered `ON` condition
        condition: String,
    },
}

impl JoinStep {
    /// Table name of this step, as declared
    pub fn table(&self) -> &str {
        match self {
            JoinStep::Base { table, .. } | JoinStep::Join { table, .. } => table,
        }
    }
}

/// Structured result of a join walk.
///
/// `Display` renders the exact clause text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinPlan {
    /// Base and join steps in emission order
    pub steps: Vec<JoinStep>,
    /// `(canonical table, alias)` pairs no declared path reached, in
    /// first-seen order
    pub orphans: Vec<(String, String)>,
}

impl JoinPlan {
    /// Whether the plan covers no table at all
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.orphans.is_empty()
    }

    /// Number of tables covered
    pub fn table_count(&self) -> usize {
        self.steps.len() + self.orphans.len()
    }

    /// Render the clause text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for JoinPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                JoinStep::Base { table, alias } if i == 0 => writeln!(f, "{} {}", table, alias)?,
                JoinStep::Base { table, alias } => writeln!(f, ", {} {}", table, alias)?,
                JoinStep::Join {
                    join_type,
                    table,
                    alias,
                    condition,
                } => writeln!(f, "{} {} {} \n  on {} ", join_type, table, alias, condition)?,
            }
        }

        if !self.orphans.is_empty() {
            if !self.steps.is_empty() {
                f.write_str(",")?;
            }
            let listed: Vec<String> = self
                .orphans
                .iter()
                .map(|(table, alias)| format!("{} {}", table, alias))
                .collect();
            f.write_str(&listed.join("\n,"))?;
        }

        Ok(())
    }
}

/// Per-call walk state, threaded through the recursion.
struct JoinWalk<'a> {
    used: &'a QueryTableSet,
    graph: &'a RelationshipGraph,
    /// Canonical names already emitted
    visited: HashSet<String>,
    steps: Vec<JoinStep>,
    /// Relation indices whose edges have been walked or are being walked
    expanded: HashSet<usize>,
}

impl<'a> JoinWalk<'a> {
    fn new(used: &'a QueryTableSet, graph: &'a RelationshipGraph) -> Self {
        Self {
            used,
            graph,
            visited: HashSet::new(),
            steps: Vec::new(),
            expanded: HashSet::new(),
        }
    }

    /// Alias for `table` if the query uses it and it has not been emitted yet.
    fn claim(&mut self, table: &str) -> Option<String> {
        let alias = self.used.alias_for(table)?.to_string();
        if self.visited.insert(canonicalize(table)) {
            Some(alias)
        } else {
            None
        }
    }
}

/// Build the structured join plan for `used` over `graph`.
pub fn build_join_plan(used: &QueryTableSet, graph: &RelationshipGraph) -> JoinPlan {
    let mut walk = JoinWalk::new(used, graph);
    if !used.is_empty() {
        for idx in 0..graph.relations().len() {
            visit(&mut walk, idx);
        }
    }

    let orphans: Vec<(String, String)> = used
        .iter()
        .filter(|(table, _)| !walk.visited.contains(*table))
        .map(|(table, alias)| (table.to_string(), alias.to_string()))
        .collect();
    if !orphans.is_empty() {
        log::debug!(
            "{} table(s) unreachable in graph '{}': {:?}",
            orphans.len(),
            graph.name(),
            orphans.iter().map(|(t, _)| t.as_str()).collect::<Vec<_>>()
        );
    }

    JoinPlan {
        steps: walk.steps,
        orphans,
    }
}

/// Build the text to place after `FROM` for `used` over `graph`.
///
/// Never fails. An empty `used` yields an empty string; an empty graph lists
/// every used table as an orphan.
pub fn build_join_clause(used: &QueryTableSet, graph: &RelationshipGraph) -> String {
    build_join_plan(used, graph).render()
}

/// Expand relation `idx`: emit its base if new, then its used join targets,
/// continuing into each target's first relation.
///
/// A relation is expanded at most once per walk. Once expanded it has claimed
/// every used target it declares, so entering it again could emit nothing.
fn visit(walk: &mut JoinWalk<'_>, idx: usize) {
    let graph = walk.graph;
    let Some(relation) = graph.relations().get(idx) else {
        return;
    };
    if !walk.used.contains(relation.base_table.as_str()) || !walk.expanded.insert(idx) {
        return;
    }

    if let Some(alias) = walk.claim(relation.base_table.as_str()) {
        log::trace!("base {} {}", relation.base_table, alias);
        walk.steps.push(JoinStep::Base {
            table: relation.base_table.to_string(),
            alias,
        });
    }

    for edge in &relation.edges {
        let target = edge.associated_table.as_str();
        if !walk.used.contains(target) {
            continue;
        }

        if let Some(alias) = walk.claim(target) {
            let condition = relation.render_condition(edge);
            log::trace!("{} {} {} on {}", edge.join_type, target, alias, condition);
            walk.steps.push(JoinStep::Join {
                join_type: edge.join_type.clone(),
                table: target.to_string(),
                alias,
                condition,
            });
        }

        if let Some(next) = graph.position_of(target) {
            if !walk.expanded.contains(&next) {
                visit(walk, next);
            }
        }
    }
}

#[cfg(test)]
#[path = "join_path_test.rs"]
mod tests;
