// src/dag/builder.rs

//! Construct a [`Dag`] from flat node and edge lists.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::dag::model::{Dag, Edge, Node};
use crate::errors::{DagOrderError, Result};
use crate::types::BuildPolicy;

/// Build a DAG with the lenient policy. Never fails.
///
/// - Every node gets an in-degree entry of 0 before any edge is applied.
/// - Each edge appends `to` to the adjacency list of `from` and increments
///   the in-degree of `to`.
/// - A repeated node ID overwrites the earlier node but keeps its position.
/// - Edges may name unknown IDs: an unknown target gets an in-degree entry
///   only, an unknown source gets an adjacency entry only. Neither becomes a
///   node.
pub fn build_dag(nodes: &[Node], edges: &[Edge]) -> Dag {
    let mut dag = Dag {
        nodes: IndexMap::with_capacity(nodes.len()),
        edges: IndexMap::new(),
        in_degree: IndexMap::with_capacity(nodes.len()),
    };

    for node in nodes {
        if dag.nodes.insert(node.id.clone(), node.clone()).is_some() {
            warn!(id = %node.id, "duplicate node id; keeping the last definition");
        }
        dag.in_degree.insert(node.id.clone(), 0);
    }

    for edge in edges {
        if !dag.nodes.contains_key(&edge.from) {
            warn!(from = %edge.from, to = %edge.to, "edge source is not a known node");
        }
        if !dag.nodes.contains_key(&edge.to) {
            warn!(from = %edge.from, to = %edge.to, "edge target is not a known node");
        }

        dag.edges
            .entry(edge.from.clone())
            .or_default()
            .push(edge.to.clone());
        *dag.in_degree.entry(edge.to.clone()).or_insert(0) += 1;
    }

    debug!(nodes = dag.len(), edges = edges.len(), "built DAG");

    dag
}

impl Dag {
    /// Build a DAG under the given policy.
    ///
    /// `Lenient` is identical to [`build_dag`]. `Strict` rejects the first
    /// duplicate node ID and the first edge whose endpoint is not in `nodes`.
    pub fn build(nodes: &[Node], edges: &[Edge], policy: BuildPolicy) -> Result<Dag> {
        if policy == BuildPolicy::Strict {
            check_strict(nodes, edges)?;
        }
        debug!(%policy, "building DAG");
        Ok(build_dag(nodes, edges))
    }
}

/// Duplicate and dangling-reference checks for [`BuildPolicy::Strict`].
pub(crate) fn check_strict(nodes: &[Node], edges: &[Edge]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(DagOrderError::DuplicateNode(node.id.clone()));
        }
    }

    for edge in edges {
        for endpoint in [&edge.from, &edge.to] {
            if !seen.contains(endpoint.as_str()) {
                return Err(DagOrderError::UnknownNode {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    Ok(())
}
