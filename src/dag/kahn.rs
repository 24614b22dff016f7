// src/dag/kahn.rs

//! Kahn traversal shared by the cycle detector and the sorter.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::trace;

use crate::dag::model::Dag;

/// Working in-degrees left over after a traversal.
pub(crate) struct Residual(IndexMap<String, usize>);

impl Residual {
    /// Known nodes that never reached in-degree zero, in node-list order.
    pub(crate) fn unresolved(&self, dag: &Dag) -> Vec<String> {
        dag.node_ids()
            .filter(|id| self.0.get(*id).is_some_and(|deg| *deg > 0))
            .map(|id| id.to_string())
            .collect()
    }
}

/// Run Kahn's algorithm over `dag`, calling `visit` for every known node in
/// dequeue order.
///
/// The queue is seeded from the node list in input order, then fed in
/// adjacency order as successors reach zero. Dangling edge targets are
/// walked through so their own successors still get decremented, but they
/// are never passed to `visit`.
pub(crate) fn traverse<F>(dag: &Dag, mut visit: F) -> Residual
where
    F: FnMut(&str),
{
    let mut in_degree = dag.in_degree.clone();

    let mut queue: VecDeque<&str> = dag
        .node_ids()
        .filter(|id| in_degree.get(*id) == Some(&0))
        .collect();

    while let Some(current) = queue.pop_front() {
        if dag.contains(current) {
            trace!(node = current, "kahn: dequeued");
            visit(current);
        }

        for next in dag.successors_of(current) {
            // Every ID in an adjacency list has an in-degree entry.
            if let Some(deg) = in_degree.get_mut(next.as_str()) {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(next.as_str());
                }
            }
        }
    }

    Residual(in_degree)
}
