// src/dag/cycle.rs

use tracing::debug;

use crate::dag::kahn::traverse;
use crate::dag::model::Dag;

/// Whether `dag` contains at least one cycle.
///
/// Counts the known nodes Kahn's algorithm manages to remove; any node left
/// over sits on, or downstream of, a cycle. An empty DAG has no cycle.
pub fn has_cycle(dag: &Dag) -> bool {
    let mut visited = 0usize;
    traverse(dag, |_| visited += 1);

    let cyclic = visited < dag.len();
    debug!(visited, total = dag.len(), cyclic, "cycle check");
    cyclic
}
