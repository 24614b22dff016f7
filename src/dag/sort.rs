// src/dag/sort.rs

use tracing::{debug, warn};

use crate::dag::kahn::traverse;
use crate::dag::model::Dag;
use crate::errors::{DagOrderError, Result};

/// Topologically order the nodes of `dag`.
///
/// Ties between nodes that become eligible at the same time are broken FIFO:
/// initial roots in node-list order, later nodes in edge input order. The
/// result is therefore fully determined by the input lists.
///
/// Fails with [`DagOrderError::CycleDetected`] when some nodes can never be
/// reached; the error lists those nodes.
pub fn topological_sort(dag: &Dag) -> Result<Vec<String>> {
    let mut order = Vec::with_capacity(dag.len());
    let residual = traverse(dag, |id| order.push(id.to_string()));

    if order.len() != dag.len() {
        let unresolved = residual.unresolved(dag);
        warn!(
            ordered = order.len(),
            total = dag.len(),
            ?unresolved,
            "cycle detected"
        );
        return Err(DagOrderError::CycleDetected { unresolved });
    }

    debug!(?order, "topological order");
    Ok(order)
}
