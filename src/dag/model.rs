// src/dag/model.rs

//! Graph data model: nodes, edges and the built [`Dag`].

use indexmap::IndexMap;
use serde::Deserialize;

/// A graph vertex.
///
/// `node_type` is a free-form label; nothing interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Node {
    pub id: String,

    /// Serialized as `type` in graph files.
    #[serde(rename = "type", default)]
    pub node_type: String,
}

impl Node {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
        }
    }
}

/// A directed edge `from -> to` between two node IDs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Built graph: nodes, downstream adjacency and in-degree counts.
///
/// All three mappings are insertion-ordered, so iterating `nodes` yields the
/// original node-list order. The structure is never mutated after
/// construction; traversals copy `in_degree` before decrementing it.
#[derive(Debug, Clone, Default)]
pub struct Dag {
    pub(crate) nodes: IndexMap<String, Node>,
    /// Downstream IDs per source, in edge input order.
    pub(crate) edges: IndexMap<String, Vec<String>>,
    pub(crate) in_degree: IndexMap<String, usize>,
}

impl Dag {
    /// Nodes keyed by ID, in node-list order.
    pub fn nodes(&self) -> &IndexMap<String, Node> {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Node IDs in node-list order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of known nodes (the node mapping, not the in-degree mapping).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Immediate downstream IDs of `id`, in edge input order.
    pub fn successors_of(&self, id: &str) -> &[String] {
        self.edges.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Adjacency lists keyed by source ID.
    pub fn adjacency(&self) -> &IndexMap<String, Vec<String>> {
        &self.edges
    }

    /// Recorded in-degree of `id`, or `None` if the ID never appeared as a
    /// node or as an edge target.
    pub fn in_degree_of(&self, id: &str) -> Option<usize> {
        self.in_degree.get(id).copied()
    }

    /// In-degree counts; known nodes first, then dangling edge targets.
    pub fn in_degrees(&self) -> &IndexMap<String, usize> {
        &self.in_degree
    }

    /// Total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|v| v.len()).sum()
    }
}
