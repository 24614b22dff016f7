#![allow(dead_code)]

use dagorder::config::{ConfigSection, GraphFile, RawGraphFile};
use dagorder::dag::{Dag, Edge, Node, build_dag};
use dagorder::errors::Result;
use dagorder::types::BuildPolicy;

/// Fluent builder for node/edge lists, to simplify test setup.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    policy: BuildPolicy,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with an empty type label.
    pub fn node(self, id: &str) -> Self {
        self.typed_node(id, "")
    }

    pub fn typed_node(mut self, id: &str, node_type: &str) -> Self {
        self.nodes.push(Node::new(id, node_type));
        self
    }

    /// Add several untyped nodes, in order.
    pub fn nodes(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self = self.node(id);
        }
        self
    }

    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.edges.push(Edge::new(from, to));
        self
    }

    /// Add a chain of edges `ids[0] -> ids[1] -> ...`.
    pub fn chain(mut self, ids: &[&str]) -> Self {
        for pair in ids.windows(2) {
            self = self.edge(pair[0], pair[1]);
        }
        self
    }

    pub fn policy(mut self, policy: BuildPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn node_list(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edge_list(&self) -> &[Edge] {
        &self.edges
    }

    /// Build with the lenient builder.
    pub fn build(&self) -> Dag {
        build_dag(&self.nodes, &self.edges)
    }

    /// Build with the configured policy.
    pub fn try_build(&self) -> Result<Dag> {
        Dag::build(&self.nodes, &self.edges, self.policy)
    }

    pub fn raw_file(&self) -> RawGraphFile {
        RawGraphFile {
            config: ConfigSection {
                policy: self.policy,
            },
            node: self.nodes.clone(),
            edge: self.edges.clone(),
        }
    }

    pub fn graph_file(&self) -> Result<GraphFile> {
        GraphFile::try_from(self.raw_file())
    }

    /// Render as a TOML graph file.
    pub fn to_toml(&self) -> String {
        let mut s = format!("[config]\npolicy = \"{}\"\n", self.policy);
        for node in &self.nodes {
            s.push_str(&format!(
                "\n[[node]]\nid = \"{}\"\ntype = \"{}\"\n",
                node.id, node.node_type
            ));
        }
        for edge in &self.edges {
            s.push_str(&format!("\n[[edge]]\nfrom = \"{}\"\nto = \"{}\"\n", edge.from, edge.to));
        }
        s
    }
}

/// Owned IDs from string literals, for comparing against sort output.
pub fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
