// src/config/model.rs

use serde::Deserialize;

use crate::dag::{Edge, Node};
use crate::types::BuildPolicy;

/// Graph file exactly as read from TOML, before validation.
///
/// ```toml
/// [config]
/// policy = "strict"
///
/// [[node]]
/// id = "1"
/// type = "triggerManually"
///
/// [[edge]]
/// from = "1"
/// to = "2"
/// ```
///
/// All sections are optional; an empty file describes an empty graph.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGraphFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// `[[node]]` entries, in file order.
    #[serde(default)]
    pub node: Vec<Node>,

    /// `[[edge]]` entries, in file order.
    #[serde(default)]
    pub edge: Vec<Edge>,
}

/// `[config]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ConfigSection {
    /// `"lenient"` (default) or `"strict"`; rejected at parse time otherwise.
    #[serde(default)]
    pub policy: BuildPolicy,
}

/// A validated graph file.
///
/// Only obtainable through `TryFrom<RawGraphFile>` (or [`GraphFile::demo`]),
/// so a strict-policy file held in this type is known to be free of
/// duplicate IDs and dangling edges.
#[derive(Debug, Clone)]
pub struct GraphFile {
    config: ConfigSection,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphFile {
    pub(crate) fn new_unchecked(config: ConfigSection, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            config,
            nodes,
            edges,
        }
    }

    /// The built-in demonstration graph: a three-node chain `1 -> 2 -> 3`.
    pub fn demo() -> Self {
        Self::new_unchecked(
            ConfigSection::default(),
            vec![
                Node::new("1", "triggerManually"),
                Node::new("2", "geminiNode"),
                Node::new("3", "showOutput"),
            ],
            vec![Edge::new("1", "2"), Edge::new("2", "3")],
        )
    }

    pub fn policy(&self) -> BuildPolicy {
        self.config.policy
    }

    /// Nodes in file order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in file order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
