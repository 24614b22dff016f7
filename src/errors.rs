// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagOrderError {
    /// Raised by the topological sorter when some nodes never reach
    /// in-degree zero. `unresolved` lists them in node-list order.
    #[error("cycle detected, can't topological sort (unresolved: {})", .unresolved.join(", "))]
    CycleDetected { unresolved: Vec<String> },

    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("Edge {from} -> {to} references unknown node '{missing}'")]
    UnknownNode {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DagOrderError {
    /// Whether this is the recoverable "cycle detected" condition.
    pub fn is_cycle(&self) -> bool {
        matches!(self, DagOrderError::CycleDetected { .. })
    }
}

pub type Result<T> = std::result::Result<T, DagOrderError>;
