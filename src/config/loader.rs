// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::Result;

/// Load a graph file from a given path and return the raw `RawGraphFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawGraphFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a graph file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (empty sections, `policy = "lenient"`).
/// - Rejects empty IDs.
/// - Under `policy = "strict"`, rejects duplicate node IDs and edges that
///   name unknown nodes.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<GraphFile> {
    let path = path.as_ref();
    let raw = load_from_path(path)?;
    let graph = GraphFile::try_from(raw)?;
    info!(path = %path.display(), nodes = graph.nodes().len(), "loaded graph file");
    Ok(graph)
}
