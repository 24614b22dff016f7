// src/config/validate.rs

use tracing::debug;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::dag::builder::check_strict;
use crate::errors::{DagOrderError, Result};
use crate::types::BuildPolicy;

impl TryFrom<RawGraphFile> for GraphFile {
    type Error = DagOrderError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        Ok(GraphFile::new_unchecked(raw.config, raw.node, raw.edge))
    }
}

fn validate_raw_graph(raw: &RawGraphFile) -> Result<()> {
    validate_ids(raw)?;
    if raw.config.policy == BuildPolicy::Strict {
        check_strict(&raw.node, &raw.edge)?;
    }
    debug!(
        nodes = raw.node.len(),
        edges = raw.edge.len(),
        policy = %raw.config.policy,
        "graph file validated"
    );
    Ok(())
}

fn validate_ids(raw: &RawGraphFile) -> Result<()> {
    if let Some(pos) = raw.node.iter().position(|n| n.id.trim().is_empty()) {
        return Err(DagOrderError::ConfigError(format!(
            "[[node]] #{} has an empty `id`",
            pos + 1
        )));
    }
    if let Some(pos) = raw
        .edge
        .iter()
        .position(|e| e.from.trim().is_empty() || e.to.trim().is_empty())
    {
        return Err(DagOrderError::ConfigError(format!(
            "[[edge]] #{} has an empty `from` or `to`",
            pos + 1
        )));
    }
    Ok(())
}
