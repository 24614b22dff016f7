// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::GraphFile;
use crate::dag::{Dag, has_cycle, topological_sort};
use crate::types::BuildPolicy;

/// High-level entry point used by `main.rs`; writes the report to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(&args, &mut out)
}

/// Same as [`run`], but writes the report to `out`.
///
/// This wires together:
/// - graph loading (file or built-in demo)
/// - policy resolution (`--strict` overrides the file)
/// - DAG construction
/// - sorting and cycle detection
///
/// A cycle is reported on `out` as `Error: ...` and is **not** an `Err`;
/// only load/build failures are.
pub fn run_with_output<W: Write>(args: &CliArgs, out: &mut W) -> Result<()> {
    let graph = match args.graph.as_deref() {
        Some(path) => load_and_validate(path)?,
        None => {
            debug!("no --graph given; using the built-in demo chain");
            GraphFile::demo()
        }
    };

    let policy = if args.strict {
        BuildPolicy::Strict
    } else {
        graph.policy()
    };

    // Building applies the strict checks, so dry-run validates too.
    let dag = Dag::build(graph.nodes(), graph.edges(), policy)?;
    info!(nodes = dag.len(), edges = dag.edge_count(), %policy, "DAG ready");

    if args.dry_run {
        print_dry_run(&graph, policy, out)?;
        return Ok(());
    }

    report(&dag, out)
}

/// Sort first; on failure print the error and stop, otherwise print the
/// cycle flag, in-degrees and execution order.
pub fn report<W: Write>(dag: &Dag, out: &mut W) -> Result<()> {
    let order = match topological_sort(dag) {
        Ok(order) => order,
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            return Ok(());
        }
    };

    writeln!(out, "Has cycle? {}", has_cycle(dag))?;
    writeln!(out, "InDegrees: {}", format_in_degrees(dag.in_degrees()))?;
    writeln!(out, "Execution order: [{}]", order.join(", "))?;
    Ok(())
}

/// Render in-degrees as `{1: 0, 2: 1, 3: 1}`.
pub fn format_in_degrees(in_degree: &IndexMap<String, usize>) -> String {
    let body = in_degree
        .iter()
        .map(|(id, deg)| format!("{id}: {deg}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

/// Simple dry-run output: print nodes, edges and policy.
fn print_dry_run<W: Write>(graph: &GraphFile, policy: BuildPolicy, out: &mut W) -> Result<()> {
    writeln!(out, "dagorder dry-run")?;
    writeln!(out, "  policy = {policy}")?;
    writeln!(out)?;

    writeln!(out, "nodes ({}):", graph.nodes().len())?;
    for node in graph.nodes() {
        if node.node_type.is_empty() {
            writeln!(out, "  - {}", node.id)?;
        } else {
            writeln!(out, "  - {} ({})", node.id, node.node_type)?;
        }
    }

    writeln!(out, "edges ({}):", graph.edges().len())?;
    for edge in graph.edges() {
        writeln!(out, "  - {} -> {}", edge.from, edge.to)?;
    }

    debug!("dry-run complete (no sorting)");
    Ok(())
}
