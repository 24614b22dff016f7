// src/dag/mod.rs

//! DAG representation, cycle detection and ordering.
//!
//! - [`model`] holds nodes, edges and the built graph.
//! - [`builder`] turns flat node/edge lists into a [`Dag`].
//! - [`cycle`] reports whether a graph has a cycle.
//! - [`sort`] produces a deterministic topological order.
//!
//! Both [`has_cycle`] and [`topological_sort`] run the same Kahn traversal
//! on a private copy of the in-degree counts, so a [`Dag`] can be queried
//! any number of times.

pub mod builder;
pub mod cycle;
mod kahn;
pub mod model;
pub mod sort;

pub use builder::build_dag;
pub use cycle::has_cycle;
pub use model::{Dag, Edge, Node};
pub use sort::topological_sort;
