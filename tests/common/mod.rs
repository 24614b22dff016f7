#![allow(dead_code)]

use dagorder::dag::Edge;

pub use dagorder_test_utils::builders::{GraphBuilder, ids};
pub use dagorder_test_utils::init_tracing;

/// Index of `id` in `order`, panicking with context if absent.
pub fn position_of(order: &[String], id: &str) -> usize {
    order
        .iter()
        .position(|x| x == id)
        .unwrap_or_else(|| panic!("{id} missing from order {order:?}"))
}

/// Assert every edge points forward in `order`.
pub fn assert_respects_edges(order: &[String], edges: &[Edge]) {
    for edge in edges {
        let from = position_of(order, &edge.from);
        let to = position_of(order, &edge.to);
        assert!(
            from < to,
            "edge {} -> {} violated by order {:?}",
            edge.from,
            edge.to,
            order
        );
    }
}
