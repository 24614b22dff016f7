mod common;

use dagorder::dag::{Dag, has_cycle, topological_sort};
use dagorder::errors::DagOrderError;
use dagorder::types::BuildPolicy;

use common::{GraphBuilder, ids, init_tracing};

#[test]
fn every_node_starts_with_zero_in_degree() {
    let dag = GraphBuilder::new().nodes(&["a", "b", "c"]).build();

    for id in ["a", "b", "c"] {
        assert_eq!(dag.in_degree_of(id), Some(0));
        assert!(dag.successors_of(id).is_empty());
    }
    assert_eq!(dag.edge_count(), 0);
}

#[test]
fn builder_does_not_touch_its_inputs() {
    let graph = GraphBuilder::new().nodes(&["a", "b"]).edge("a", "b");
    let nodes_before = graph.node_list().to_vec();
    let edges_before = graph.edge_list().to_vec();

    let _dag = graph.build();

    assert_eq!(graph.node_list(), nodes_before.as_slice());
    assert_eq!(graph.edge_list(), edges_before.as_slice());
}

#[test]
fn duplicate_id_last_write_wins_in_first_position() {
    init_tracing();
    let dag = GraphBuilder::new()
        .typed_node("A", "first")
        .typed_node("B", "other")
        .typed_node("A", "second")
        .build();

    assert_eq!(dag.len(), 2);
    assert_eq!(dag.node("A").unwrap().node_type, "second");
    assert_eq!(dag.node_ids().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[test]
fn dangling_target_gets_in_degree_but_no_node() {
    init_tracing();
    let dag = GraphBuilder::new().node("A").edge("A", "X").build();

    assert_eq!(dag.len(), 1);
    assert!(dag.node("X").is_none());
    assert_eq!(dag.in_degree_of("X"), Some(1));
    assert_eq!(dag.successors_of("A"), ids(&["X"]).as_slice());

    // X is not a node, so it never shows up in the order.
    assert!(!has_cycle(&dag));
    assert_eq!(topological_sort(&dag).unwrap(), ids(&["A"]));
}

#[test]
fn dangling_source_gets_adjacency_but_no_in_degree() {
    let dag = GraphBuilder::new().node("B").edge("X", "B").build();

    assert!(dag.node("X").is_none());
    assert_eq!(dag.in_degree_of("X"), None);
    assert_eq!(dag.successors_of("X"), ids(&["B"]).as_slice());
    assert_eq!(dag.in_degree_of("B"), Some(1));

    // X is never seeded, so B can never be released.
    assert!(has_cycle(&dag));
    match topological_sort(&dag) {
        Err(DagOrderError::CycleDetected { unresolved }) => assert_eq!(unresolved, ids(&["B"])),
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn traversal_passes_through_dangling_targets() {
    let dag = GraphBuilder::new()
        .nodes(&["A", "C"])
        .edge("A", "X")
        .edge("X", "C")
        .build();

    assert!(!has_cycle(&dag));
    assert_eq!(topological_sort(&dag).unwrap(), ids(&["A", "C"]));
}

#[test]
fn lenient_policy_matches_build_dag() {
    let graph = GraphBuilder::new()
        .typed_node("A", "x")
        .typed_node("A", "y")
        .edge("A", "Z");

    let lenient = Dag::build(graph.node_list(), graph.edge_list(), BuildPolicy::Lenient).unwrap();
    let plain = graph.build();

    assert_eq!(lenient.nodes(), plain.nodes());
    assert_eq!(lenient.adjacency(), plain.adjacency());
    assert_eq!(lenient.in_degrees(), plain.in_degrees());
}

#[test]
fn strict_policy_rejects_duplicate_ids() {
    let result = GraphBuilder::new()
        .nodes(&["A", "B", "A"])
        .policy(BuildPolicy::Strict)
        .try_build();

    match result {
        Err(DagOrderError::DuplicateNode(id)) => assert_eq!(id, "A"),
        other => panic!("expected DuplicateNode, got {other:?}"),
    }
}

#[test]
fn strict_policy_rejects_unknown_target() {
    let result = GraphBuilder::new()
        .node("A")
        .edge("A", "X")
        .policy(BuildPolicy::Strict)
        .try_build();

    match result {
        Err(DagOrderError::UnknownNode { from, to, missing }) => {
            assert_eq!((from.as_str(), to.as_str(), missing.as_str()), ("A", "X", "X"));
        }
        other => panic!("expected UnknownNode, got {other:?}"),
    }
}

#[test]
fn strict_policy_rejects_unknown_source() {
    let result = GraphBuilder::new()
        .node("B")
        .edge("X", "B")
        .policy(BuildPolicy::Strict)
        .try_build();

    match result {
        Err(DagOrderError::UnknownNode { missing, .. }) => assert_eq!(missing, "X"),
        other => panic!("expected UnknownNode, got {other:?}"),
    }
}

#[test]
fn strict_policy_accepts_well_formed_cycles() {
    // Strictness is about references, not acyclicity.
    let dag = GraphBuilder::new()
        .nodes(&["A", "B"])
        .chain(&["A", "B", "A"])
        .policy(BuildPolicy::Strict)
        .try_build()
        .unwrap();

    assert!(has_cycle(&dag));
}

#[test]
fn policy_parses_from_str() {
    assert_eq!(" Strict ".parse::<BuildPolicy>(), Ok(BuildPolicy::Strict));
    assert_eq!("lenient".parse::<BuildPolicy>(), Ok(BuildPolicy::Lenient));
    assert!("loose".parse::<BuildPolicy>().is_err());
    assert_eq!(BuildPolicy::default(), BuildPolicy::Lenient);
}
