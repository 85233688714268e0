//! Tests for the graph store

use super::*;
use crate::base::{Address, IdScheme, vocab};

fn addr(id: &str) -> Address {
    IdScheme::default().address(id)
}

#[test]
fn test_get_or_create_returns_same_node() {
    let mut graph = Graph::new();
    graph.get_or_create(addr("C1"), NodeKind::Class);
    graph.get_or_create(addr("C1"), NodeKind::Class);

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.get(&addr("C1")).map(Node::kind), Some(NodeKind::Class));
}

#[test]
fn test_existing_kind_wins_over_requested_kind() {
    let mut graph = Graph::new();
    graph.get_or_create(addr("X"), NodeKind::Class);
    let node = graph.get_or_create(addr("X"), NodeKind::Datatype);

    assert_eq!(node.kind(), NodeKind::Class);
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_unknown_node_is_refined_once() {
    let mut graph = Graph::new();
    graph.get_or_create(addr("X"), NodeKind::Unknown).set_label("op", None);

    let node = graph.get_or_create(addr("X"), NodeKind::ObjectProperty);
    assert_eq!(node.kind(), NodeKind::ObjectProperty);
    node.set_label("Prop", Some("en"));

    let node = graph.get_or_create(addr("X"), NodeKind::Class);
    assert_eq!(node.kind(), NodeKind::ObjectProperty);

    // Labels from before and after refinement are both kept.
    assert_eq!(node.label(None), Some("op"));
    assert_eq!(node.label(Some("en")), Some("Prop"));
    assert_eq!(node.labels().count(), 2);
}

#[test]
fn test_unknown_request_never_downgrades() {
    let mut graph = Graph::new();
    graph.get_or_create(addr("X"), NodeKind::Class);
    let node = graph.get_or_create(addr("X"), NodeKind::Unknown);
    assert_eq!(node.kind(), NodeKind::Class);
}

#[test]
fn test_labels_are_first_wins_per_language() {
    let mut graph = Graph::new();
    let a = addr("C1");
    graph.get_or_create(a.clone(), NodeKind::Class);

    assert!(graph.set_label(&a, "Breaker", Some("en")));
    assert!(!graph.set_label(&a, "Switch", Some("en")));
    assert!(graph.set_label(&a, "plain", None));

    let node = graph.get(&a).expect("node");
    assert_eq!(node.label(Some("en")), Some("Breaker"));
    assert_eq!(node.label(None), Some("plain"));
    assert_eq!(node.labels().count(), 2);
}

#[test]
fn test_identical_edges_are_stored_once() {
    let mut graph = Graph::new();
    let a = addr("S1");
    graph.get_or_create(a.clone(), NodeKind::Individual);

    let ty = Address::from(vocab::uml::STEREOTYPE);
    assert!(graph.add_edge(&a, Predicate::Type, ty.clone()));
    assert!(!graph.add_edge(&a, Predicate::Type, ty));
    assert_eq!(graph.get(&a).map(|n| n.edges().len()), Some(1));
}

#[test]
fn test_mutators_on_missing_node_do_nothing() {
    let mut graph = Graph::new();
    let a = addr("missing");
    assert!(!graph.set_label(&a, "x", Some("en")));
    assert!(!graph.add_edge(&a, Predicate::SourceId, Object::literal("missing")));
    assert!(graph.is_empty());
}

#[test]
fn test_nodes_of_kind() {
    let mut graph = Graph::new();
    graph.get_or_create(addr("C1"), NodeKind::Class);
    graph.get_or_create(addr("P1"), NodeKind::ObjectProperty);
    graph.get_or_create(addr("C2"), NodeKind::Class);

    let classes: Vec<_> = graph
        .nodes_of_kind(NodeKind::Class)
        .map(|n| n.address().clone())
        .collect();
    assert_eq!(classes, vec![addr("C1"), addr("C2")]);
}

#[test]
fn test_triples_include_implied_type_then_edges() {
    let mut graph = Graph::new();
    let a = addr("C1");
    graph
        .get_or_create(a.clone(), NodeKind::Class)
        .set_label("Breaker", Some("en"));

    let triples: Vec<_> = graph.triples().collect();
    assert_eq!(triples.len(), 2);
    assert_eq!(triples[0].predicate, vocab::rdf::TYPE);
    assert_eq!(triples[0].object, Term::Iri(vocab::owl::CLASS));
    assert_eq!(triples[1].predicate, vocab::rdfs::LABEL);
    assert_eq!(
        triples[1].object,
        Term::Literal {
            value: "Breaker",
            lang: Some("en")
        }
    );
}

#[test]
fn test_untyped_kinds_emit_no_implied_type() {
    let mut graph = Graph::new();
    graph.get_or_create(addr("A1"), NodeKind::Association);
    graph.get_or_create(addr("U1"), NodeKind::Unknown);
    assert_eq!(graph.triples().count(), 0);
}

#[test]
fn test_triple_display_escapes_literals() {
    let mut graph = Graph::new();
    let a = Address::from("urn:x");
    graph
        .get_or_create(a, NodeKind::Unknown)
        .set_label("say \"hi\"\n", None);

    let line = graph.triples().next().expect("triple").to_string();
    assert_eq!(
        line,
        r#"<urn:x> <http://www.w3.org/2000/01/rdf-schema#label> "say \"hi\"\n" ."#
    );
}
