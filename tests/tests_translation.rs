//! Translation properties over sequences of elements.
//!
//! These drive the resource factory directly, the way a host's own
//! translation pass would.

use rstest::rstest;
use xmi_owl::base::vocab;
use xmi_owl::graph::{Graph, NodeKind, Predicate};
use xmi_owl::interchange::{XmlElement, attr};
use xmi_owl::translate::{LABEL_LANG, ResourceFactory, Side, TranslateOptions};

fn decl(tag: &str, id: &str, name: &str) -> XmlElement {
    XmlElement::new(tag)
        .with_attr(attr::ID, id)
        .with_attr(attr::NAME, name)
}

// ============================================================================
// Identity
// ============================================================================

#[rstest]
#[case("C1")]
#[case("EAID_0A1B2C3D_4E5F_6789")]
#[case("_12_5_1_8f90291_1173195623219_24462_0")]
fn test_identity_is_stable(#[case] id: &str) {
    let factory = ResourceFactory::new(&TranslateOptions::default());
    let mut graph = Graph::new();

    assert_eq!(factory.address(id), factory.address(id));
    let first = factory.resolve(&mut graph, id).map(|n| n.address().clone());
    let second = factory.resolve(&mut graph, id).map(|n| n.address().clone());
    assert_eq!(first, second);
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_namespace_option_changes_addresses() {
    let factory = ResourceFactory::new(
        &TranslateOptions::default().with_namespace("http://iec.ch/TC57/CIM#"),
    );
    assert_eq!(factory.address("C1").as_str(), "http://iec.ch/TC57/CIM#C1");
}

// ============================================================================
// Declarations and references
// ============================================================================

#[test]
fn test_reference_before_declaration() {
    let factory = ResourceFactory::new(&TranslateOptions::default());
    let mut graph = Graph::new();

    let reference = XmlElement::new("UML:Class").with_attr(attr::IDREF, "X");
    factory.find_class(&mut graph, &reference).expect("reference");
    assert_eq!(
        graph.get(&factory.address("X")).and_then(|n| n.label(Some(LABEL_LANG))),
        None
    );

    factory
        .create_class(&mut graph, &decl("UML:Class", "X", "Breaker"))
        .expect("declaration");

    assert_eq!(graph.len(), 1);
    let node = graph.get(&factory.address("X")).expect("node");
    assert_eq!(node.label(Some(LABEL_LANG)), Some("Breaker"));
    assert_eq!(node.source_id(), Some("X"));
}

#[rstest]
#[case::class_without_name(XmlElement::new("UML:Class").with_attr(attr::ID, "C1"))]
#[case::class_without_id(XmlElement::new("UML:Class").with_attr(attr::NAME, "Breaker"))]
#[case::class_with_empty_id(decl("UML:Class", "", "Breaker"))]
fn test_absence_leaves_graph_unchanged(#[case] element: XmlElement) {
    let factory = ResourceFactory::new(&TranslateOptions::default());
    let mut graph = Graph::new();
    factory
        .create_class(&mut graph, &decl("UML:Class", "C0", "Existing"))
        .expect("seed");

    assert!(factory.create_class(&mut graph, &element).is_none());
    assert!(factory.create_datatype(&mut graph, &element).is_none());
    assert!(factory.create_attribute_property(&mut graph, &element).is_none());
    assert!(factory.create_package(&mut graph, &element).is_none());
    assert!(factory.create_unknown(&mut graph, &element).is_none());
    assert_eq!(graph.len(), 1);
}

// ============================================================================
// Debug identifiers
// ============================================================================

#[rstest]
#[case(true)]
#[case(false)]
fn test_source_id_toggle(#[case] keep_ids: bool) {
    let factory = ResourceFactory::new(&TranslateOptions::default().with_keep_ids(keep_ids));
    let mut graph = Graph::new();

    factory.create_class(&mut graph, &decl("UML:Class", "C1", "Breaker"));
    factory.create_class(&mut graph, &decl("UML:Class", "C1", "Breaker"));
    factory.create_datatype(&mut graph, &decl("UML:DataType", "D1", "Float"));
    factory.create_stereotype(&mut graph, &decl("UML:Stereotype", "S1", "enumeration"));
    factory.create_annotation_property(&mut graph, &decl("UML:TagDefinition", "T1", "doc"));
    factory.create_association_end(&mut graph, &XmlElement::new("UML:AssociationEnd"), "AS1", Side::B);

    for node in graph.nodes() {
        let ids: Vec<_> = node.objects(Predicate::SourceId).collect();
        if keep_ids {
            assert_eq!(ids.len(), 1, "{} should carry one source id", node.address());
            let local = factory.scheme().local_id(node.address());
            assert_eq!(node.source_id(), local);
        } else {
            assert!(ids.is_empty(), "{} should carry no source id", node.address());
        }
    }
}

#[test]
fn test_references_never_add_source_ids() {
    let factory = ResourceFactory::new(&TranslateOptions::default());
    let mut graph = Graph::new();

    factory.find_class(&mut graph, &XmlElement::new("UML:Class").with_attr(attr::IDREF, "C1"));
    factory.create_annotation_property(
        &mut graph,
        &XmlElement::new("UML:TagDefinition").with_attr(attr::IDREF, "T1"),
    );
    factory.stereotype_ref(&mut graph, "S1");
    factory.resolve(&mut graph, "U1");

    assert_eq!(graph.len(), 4);
    assert!(graph.nodes().all(|n| n.source_id().is_none()));
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_breaker_scenario() {
    let factory = ResourceFactory::new(&TranslateOptions::default());
    let mut graph = Graph::new();

    // (1) class declaration
    factory
        .create_class(&mut graph, &decl("UML:Class", "C1", "Breaker"))
        .expect("class");
    // (2) class reference
    factory
        .find_class(&mut graph, &XmlElement::new("UML:Class").with_attr(attr::IDREF, "C1"))
        .expect("class ref");
    // (3) object property declaration
    factory
        .create_object_property(&mut graph, &decl("UML:AssociationEnd", "P1", "connectsTo"))
        .expect("property");
    // (4) both synthesized ends
    let end = XmlElement::new("UML:AssociationEnd");
    factory
        .create_association_end(&mut graph, &end, "A1", Side::A)
        .expect("end A");
    factory
        .create_association_end(&mut graph, &end, "A1", Side::B)
        .expect("end B");

    assert_eq!(graph.len(), 4);

    let c1 = graph.get(&factory.address("C1")).expect("C1");
    assert_eq!(c1.kind(), NodeKind::Class);
    assert_eq!(c1.label(Some(LABEL_LANG)), Some("Breaker"));

    let p1 = graph.get(&factory.address("P1")).expect("P1");
    assert_eq!(p1.kind(), NodeKind::ObjectProperty);
    assert_eq!(p1.label(Some(LABEL_LANG)), Some("connectsTo"));

    for id in ["A1-A", "A1-B"] {
        let end = graph.get(&factory.address(id)).expect(id);
        assert_eq!(end.kind(), NodeKind::ObjectProperty);
    }

    let typed = graph
        .triples()
        .filter(|t| t.predicate == vocab::rdf::TYPE)
        .count();
    assert_eq!(typed, 4);
}
