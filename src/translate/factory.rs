//! Per-construct node constructors.
//!
//! Every constructor reads its mandatory attributes first and returns
//! `None` without touching the graph if one is missing. Declarations
//! attach the `uml:id` debug annotation when ids are kept; references
//! never do.

use tracing::trace;

use super::TranslateOptions;
use crate::base::{Address, IdScheme, vocab};
use crate::graph::{Graph, Node, NodeKind, Object, Predicate};
use crate::interchange::{XmlElement, attr};

/// Language tag of labels taken from UML names.
pub const LABEL_LANG: &str = "en";

/// Builds graph nodes from XMI elements.
///
/// Holds only the run configuration; the graph is passed explicitly to
/// every operation.
#[derive(Clone, Debug)]
pub struct ResourceFactory {
    scheme: IdScheme,
    keep_ids: bool,
}

impl ResourceFactory {
    pub fn new(options: &TranslateOptions) -> Self {
        Self {
            scheme: IdScheme::new(options.namespace.as_str()),
            keep_ids: options.keep_ids,
        }
    }

    pub fn scheme(&self) -> &IdScheme {
        &self.scheme
    }

    pub fn keep_ids(&self) -> bool {
        self.keep_ids
    }

    /// Address for a local identifier under this run's namespace.
    pub fn address(&self, local_id: &str) -> Address {
        self.scheme.address(local_id)
    }

    /// Get or create the node declared by `id`, annotating it with the
    /// source identifier if ids are kept.
    pub(super) fn declare<'g>(
        &self,
        graph: &'g mut Graph,
        id: &str,
        kind: NodeKind,
    ) -> &'g mut Node {
        let node = graph.get_or_create(self.address(id), kind);
        if self.keep_ids {
            node.add_edge(Predicate::SourceId, Object::literal(id));
        }
        node
    }

    /// Get or create the node referenced by `id`. Adds nothing.
    pub(super) fn reference<'g>(
        &self,
        graph: &'g mut Graph,
        id: &str,
        kind: NodeKind,
    ) -> &'g mut Node {
        graph.get_or_create(self.address(id), kind)
    }

    // ── Classes and datatypes ────────────────────────────────────────

    /// Create and label a class for a `xmi.id` + `name` declaration.
    pub fn create_class<'g>(&self, graph: &'g mut Graph, element: &XmlElement) -> Option<&'g Node> {
        let (id, name) = declaration(element)?;
        let node = self.declare(graph, id, NodeKind::Class);
        node.set_label(name, Some(LABEL_LANG));
        Some(&*node)
    }

    /// Find the class an element refers to through `xmi.idref`.
    pub fn find_class<'g>(&self, graph: &'g mut Graph, element: &XmlElement) -> Option<&'g Node> {
        self.find_class_by(graph, element, attr::IDREF)
    }

    /// Find the class an element refers to through `ref_attr`.
    pub fn find_class_by<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
        ref_attr: &str,
    ) -> Option<&'g Node> {
        let id = element.non_empty_attr(ref_attr)?;
        Some(&*self.reference(graph, id, NodeKind::Class))
    }

    pub fn create_datatype<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
    ) -> Option<&'g Node> {
        let (id, name) = declaration(element)?;
        let node = self.declare(graph, id, NodeKind::Datatype);
        node.set_label(name, Some(LABEL_LANG));
        node.add_edge(Predicate::Type, Address::from(vocab::rdfs::DATATYPE));
        Some(&*node)
    }

    // ── Properties ───────────────────────────────────────────────────

    /// Create an object property for an association end with its own id.
    /// The name is optional.
    pub fn create_object_property<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
    ) -> Option<&'g Node> {
        let id = element.non_empty_attr(attr::ID)?;
        let node = self.declare(graph, id, NodeKind::ObjectProperty);
        if let Some(name) = element.non_empty_attr(attr::NAME) {
            node.set_label(name, Some(LABEL_LANG));
        }
        Some(&*node)
    }

    /// Reference or declare an annotation property (a UML tag definition).
    ///
    /// An `xmi.idref` takes precedence: the referenced property is
    /// returned without a label.
    pub fn create_annotation_property<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
    ) -> Option<&'g Node> {
        if let Some(idref) = element.non_empty_attr(attr::IDREF) {
            return Some(&*self.reference(graph, idref, NodeKind::AnnotationProperty));
        }
        let (id, name) = declaration(element)?;
        let node = self.declare(graph, id, NodeKind::AnnotationProperty);
        node.set_label(name, Some(LABEL_LANG));
        Some(&*node)
    }

    /// Create a property stereotyped as a UML attribute.
    pub fn create_attribute_property<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
    ) -> Option<&'g Node> {
        let (id, name) = declaration(element)?;
        let node = self.declare(graph, id, NodeKind::AttributeProperty);
        node.add_edge(Predicate::HasStereotype, Object::literal(vocab::uml::ATTRIBUTE));
        node.set_label(name, Some(LABEL_LANG));
        Some(&*node)
    }

    // ── Individuals ──────────────────────────────────────────────────

    /// Create a labeled individual of the given type.
    pub fn create_individual<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
        ty: &Address,
    ) -> Option<&'g Node> {
        let (id, name) = declaration(element)?;
        let node = self.declare(graph, id, NodeKind::Individual);
        node.set_label(name, Some(LABEL_LANG));
        node.add_edge(Predicate::Type, ty.clone());
        Some(&*node)
    }

    pub fn create_package<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
    ) -> Option<&'g Node> {
        self.create_individual(graph, element, &Address::from(vocab::uml::PACKAGE))
    }

    /// Reference a stereotype through `xmi.idref`, or declare it inline.
    pub fn create_stereotype<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
    ) -> Option<&'g Node> {
        match element.non_empty_attr(attr::IDREF) {
            Some(idref) => self.stereotype_ref(graph, idref),
            None => {
                self.create_individual(graph, element, &Address::from(vocab::uml::STEREOTYPE))
            }
        }
    }

    /// Reference a stereotype by bare id string.
    pub fn stereotype_ref<'g>(&self, graph: &'g mut Graph, id: &str) -> Option<&'g Node> {
        if id.is_empty() {
            return None;
        }
        let node = self.reference(graph, id, NodeKind::Individual);
        node.add_edge(Predicate::Type, Address::from(vocab::uml::STEREOTYPE));
        Some(&*node)
    }

    // ── Untyped resources ────────────────────────────────────────────

    /// Create a resource of as yet unknown species with a plain label.
    pub fn create_unknown<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
    ) -> Option<&'g Node> {
        let (id, name) = declaration(element)?;
        let node = self.declare(graph, id, NodeKind::Unknown);
        node.set_label(name, None);
        Some(&*node)
    }

    /// Create the placeholder linking the two ends of an association.
    ///
    /// Associations are only needed while interpreting the model.
    pub fn create_association<'g>(&self, graph: &'g mut Graph, id: &str) -> Option<&'g Node> {
        if id.is_empty() {
            trace!("association without id");
            return None;
        }
        Some(&*self.declare(graph, id, NodeKind::Association))
    }
}

/// The non-empty `xmi.id` and `name` of a declaration.
pub(super) fn declaration(element: &XmlElement) -> Option<(&str, &str)> {
    let id = element.non_empty_attr(attr::ID)?;
    let name = element.non_empty_attr(attr::NAME)?;
    Some((id, name))
}
