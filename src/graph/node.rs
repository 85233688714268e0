//! Nodes and edges of the ontology graph.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{Address, vocab};

// ============================================================================
// NODE KINDS
// ============================================================================

/// The species of a graph node.
///
/// Fixed by the first typed construction that reaches an address. Only
/// [`NodeKind::Unknown`] may later be refined into another kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Class,
    Datatype,
    /// Association end.
    ObjectProperty,
    AnnotationProperty,
    /// Property stereotyped as a UML attribute.
    AttributeProperty,
    /// Typed instance; packages and stereotypes are individuals.
    Individual,
    /// Interpretation-time placeholder linking two association ends.
    Association,
    /// Generic resource of as yet unknown species.
    Unknown,
}

impl NodeKind {
    /// The type implied by the kind itself.
    ///
    /// Datatypes and individuals carry explicit type edges instead, and
    /// associations and unknowns are untyped.
    pub fn rdf_type(&self) -> Option<&'static str> {
        match self {
            Self::Class => Some(vocab::owl::CLASS),
            Self::ObjectProperty => Some(vocab::owl::OBJECT_PROPERTY),
            Self::AnnotationProperty => Some(vocab::owl::ANNOTATION_PROPERTY),
            Self::AttributeProperty => Some(vocab::rdf::PROPERTY),
            Self::Datatype | Self::Individual | Self::Association | Self::Unknown => None,
        }
    }

    /// Returns true if this kind is one of the property kinds.
    pub fn is_property(&self) -> bool {
        matches!(
            self,
            Self::ObjectProperty | Self::AnnotationProperty | Self::AttributeProperty
        )
    }

    /// Returns true if a later typed construction may refine this kind.
    pub fn is_refinable(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Datatype => "Datatype",
            Self::ObjectProperty => "ObjectProperty",
            Self::AnnotationProperty => "AnnotationProperty",
            Self::AttributeProperty => "AttributeProperty",
            Self::Individual => "Individual",
            Self::Association => "Association",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// EDGES
// ============================================================================

/// Relation carried by an [`Edge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `rdfs:label`
    Label,
    /// `rdf:type`
    Type,
    /// `uml:hasStereotype`
    HasStereotype,
    /// `uml:id`, the debug copy of the source identifier.
    SourceId,
}

impl Predicate {
    pub fn iri(&self) -> &'static str {
        match self {
            Self::Label => vocab::rdfs::LABEL,
            Self::Type => vocab::rdf::TYPE,
            Self::HasStereotype => vocab::uml::HAS_STEREOTYPE,
            Self::SourceId => vocab::uml::ID,
        }
    }
}

/// Target of an edge: another node or a literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Object {
    Node(Address),
    Literal {
        value: Arc<str>,
        lang: Option<SmolStr>,
    },
}

impl Object {
    /// A plain literal without a language tag.
    pub fn literal(value: impl Into<Arc<str>>) -> Self {
        Self::Literal {
            value: value.into(),
            lang: None,
        }
    }

    /// A language-tagged literal.
    pub fn lang_literal(value: impl Into<Arc<str>>, lang: &str) -> Self {
        Self::Literal {
            value: value.into(),
            lang: Some(SmolStr::new(lang)),
        }
    }

    pub fn as_node(&self) -> Option<&Address> {
        match self {
            Self::Node(address) => Some(address),
            Self::Literal { .. } => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => Some(&**value),
            Self::Node(_) => None,
        }
    }

    pub fn lang(&self) -> Option<&str> {
        match self {
            Self::Literal { lang, .. } => lang.as_deref(),
            Self::Node(_) => None,
        }
    }
}

impl From<Address> for Object {
    fn from(address: Address) -> Self {
        Self::Node(address)
    }
}

/// A labeled outgoing edge of a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub predicate: Predicate,
    pub object: Object,
}

// ============================================================================
// NODE
// ============================================================================

/// A node in the ontology graph.
///
/// Edges have set semantics: adding an identical edge twice stores it once.
#[derive(Clone, Debug)]
pub struct Node {
    address: Address,
    kind: NodeKind,
    edges: Vec<Edge>,
}

impl Node {
    pub(crate) fn new(address: Address, kind: NodeKind) -> Self {
        Self {
            address,
            kind,
            edges: Vec::new(),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub(super) fn refine(&mut self, kind: NodeKind) {
        debug_assert!(self.kind.is_refinable());
        self.kind = kind;
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Add an edge. Returns false if the identical edge was already present.
    pub fn add_edge(&mut self, predicate: Predicate, object: impl Into<Object>) -> bool {
        let edge = Edge {
            predicate,
            object: object.into(),
        };
        if self.edges.contains(&edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Attach a label unless one already exists for the same language.
    ///
    /// Labels are first-wins: returns false when the slot was taken.
    pub fn set_label(&mut self, text: &str, lang: Option<&str>) -> bool {
        if self.label(lang).is_some() {
            return false;
        }
        let object = match lang {
            Some(lang) => Object::lang_literal(text, lang),
            None => Object::literal(text),
        };
        self.add_edge(Predicate::Label, object)
    }

    /// The label in the given language (`None` selects the plain label).
    pub fn label(&self, lang: Option<&str>) -> Option<&str> {
        self.labels()
            .find(|object| object.lang() == lang)
            .and_then(Object::as_literal)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Object> {
        self.objects(Predicate::Label)
    }

    /// All objects of outgoing edges with the given predicate.
    pub fn objects(&self, predicate: Predicate) -> impl Iterator<Item = &Object> {
        self.edges
            .iter()
            .filter(move |edge| edge.predicate == predicate)
            .map(|edge| &edge.object)
    }

    /// Explicit `rdf:type` targets (not including the kind-implied type).
    pub fn types(&self) -> impl Iterator<Item = &Address> {
        self.objects(Predicate::Type).filter_map(Object::as_node)
    }

    pub fn has_type(&self, iri: &str) -> bool {
        self.types().any(|t| t.as_str() == iri)
    }

    /// The preserved source identifier, if debug identifiers were kept.
    pub fn source_id(&self) -> Option<&str> {
        self.objects(Predicate::SourceId)
            .find_map(Object::as_literal)
    }

    pub fn has_stereotype(&self, value: &str) -> bool {
        self.objects(Predicate::HasStereotype)
            .any(|object| object.as_literal() == Some(value))
    }
}
