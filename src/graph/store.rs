//! The graph store: nodes keyed by address.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

use super::node::{Node, NodeKind, Object, Predicate};
use crate::base::Address;

/// The ontology under construction.
///
/// Owns every node created during a translation run. Nodes are never
/// removed; insertion order is preserved so output is stable.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: IndexMap<Address, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the node at `address`, creating one of `kind` if absent.
    ///
    /// An existing node is returned as is, whatever `kind` asks for, with
    /// one exception: a node still of kind [`NodeKind::Unknown`] is refined
    /// to `kind`. Callers treat the returned node's kind as authoritative.
    /// Refinement changes only the kind: edges added before it, such as the
    /// plain label of an unknown declaration, stay next to those added after.
    pub fn get_or_create(&mut self, address: Address, kind: NodeKind) -> &mut Node {
        match self.nodes.entry(address) {
            Entry::Occupied(entry) => {
                let node = entry.into_mut();
                if node.kind() != kind && kind != NodeKind::Unknown {
                    if node.kind().is_refinable() {
                        trace!(address = %node.address(), to = %kind, "refining unknown node");
                        node.refine(kind);
                    } else {
                        debug!(
                            address = %node.address(),
                            existing = %node.kind(),
                            requested = %kind,
                            "reusing node of a different kind"
                        );
                    }
                }
                node
            }
            Entry::Vacant(entry) => {
                trace!(address = %entry.key(), %kind, "creating node");
                let address = entry.key().clone();
                entry.insert(Node::new(address, kind))
            }
        }
    }

    pub fn get(&self, address: &Address) -> Option<&Node> {
        self.nodes.get(address)
    }

    pub fn get_mut(&mut self, address: &Address) -> Option<&mut Node> {
        self.nodes.get_mut(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.nodes.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes().filter(move |node| node.kind() == kind)
    }

    /// Label the node at `address`. Returns false if there is no such node
    /// or it already has a label in that language.
    pub fn set_label(&mut self, address: &Address, text: &str, lang: Option<&str>) -> bool {
        self.nodes
            .get_mut(address)
            .is_some_and(|node| node.set_label(text, lang))
    }

    /// Add an edge from the node at `address`. Returns false if there is no
    /// such node or the edge already exists.
    pub fn add_edge(
        &mut self,
        address: &Address,
        predicate: Predicate,
        object: impl Into<Object>,
    ) -> bool {
        self.nodes
            .get_mut(address)
            .is_some_and(|node| node.add_edge(predicate, object))
    }

    /// Flatten the graph into statements for downstream serializers.
    ///
    /// Each node contributes its kind-implied type (if any) followed by
    /// its edges in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = Triple<'_>> {
        self.nodes().flat_map(|node| {
            let implied = node.kind().rdf_type().map(|iri| Triple {
                subject: node.address(),
                predicate: Predicate::Type.iri(),
                object: Term::Iri(iri),
            });
            let edges = node.edges().iter().map(move |edge| Triple {
                subject: node.address(),
                predicate: edge.predicate.iri(),
                object: Term::from(&edge.object),
            });
            implied.into_iter().chain(edges)
        })
    }
}

/// Borrowed object position of a [`Triple`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Term<'a> {
    Iri(&'a str),
    Literal {
        value: &'a str,
        lang: Option<&'a str>,
    },
}

impl<'a> From<&'a Object> for Term<'a> {
    fn from(object: &'a Object) -> Self {
        match object {
            Object::Node(address) => Term::Iri(address.as_str()),
            Object::Literal { value, lang } => Term::Literal {
                value: &**value,
                lang: lang.as_deref(),
            },
        }
    }
}

/// A single statement of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triple<'a> {
    pub subject: &'a Address,
    pub predicate: &'static str,
    pub object: Term<'a>,
}

/// N-Triples line form, without the trailing newline.
impl std::fmt::Display for Triple<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}> <{}> ", self.subject, self.predicate)?;
        match self.object {
            Term::Iri(iri) => write!(f, "<{iri}>")?,
            Term::Literal { value, lang } => {
                f.write_str("\"")?;
                for c in value.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")?;
                if let Some(lang) = lang {
                    write!(f, "@{lang}")?;
                }
            }
        }
        f.write_str(" .")
    }
}
