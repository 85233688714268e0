//! Reference resolution.
//!
//! A reference may arrive before the declaration it points at. Resolving
//! it creates a provisional `Unknown` node at the same address; the later
//! declaration refines and enriches that node instead of creating another.

use super::ResourceFactory;
use crate::graph::{Graph, Node, NodeKind};
use crate::interchange::{XmlElement, attr};

impl ResourceFactory {
    /// Resolve a bare identifier to its node, creating a provisional one
    /// if the address is new. Empty identifiers resolve to nothing.
    pub fn resolve<'g>(&self, graph: &'g mut Graph, idref: &str) -> Option<&'g Node> {
        if idref.is_empty() {
            return None;
        }
        Some(&*self.reference(graph, idref, NodeKind::Unknown))
    }

    /// Resolve the element's `xmi.idref`.
    pub fn find_resource<'g>(&self, graph: &'g mut Graph, element: &XmlElement) -> Option<&'g Node> {
        self.find_resource_by(graph, element, attr::IDREF)
    }

    /// Resolve the identifier held in the element's `ref_attr` attribute.
    pub fn find_resource_by<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
        ref_attr: &str,
    ) -> Option<&'g Node> {
        self.resolve(graph, element.attr(ref_attr)?)
    }
}
