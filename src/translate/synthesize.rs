//! Identifiers for association ends that carry none of their own.
//!
//! Some exporters write a bidirectional association as two anonymous ends.
//! Each end becomes an object property addressed by the association's id
//! plus a side marker: `<base>-A` and `<base>-B`.

use super::ResourceFactory;
use super::factory::LABEL_LANG;
use crate::graph::{Graph, Node, NodeKind};
use crate::interchange::{XmlElement, attr};

/// Which end of an association.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// The side of the `index`-th end (0-based) of an association.
    pub fn of_end(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::A),
            1 => Some(Self::B),
            _ => None,
        }
    }
}

/// `<base>-A` or `<base>-B`.
pub fn synthesize_id(base: &str, side: Side) -> String {
    format!("{base}-{}", side.suffix())
}

impl ResourceFactory {
    /// Create the object property for one anonymous end of the association
    /// identified by `base_id`. The end element's name, if any, labels it.
    pub fn create_association_end<'g>(
        &self,
        graph: &'g mut Graph,
        element: &XmlElement,
        base_id: &str,
        side: Side,
    ) -> Option<&'g Node> {
        if base_id.is_empty() {
            return None;
        }
        let synth = synthesize_id(base_id, side);
        let node = self.declare(graph, &synth, NodeKind::ObjectProperty);
        if let Some(name) = element.non_empty_attr(attr::NAME) {
            node.set_label(name, Some(LABEL_LANG));
        }
        Some(&*node)
    }
}
