//! The ontology graph store.
//!
//! A [`Graph`] is a set of typed [`Node`]s keyed by [`Address`](crate::base::Address),
//! each carrying labeled [`Edge`]s: labels, type assertions, stereotype
//! markers and the optional debug copy of the source identifier.
//!
//! ```text
//! Graph
//! └── nodes: IndexMap<Address, Node>  (preserves creation order)
//!     ├── kind: NodeKind
//!     └── edges: Vec<Edge>            (set semantics)
//! ```
//!
//! Nodes are created by [`Graph::get_or_create`] and never removed.
//! Downstream serializers consume the finished graph through
//! [`Graph::triples`].

mod node;
mod store;

pub use node::{Edge, Node, NodeKind, Object, Predicate};
pub use store::{Graph, Term, Triple};

#[cfg(test)]
mod tests;
