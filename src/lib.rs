//! # xmi-owl
//!
//! Translates UML models exported as XMI into an OWL/RDF-style ontology
//! graph: classes, datatypes, properties, packages, stereotypes and
//! associations become typed nodes keyed by stable addresses.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! translate   → ResourceFactory, reference resolution, Translator
//!   ↓
//! interchange → XmlElement, ElementEvent, XmiReader
//!   ↓
//! graph       → Graph store, Node, NodeKind, Edge
//!   ↓
//! base        → Address, IdScheme, vocabulary IRIs
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use xmi_owl::translate::{TranslateOptions, Translator};
//!
//! let bytes = std::fs::read("cim.xmi")?;
//! let graph = Translator::new(TranslateOptions::default()).translate(&bytes)?;
//! for triple in graph.triples() {
//!     println!("{triple}");
//! }
//! ```

// ============================================================================
// MODULES (dependency order: base → graph → interchange → translate)
// ============================================================================

/// Foundation types: Address, IdScheme, vocabulary
pub mod base;

/// The ontology graph store
pub mod graph;

/// XMI element events and reader
pub mod interchange;

/// Element-to-node translation
pub mod translate;

// Re-export commonly needed items
pub use base::{Address, IdScheme};
pub use graph::{Graph, Node, NodeKind};
pub use interchange::{ElementEvent, InterchangeError, XmlElement};
pub use translate::{ResourceFactory, TranslateOptions, Translator};
