//! Foundation types for the translator.
//!
//! This module provides the identity layer everything else builds on:
//! - [`Address`] - the global IRI a graph node is keyed by
//! - [`IdScheme`] - maps XMI identifiers to addresses
//! - [`vocab`] - RDF/RDFS/OWL and UML vocabulary IRIs
//!
//! This module has NO dependencies on other crate modules.

mod address;
pub mod vocab;

pub use address::{Address, IdScheme};
