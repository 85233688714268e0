//! Translation of XMI elements into graph nodes.
//!
//! - [`ResourceFactory`] - one constructor per UML construct kind
//! - reference resolution ([`ResourceFactory::resolve`]) for `xmi.idref`
//! - association-end synthesis ([`ResourceFactory::create_association_end`])
//! - [`is_declaration`] - guard used before dispatching a declaration
//! - [`Translator`] - a UML 1.x driving pass over element events
//!
//! ## Identity
//!
//! Every node is keyed by the address derived from its identifier, so a
//! reference met before its declaration and the declaration itself land
//! on the same node. No second pass or queue is involved.
//!
//! ## Absence
//!
//! Constructors return `None` when a mandatory attribute is missing and
//! leave the graph untouched. The driving pass skips such elements.

mod classify;
mod factory;
mod options;
mod resolve;
mod synthesize;
mod translator;

pub use classify::{is_declaration, is_reference};
pub use factory::{LABEL_LANG, ResourceFactory};
pub use options::TranslateOptions;
pub use synthesize::{Side, synthesize_id};
pub use translator::{TranslateStats, Translator};
