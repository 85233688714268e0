//! Addresses and the identifier scheme.

use std::sync::Arc;

use super::vocab;

/// Globally unique key of a graph node.
///
/// Two source elements that resolve to the same `Address` always denote
/// the same node in the [`Graph`](crate::graph::Graph).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Arc<str>);

impl Address {
    /// Create an address from a full IRI.
    pub fn new(iri: impl Into<Arc<str>>) -> Self {
        Self(iri.into())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The local identifier of this address relative to `namespace`,
    /// or `None` if the address lives in another namespace.
    pub fn local_part(&self, namespace: &str) -> Option<&str> {
        self.0.strip_prefix(namespace)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Deterministic mapping from XMI identifiers to addresses.
///
/// The namespace is fixed for the lifetime of a translation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdScheme {
    namespace: Arc<str>,
}

impl IdScheme {
    pub fn new(namespace: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Address for a declared or referenced local identifier.
    ///
    /// Callers check that `local_id` is non-empty first.
    pub fn address(&self, local_id: &str) -> Address {
        let mut iri = String::with_capacity(self.namespace.len() + local_id.len());
        iri.push_str(&self.namespace);
        iri.push_str(local_id);
        Address::from(iri)
    }

    /// The local identifier of `address`, if it was minted by this scheme.
    pub fn local_id<'a>(&self, address: &'a Address) -> Option<&'a str> {
        address.local_part(&self.namespace)
    }
}

impl Default for IdScheme {
    fn default() -> Self {
        Self::new(vocab::xmi::NS)
    }
}
