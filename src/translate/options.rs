//! Per-run translation options.

use serde::Deserialize;

use crate::base::vocab;

/// Configuration fixed for the lifetime of one translation run.
///
/// Deserializable so hosts can embed it in their own configuration; any
/// field left out takes its default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Preserve each declaration's `xmi.id` as a `uml:id` annotation.
    pub keep_ids: bool,
    /// Namespace prefixed to `xmi.id` values to form node addresses.
    pub namespace: String,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            keep_ids: true,
            namespace: vocab::xmi::NS.to_string(),
        }
    }
}

impl TranslateOptions {
    pub fn with_keep_ids(mut self, keep_ids: bool) -> Self {
        self.keep_ids = keep_ids;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}
