//! Error types for reading XMI input.

use thiserror::Error;

/// Errors that can occur while reading an XMI document.
///
/// Translation itself never fails: incomplete elements are skipped. Only
/// the element-event source can report errors.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error while loading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Element or attribute name that is not valid UTF-8.
    #[error("Invalid UTF-8 in {kind}: {message}")]
    Utf8 { kind: &'static str, message: String },
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an invalid tag name error.
    pub fn invalid_tag(message: impl Into<String>) -> Self {
        Self::Utf8 {
            kind: "tag",
            message: message.into(),
        }
    }

    /// Create an invalid attribute name error.
    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        Self::Utf8 {
            kind: "attribute",
            message: message.into(),
        }
    }
}
