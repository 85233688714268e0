//! XMI input side of the translator.
//!
//! The translator consumes a flat stream of element events. This module
//! defines that stream and provides a concrete source for XMI documents:
//!
//! - [`XmlElement`] - tag plus attributes of one element
//! - [`ElementEvent`] - start/end events in document order
//! - [`XmiReader`] - `quick-xml` backed event source (feature `interchange`)
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   XMI File   │ ──▶ │  XmiReader   │ ──▶ │  Translator  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                        ElementEvent         ResourceFactory
//! ```

mod element;
mod error;
mod xmi;

pub use element::{ElementEvent, XmlElement, attr};
pub use error::InterchangeError;
#[cfg(feature = "interchange")]
pub use xmi::XmiReader;

/// Supported file extensions for XMI input.
pub fn supported_extensions() -> &'static [&'static str] {
    &["xmi", "xml"]
}

/// True if `path` has an XMI file extension.
pub fn is_xmi_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            supported_extensions()
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
