//! Element classification for the driving pass.

use crate::interchange::{XmlElement, attr};

/// True if `element` is a `tag` declaration: the tag matches and both
/// `xmi.id` and `name` are present and non-empty.
///
/// Reference dispatch does not go through this check.
pub fn is_declaration(element: &XmlElement, tag: &str) -> bool {
    element.matches(tag)
        && element.non_empty_attr(attr::ID).is_some()
        && element.non_empty_attr(attr::NAME).is_some()
}

/// True if `element` references another construct through `xmi.idref`.
pub fn is_reference(element: &XmlElement) -> bool {
    element.non_empty_attr(attr::IDREF).is_some()
}
