//! Elements delivered by the XMI event source.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// XMI attribute names read by the translator.
pub mod attr {
    /// Declares a local identifier.
    pub const ID: &str = "xmi.id";
    /// References an identifier declared elsewhere.
    pub const IDREF: &str = "xmi.idref";
    /// Display name.
    pub const NAME: &str = "name";
}

/// One XML element: its tag and attributes, without children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    tag: SmolStr,
    attributes: IndexMap<SmolStr, String>,
}

impl XmlElement {
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<SmolStr>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// The qualified tag, e.g. `UML:Class`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The tag without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.tag
            .rsplit_once(':')
            .map_or(self.tag.as_str(), |(_, local)| local)
    }

    /// True if the element's qualified tag or local name equals `tag`.
    pub fn matches(&self, tag: &str) -> bool {
        self.tag == tag || self.local_name() == tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The attribute value, treating an empty value as absent.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|value| !value.is_empty())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// A start or end event from the element source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementEvent {
    Start(XmlElement),
    End(SmolStr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_qualified_or_local_tag() {
        let el = XmlElement::new("UML:Class");
        assert!(el.matches("UML:Class"));
        assert!(el.matches("Class"));
        assert!(!el.matches("Classifier"));
        assert_eq!(el.local_name(), "Class");
    }

    #[test]
    fn test_unprefixed_tag() {
        let el = XmlElement::new("Package");
        assert_eq!(el.local_name(), "Package");
        assert!(el.matches("Package"));
    }

    #[test]
    fn test_non_empty_attr() {
        let el = XmlElement::new("UML:Class")
            .with_attr(attr::ID, "")
            .with_attr(attr::NAME, "Breaker");
        assert_eq!(el.attr(attr::ID), Some(""));
        assert_eq!(el.non_empty_attr(attr::ID), None);
        assert_eq!(el.non_empty_attr(attr::NAME), Some("Breaker"));
        assert_eq!(el.attr(attr::IDREF), None);
    }
}
