//! Vocabulary IRIs used in the output graph.

/// RDF vocabulary.
pub mod rdf {
    /// rdf:type
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:Property
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
}

/// RDFS vocabulary.
pub mod rdfs {
    /// rdfs:label
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:Datatype
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
}

/// OWL vocabulary.
pub mod owl {
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
}

/// Namespace for addresses minted from `xmi.id` values.
pub mod xmi {
    pub const NS: &str = "http://langdale.com.au/2005/xmi#";
}

/// UML vocabulary carried over into the ontology.
pub mod uml {
    pub const NS: &str = "http://langdale.com.au/2005/UML#";

    /// Debug annotation holding the original `xmi.id`.
    pub const ID: &str = "http://langdale.com.au/2005/UML#id";

    /// Marker relation from a property to its stereotype.
    pub const HAS_STEREOTYPE: &str = "http://langdale.com.au/2005/UML#hasStereotype";

    /// Stereotype value of properties declared as UML attributes.
    pub const ATTRIBUTE: &str = "attribute";

    pub const PACKAGE: &str = "http://langdale.com.au/2005/UML#Package";
    pub const STEREOTYPE: &str = "http://langdale.com.au/2005/UML#Stereotype";
}
