//! A driving pass for UML 1.x XMI.
//!
//! Consumes element events in document order, dispatches each element to
//! the matching [`ResourceFactory`] operation and accumulates the result
//! in one [`Graph`]. Elements that yield no node are skipped.

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::classify::{is_declaration, is_reference};
use super::synthesize::Side;
use super::{ResourceFactory, TranslateOptions};
use crate::graph::Graph;
use crate::interchange::{ElementEvent, XmlElement, attr};
#[cfg(feature = "interchange")]
use crate::interchange::{InterchangeError, XmiReader};

/// Counters for one translation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TranslateStats {
    /// Start events seen.
    pub elements: usize,
    /// Elements that produced or resolved a node.
    pub resolved: usize,
    /// Recognised elements that lacked mandatory attributes.
    pub skipped: usize,
}

/// An open `Association` element.
#[derive(Debug)]
struct AssociationScope {
    id: Option<SmolStr>,
    ends: usize,
}

/// Single-pass translator from element events to a graph.
#[derive(Debug)]
pub struct Translator {
    factory: ResourceFactory,
    graph: Graph,
    associations: Vec<AssociationScope>,
    stats: TranslateStats,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            factory: ResourceFactory::new(&options),
            graph: Graph::new(),
            associations: Vec::new(),
            stats: TranslateStats::default(),
        }
    }

    pub fn factory(&self) -> &ResourceFactory {
        &self.factory
    }

    /// The graph built so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn stats(&self) -> TranslateStats {
        self.stats
    }

    /// Feed one event.
    pub fn handle(&mut self, event: &ElementEvent) {
        match event {
            ElementEvent::Start(element) => self.start(element),
            ElementEvent::End(tag) => self.end(tag),
        }
    }

    /// Interpret the start of an element.
    pub fn start(&mut self, element: &XmlElement) {
        self.stats.elements += 1;

        let resolved = match element.local_name() {
            "Class" if is_reference(element) => {
                self.factory.find_class(&mut self.graph, element).is_some()
            }
            "Class" => self.factory.create_class(&mut self.graph, element).is_some(),
            "Classifier" | "DataType" | "Package" | "Model" | "Attribute"
                if is_reference(element) =>
            {
                self.factory.find_resource(&mut self.graph, element).is_some()
            }
            "DataType" => self.factory.create_datatype(&mut self.graph, element).is_some(),
            "Package" | "Model" => self.factory.create_package(&mut self.graph, element).is_some(),
            "Stereotype" => self.factory.create_stereotype(&mut self.graph, element).is_some(),
            "TagDefinition" => self
                .factory
                .create_annotation_property(&mut self.graph, element)
                .is_some(),
            "Attribute" => self
                .factory
                .create_attribute_property(&mut self.graph, element)
                .is_some(),
            "Association" => {
                let id = element.non_empty_attr(attr::ID);
                self.associations.push(AssociationScope {
                    id: id.map(SmolStr::new),
                    ends: 0,
                });
                id.is_some_and(|id| self.factory.create_association(&mut self.graph, id).is_some())
            }
            "AssociationEnd" => self.association_end(element),
            _ if is_declaration(element, element.tag()) => {
                self.factory.create_unknown(&mut self.graph, element).is_some()
            }
            // Structural element with nothing to interpret.
            _ => return,
        };

        if resolved {
            self.stats.resolved += 1;
        } else {
            self.stats.skipped += 1;
            trace!(tag = element.tag(), "skipping incomplete element");
        }
    }

    fn association_end(&mut self, element: &XmlElement) -> bool {
        let Some(scope) = self.associations.last_mut() else {
            return self
                .factory
                .create_object_property(&mut self.graph, element)
                .is_some();
        };
        let index = scope.ends;
        scope.ends += 1;

        if element.non_empty_attr(attr::ID).is_some() {
            return self
                .factory
                .create_object_property(&mut self.graph, element)
                .is_some();
        }
        let (Some(base), Some(side)) = (scope.id.clone(), Side::of_end(index)) else {
            debug!(index, "cannot synthesize id for association end");
            return false;
        };
        self.factory
            .create_association_end(&mut self.graph, element, &base, side)
            .is_some()
    }

    /// Interpret the end of an element.
    pub fn end(&mut self, tag: &str) {
        let local = tag.rsplit_once(':').map_or(tag, |(_, local)| local);
        if local == "Association" {
            self.associations.pop();
        }
    }

    /// Feed every event from `events`.
    pub fn extend<'e>(&mut self, events: impl IntoIterator<Item = &'e ElementEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    /// Hand off the finished graph.
    pub fn finish(self) -> Graph {
        debug!(
            nodes = self.graph.len(),
            elements = self.stats.elements,
            resolved = self.stats.resolved,
            skipped = self.stats.skipped,
            "translation finished"
        );
        self.graph
    }

    /// Read an XMI document and translate it in one pass.
    #[cfg(feature = "interchange")]
    pub fn translate(mut self, input: &[u8]) -> Result<Graph, InterchangeError> {
        for event in XmiReader::new(input) {
            self.handle(&event?);
        }
        Ok(self.finish())
    }

    /// Read and translate an XMI file.
    #[cfg(feature = "interchange")]
    pub fn translate_file(self, path: &std::path::Path) -> Result<Graph, InterchangeError> {
        let bytes = std::fs::read(path)?;
        self.translate(&bytes)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslateOptions::default())
    }
}
