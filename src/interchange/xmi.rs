//! XMI (XML Metadata Interchange) element source.
//!
//! UML 1.x tools export models as XMI 1.x documents. Declarations carry an
//! `xmi.id`, references an `xmi.idref`:
//!
//! ```xml
//! <XMI xmi.version="1.1" xmlns:UML="omg.org/UML1.3">
//!   <XMI.content>
//!     <UML:Model xmi.id="M1" name="CIM">
//!       <UML:Class xmi.id="C1" name="Breaker"/>
//!       <UML:Generalization.parent>
//!         <UML:Class xmi.idref="C1"/>
//!       </UML:Generalization.parent>
//!     </UML:Model>
//!   </XMI.content>
//! </XMI>
//! ```
//!
//! [`XmiReader`] turns such a document into a flat sequence of
//! [`ElementEvent`](super::ElementEvent)s. It performs no interpretation.

#[cfg(feature = "interchange")]
mod reader {
    use quick_xml::Reader;
    use quick_xml::encoding::Decoder;
    use quick_xml::events::{BytesStart, Event};
    use smol_str::SmolStr;

    use super::super::{ElementEvent, InterchangeError, XmlElement};

    /// Pull-based XMI element event source over a byte slice.
    ///
    /// Self-closing elements produce a `Start` immediately followed by an
    /// `End`. Text, comments and processing instructions are skipped.
    ///
    /// Names and attribute values are decoded with the encoding named by a
    /// byte order mark or the XML declaration, UTF-8 otherwise.
    pub struct XmiReader<'a> {
        reader: Reader<&'a [u8]>,
        /// End event owed for a self-closing element.
        pending_end: Option<SmolStr>,
        done: bool,
    }

    impl<'a> XmiReader<'a> {
        pub fn new(input: &'a [u8]) -> Self {
            let mut reader = Reader::from_reader(input);
            reader.config_mut().trim_text(true);
            Self {
                reader,
                pending_end: None,
                done: false,
            }
        }

        fn next_event(&mut self) -> Result<Option<ElementEvent>, InterchangeError> {
            loop {
                match self.reader.read_event() {
                    Ok(Event::Start(ref e)) => {
                        let element = element_from(e, self.reader.decoder())?;
                        return Ok(Some(ElementEvent::Start(element)));
                    }
                    Ok(Event::Empty(ref e)) => {
                        let element = element_from(e, self.reader.decoder())?;
                        self.pending_end = Some(SmolStr::new(element.tag()));
                        return Ok(Some(ElementEvent::Start(element)));
                    }
                    Ok(Event::End(ref e)) => {
                        let name = e.name();
                        let tag = self
                            .reader
                            .decoder()
                            .decode(name.as_ref())
                            .map_err(|e| InterchangeError::invalid_tag(e.to_string()))?;
                        return Ok(Some(ElementEvent::End(SmolStr::new(tag))));
                    }
                    Ok(Event::Eof) => return Ok(None),
                    Err(e) => {
                        return Err(InterchangeError::xml(format!(
                            "XML parse error at position {}: {e}",
                            self.reader.error_position()
                        )));
                    }
                    _ => {}
                }
            }
        }
    }

    impl Iterator for XmiReader<'_> {
        type Item = Result<ElementEvent, InterchangeError>;

        fn next(&mut self) -> Option<Self::Item> {
            if let Some(tag) = self.pending_end.take() {
                return Some(Ok(ElementEvent::End(tag)));
            }
            if self.done {
                return None;
            }
            match self.next_event() {
                Ok(Some(event)) => Some(Ok(event)),
                Ok(None) => {
                    self.done = true;
                    None
                }
                Err(e) => {
                    self.done = true;
                    Some(Err(e))
                }
            }
        }
    }

    fn element_from(e: &BytesStart<'_>, decoder: Decoder) -> Result<XmlElement, InterchangeError> {
        let name = e.name();
        let tag = decoder
            .decode(name.as_ref())
            .map_err(|e| InterchangeError::invalid_tag(e.to_string()))?;
        let mut element = XmlElement::new(&*tag);

        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|e| InterchangeError::xml(format!("Attribute error: {e}")))?;
            let key = decoder
                .decode(attr.key.as_ref())
                .map_err(|e| InterchangeError::invalid_attribute(e.to_string()))?;
            let value = attr
                .decode_and_unescape_value(decoder)
                .map_err(|e| InterchangeError::xml(format!("Attribute value error: {e}")))?;
            element.set_attr(&*key, value.into_owned());
        }

        Ok(element)
    }
}

#[cfg(feature = "interchange")]
pub use reader::XmiReader;
