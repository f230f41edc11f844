//! Generic XML-to-object conversion.
//!
//! Produces a loosely-typed tree in the shape bureau extraction expects: attributes merged
//! into their owning element, namespace prefixes stripped, single children left single
//! (repeated keys become [`XmlValue::List`]) and text content trimmed.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    /// Element without attributes or children, or a plain attribute value.
    Text(String),
    /// Element carrying attributes and/or children, plus optional text content.
    Element(XmlElement),
    /// A key that occurred more than once under the same parent, in document order.
    List(Vec<XmlValue>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub text: Option<String>,
    pub fields: Vec<(String, XmlValue)>,
}

impl XmlElement {
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_ignore_case(&self, key: &str) -> Option<&XmlValue> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn values(&self) -> impl Iterator<Item = &XmlValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Inserts a field, promoting an existing key to a list instead of overwriting it.
    pub fn insert(&mut self, key: String, value: XmlValue) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, XmlValue::List(items))) => items.push(value),
            Some((_, existing)) => {
                let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
                *existing = XmlValue::List(vec![first, value]);
            }
            None => self.fields.push((key, value)),
        }
    }
}

impl XmlValue {
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlValue::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

struct Frame {
    name: String,
    element: XmlElement,
    text: String,
}

impl Frame {
    fn open(e: &BytesStart) -> Result<Self, String> {
        let name = local_name(e.local_name().as_ref());
        let mut element = XmlElement::default();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| format!("Malformed attribute on <{name}>: {err}"))?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let key = local_name(attr.key.local_name().as_ref());
            let value = attr
                .unescape_value()
                .map_err(|err| format!("Malformed attribute value on <{name}>: {err}"))?;
            element.insert(key, XmlValue::Text(value.trim().to_string()));
        }
        Ok(Self {
            name,
            element,
            text: String::new(),
        })
    }

    fn finish(self) -> (String, XmlValue) {
        let text = self.text.trim();
        let mut element = self.element;
        if element.fields.is_empty() {
            return (self.name, XmlValue::Text(text.to_string()));
        }
        element.text = (!text.is_empty()).then(|| text.to_string());
        (self.name, XmlValue::Element(element))
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_string()
}

fn is_ignorable(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

/// Adds a finished element to its parent, or makes it the document root. Only one root is allowed.
fn attach(
    stack: &mut [Frame],
    document: &mut XmlElement,
    name: String,
    value: XmlValue,
    position: u64,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.element.insert(name, value),
        None if document.fields.is_empty() => document.insert(name, value),
        None => return Err(format!("Unexpected second root element <{name}> at position {position}")),
    }
    Ok(())
}

/// Parses `xml` into a document object keyed by the root element's local name.
pub fn parse_xml_tree(xml: &str) -> Result<XmlValue, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = XmlElement::default();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("{e} at position {}", reader.error_position()))?;
        match event {
            Event::Start(ref e) => {
                if stack.is_empty() && !document.fields.is_empty() {
                    return Err(format!(
                        "Unexpected second root element at position {}",
                        reader.buffer_position()
                    ));
                }
                stack.push(Frame::open(e)?);
            }
            Event::Empty(ref e) => {
                let (name, value) = Frame::open(e)?.finish();
                attach(&mut stack, &mut document, name, value, reader.buffer_position())?;
            }
            Event::End(ref e) => {
                let frame = stack.pop().ok_or_else(|| {
                    format!(
                        "Unexpected closing tag </{}> at position {}",
                        local_name(e.local_name().as_ref()),
                        reader.buffer_position()
                    )
                })?;
                let (name, value) = frame.finish();
                attach(&mut stack, &mut document, name, value, reader.buffer_position())?;
            }
            Event::Text(ref e) => match stack.last_mut() {
                Some(frame) => {
                    let text = e
                        .unescape()
                        .map_err(|err| format!("Malformed text in <{}>: {err}", frame.name))?;
                    frame.text.push_str(&text);
                }
                None => {
                    let text = e
                        .unescape()
                        .map_err(|err| format!("Malformed text outside the root element: {err}"))?;
                    if !is_ignorable(&text) {
                        return Err(format!(
                            "Text outside the root element at position {}",
                            reader.buffer_position()
                        ));
                    }
                }
            },
            Event::CData(e) => match stack.last_mut() {
                Some(frame) => frame.text.push_str(&String::from_utf8_lossy(&e.into_inner())),
                None => {
                    return Err(format!(
                        "CDATA outside the root element at position {}",
                        reader.buffer_position()
                    ))
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(format!(
            "Unclosed element <{}> at end of document (position {})",
            open.name,
            reader.buffer_position()
        ));
    }
    if document.fields.is_empty() {
        return Err("Document has no root element".to_string());
    }

    Ok(XmlValue::Element(document))
}
