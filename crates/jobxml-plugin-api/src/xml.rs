//! In-memory XML element tree and its serializer
//!
//! Trees are assembled bottom-up: a child is fully built before it is handed
//! to its parent through [`XmlElement::with_child`] or
//! [`XmlElement::push_child`].

use std::io::Write;

use quick_xml::events::{
    BytesDecl,
    BytesEnd,
    BytesStart,
    BytesText,
    Event,
};
use quick_xml::Writer;

use crate::error::PluginResult;

/// Attribute pointing two levels up, the XStream convention for back-references
pub const PARENT_REFERENCE: &str = "../..";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Shorthand for an element carrying only a `class` attribute
    pub fn with_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(tag).with_attr("class", class)
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets an attribute, replacing the value when the name already exists
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Sets the text of the first child named `tag`, appending the child if absent
    pub fn set_child_text(&mut self, tag: &str, text: impl Into<String>) {
        match self.children.iter_mut().find(|c| c.tag == tag) {
            Some(child) => child.text = Some(text.into()),
            None => self.children.push(XmlElement::new(tag).with_text(text)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.tag == tag)
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Text of the first child named `tag`
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(|c| c.text.as_deref())
    }
}

/// Serialization settings for [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level; zero writes everything on one line
    pub indent: usize,
    pub xml_declaration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
        }
    }
}

impl RenderOptions {
    pub fn compact() -> Self {
        Self {
            indent: 0,
            xml_declaration: true,
        }
    }
}

/// Serializes a tree into a UTF-8 XML document
pub fn render(root: &XmlElement, options: RenderOptions) -> PluginResult<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = if options.indent > 0 {
            Writer::new_with_indent(&mut buffer, b' ', options.indent)
        } else {
            Writer::new(&mut buffer)
        };

        if options.xml_declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        write_element(&mut writer, root)?;
    }

    if options.indent > 0 {
        buffer.write_all(b"\n")?;
    }

    String::from_utf8(buffer).map_err(|e| crate::PluginError::Serialization(e.to_string()))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> PluginResult<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.as_deref().map_or(true, str::is_empty) {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text.as_deref() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;

    Ok(())
}
