//! XML documents as [`Element`] trees.
//!
//! Text and tail content are kept verbatim (whitespace included) so masked
//! output keeps the input's layout. The XML declaration, comments, processing
//! instructions and doctype are dropped. CDATA sections come back as escaped
//! text.

use quick_xml::{
    events::{BytesEnd, BytesStart, BytesText, Event},
    Reader, Writer,
};

use crate::{
    element::Element,
    error::{Error, Result},
};

const FORMAT: &str = "xml";

/// Parses a document with exactly one root element.
pub fn decode(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(|err| Error::format(FORMAT, err))? {
            Event::Start(start) => open.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                close(element, &mut open, &mut root)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| Error::format(FORMAT, "unmatched end tag"))?;
                close(element, &mut open, &mut root)?;
            }
            Event::Text(content) => {
                let content = content
                    .unescape()
                    .map_err(|err| Error::format(FORMAT, err))?;
                append_text(&mut open, &content)?;
            }
            Event::CData(content) => {
                append_text(&mut open, &String::from_utf8_lossy(&content))?;
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::format(
            FORMAT,
            format!("unclosed element <{}>", unclosed.tag),
        ));
    }
    root.ok_or_else(|| Error::format(FORMAT, "document has no root element"))
}

/// Serialises `root` without an XML declaration.
pub fn encode(root: &Element) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, root)?;
    String::from_utf8(writer.into_inner()).map_err(|err| Error::format(FORMAT, err))
}

fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| Error::format(FORMAT, err))?;
        let value = attribute
            .unescape_value()
            .map_err(|err| Error::format(FORMAT, err))?;
        element.attributes.push((
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(element)
}

/// Attaches a finished element to its parent, or makes it the root.
fn close(element: Element, open: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(Error::format(FORMAT, "multiple root elements"));
    } else {
        *root = Some(element);
    }
    Ok(())
}

/// Text goes to the open element's text before its first child, otherwise to
/// the tail of its last child.
fn append_text(open: &mut [Element], content: &str) -> Result<()> {
    let Some(current) = open.last_mut() else {
        if content.trim().is_empty() {
            return Ok(());
        }
        return Err(Error::format(FORMAT, "text outside the root element"));
    };
    let slot = match current.children.last_mut() {
        Some(last) => &mut last.tail,
        None => &mut current.text,
    };
    slot.get_or_insert_with(String::new).push_str(content);
    Ok(())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    let text = element.text.as_deref().unwrap_or_default();
    if text.is_empty() && element.children.is_empty() {
        write(writer, Event::Empty(start))?;
    } else {
        write(writer, Event::Start(start))?;
        if !text.is_empty() {
            write(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &element.children {
            write_element(writer, child)?;
        }
        write(writer, Event::End(BytesEnd::new(element.tag.as_str())))?;
    }

    if let Some(tail) = element.tail.as_deref().filter(|tail| !tail.is_empty()) {
        write(writer, Event::Text(BytesText::new(tail)))?;
    }
    Ok(())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|err| Error::format(FORMAT, err))
}
