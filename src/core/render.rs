//! Terminal rendering of element lists.

use crate::core::collection::{Element, LongFormatter};
use crate::core::query::pretty;
use crate::domain::error::{IntrospectError, IntrospectResult};
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::io::Write;
use sxd_document::dom::{self, ChildOfElement};
use sxd_xpath::nodeset::Node;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Output format of a rendered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One line per element
    #[default]
    Short,
    /// Detailed table
    Long,
    /// Raw XML of the elements
    Xml,
    /// JSON array of the elements
    Json,
}

/// Rows of a borderless table, filled by long formatters.
///
/// Rows may have different lengths; short rows are padded with empty cells.
#[derive(Debug, Default, Clone)]
pub struct DetailTable {
    rows: Vec<Vec<String>>,
}

impl DetailTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut builder = Builder::default();
        for row in &self.rows {
            let mut cells = row.clone();
            cells.resize(width, String::new());
            builder.push_record(cells);
        }

        let mut table = builder.build();
        table.with(Style::blank());
        table.to_string()
    }
}

/// Write `elements` to `out` in the given format
pub fn render<W: Write>(out: &mut W, elements: &[Element<'_>], format: Format) -> IntrospectResult<()> {
    match format {
        Format::Short => render_short(out, elements),
        Format::Long => render_long(out, elements),
        Format::Xml => render_xml(out, elements),
        Format::Json => render_json(out, elements),
    }
}

fn render_short<W: Write>(out: &mut W, elements: &[Element<'_>]) -> IntrospectResult<()> {
    for element in elements {
        writeln!(out, "{}", element.short()?)?;
    }
    Ok(())
}

fn render_long<W: Write>(out: &mut W, elements: &[Element<'_>]) -> IntrospectResult<()> {
    let Some(first) = elements.first() else {
        return Ok(());
    };

    let mut table = DetailTable::new();
    match &first.desc().long_detail {
        LongFormatter::Xpaths(fields) => {
            table.add_row(fields.iter().copied());
            for element in elements {
                let mut row = Vec::with_capacity(fields.len());
                for field in fields {
                    row.push(pretty(&element.strings(&format!("{}/text()", field))?));
                }
                table.add_row(row);
            }
        }
        LongFormatter::Fn(detail) => {
            for element in elements {
                detail(&mut table, element)?;
            }
        }
    }

    writeln!(out, "{}", table.render())?;
    Ok(())
}

fn render_xml<W: Write>(out: &mut W, elements: &[Element<'_>]) -> IntrospectResult<()> {
    for element in elements {
        writeln!(out, "{}", to_xml(element.node())?)?;
    }
    Ok(())
}

fn render_json<W: Write>(out: &mut W, elements: &[Element<'_>]) -> IntrospectResult<()> {
    let values: Vec<Value> = elements.iter().map(|e| to_json(e.node())).collect();
    serde_json::to_writer_pretty(&mut *out, &values)
        .map_err(|e| IntrospectError::Output(e.to_string()))?;
    writeln!(out)?;
    Ok(())
}

/// Serialize a node and its subtree as XML.
///
/// Namespace declarations in scope are repeated on the serialized element so
/// the output parses on its own.
pub fn to_xml(node: Node<'_>) -> IntrospectResult<String> {
    let mut writer = Writer::new(Vec::new());
    match node {
        Node::Element(element) => write_element(&mut writer, element, &Scope::default())?,
        other => emit(
            &mut writer,
            Event::Text(BytesText::from_escaped(escape_text(&other.string_value()))),
        )?,
    }
    String::from_utf8(writer.into_inner()).map_err(|e| IntrospectError::Output(e.to_string()))
}

/// Namespaces already declared by the enclosing serialized elements
#[derive(Debug, Default, Clone)]
struct Scope<'d> {
    prefixes: BTreeSet<(&'d str, &'d str)>,
    default: Option<&'d str>,
}

fn write_element<'d>(
    writer: &mut Writer<Vec<u8>>,
    element: dom::Element<'d>,
    outer: &Scope<'d>,
) -> IntrospectResult<()> {
    let name = qualified(element.preferred_prefix(), element.name().local_part());
    let mut start = BytesStart::new(name.clone());
    let mut scope = outer.clone();

    let default = element.recursive_default_namespace_uri();
    if default != scope.default {
        start.push_attribute(raw_attribute("xmlns", default.unwrap_or_default()));
        scope.default = default;
    }
    for namespace in element.namespaces_in_scope() {
        if namespace.prefix() == "xml" {
            continue;
        }
        if scope.prefixes.insert((namespace.prefix(), namespace.uri())) {
            let key = format!("xmlns:{}", namespace.prefix());
            start.push_attribute(raw_attribute(&key, namespace.uri()));
        }
    }
    for attribute in element.attributes() {
        let key = qualified(attribute.preferred_prefix(), attribute.name().local_part());
        start.push_attribute(raw_attribute(&key, attribute.value()));
    }

    let children = element.children();
    if children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in children {
        match child {
            ChildOfElement::Element(e) => write_element(writer, e, &scope)?,
            ChildOfElement::Text(t) => {
                emit(writer, Event::Text(BytesText::from_escaped(escape_text(t.text()))))?
            }
            ChildOfElement::Comment(c) => {
                emit(writer, Event::Comment(BytesText::from_escaped(c.text())))?
            }
            ChildOfElement::ProcessingInstruction(pi) => {
                let content = match pi.value() {
                    Some(value) => format!("{} {}", pi.target(), value),
                    None => pi.target().to_string(),
                };
                emit(writer, Event::PI(BytesPI::new(content)))?
            }
        }
    }
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> IntrospectResult<()> {
    writer
        .write_event(event)
        .map_err(|e| IntrospectError::Output(format!("Failed to write XML: {}", e)))
}

fn qualified(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, local),
        None => local.to_string(),
    }
}

/// Attribute with an already escaped value; whitespace other than spaces
/// is written as character references so parsers do not normalize it.
fn raw_attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    let value = escape(value)
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;");
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(value.into_bytes()),
    }
}

fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#13;")
}

/// Convert a node to JSON.
///
/// Leaf elements become strings, other elements objects keyed by child
/// name; repeated child names are collected into arrays.
pub fn to_json(node: Node<'_>) -> Value {
    match node {
        Node::Element(element) => element_to_json(element),
        other => Value::String(other.string_value().trim().to_string()),
    }
}

fn element_to_json(element: dom::Element<'_>) -> Value {
    let children: Vec<dom::Element<'_>> = element
        .children()
        .into_iter()
        .filter_map(|child| match child {
            ChildOfElement::Element(e) => Some(e),
            _ => None,
        })
        .collect();

    if children.is_empty() {
        return Value::String(Node::Element(element).string_value().trim().to_string());
    }

    let mut object = Map::new();
    for child in children {
        let name = child.name().local_part().to_string();
        let value = element_to_json(child);
        match object.get_mut(&name) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                object.insert(name, value);
            }
        }
    }
    Value::Object(object)
}
