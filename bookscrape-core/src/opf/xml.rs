//! OPF package XML rendering and reading
//!
//! Uses quick-xml to write the `<package>`/`<metadata>` tree in a fixed
//! element order, and to read the same shape back.

use super::{
    ContributorElement, IdentifierElement, MetaElement, PackageDocument, PackageMetadata,
    PackageVersion, TitleElement, NS_DC, NS_OPF,
};
use crate::error::OpfError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::io::Cursor;
use uuid::Uuid;

/// Render a package document to indented XML
pub(super) fn render_package(document: &PackageDocument) -> Result<String, OpfError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut package = BytesStart::new("package");
    package.push_attribute(("unique-identifier", document.unique_identifier_id.as_str()));
    package.push_attribute(("version", document.version.as_str()));
    package.push_attribute(("xmlns", NS_OPF));
    if !document.language.is_empty() {
        package.push_attribute(("xml:lang", document.language.as_str()));
    }
    if let Some(ref dir) = document.text_direction {
        package.push_attribute(("dir", dir.as_str()));
    }
    writer.write_event(Event::Start(package))?;

    write_metadata(&mut writer, &document.metadata)?;

    writer.write_event(Event::End(BytesEnd::new("package")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| OpfError::MalformedPackage(e.to_string()))
}

fn write_metadata<W: std::io::Write>(
    writer: &mut Writer<W>,
    metadata: &PackageMetadata,
) -> Result<(), OpfError> {
    let mut elem = BytesStart::new("metadata");
    elem.push_attribute(("xmlns:dc", NS_DC));
    writer.write_event(Event::Start(elem))?;

    for identifier in &metadata.identifiers {
        write_with_id(writer, "dc:identifier", &identifier.value, &identifier.id)?;
    }
    for title in &metadata.titles {
        write_with_id(writer, "dc:title", &title.value, &title.id)?;
    }
    write_text_element(writer, "dc:language", &metadata.language)?;
    for creator in &metadata.creators {
        write_with_id(writer, "dc:creator", &creator.value, &creator.id)?;
    }
    for contributor in &metadata.contributors {
        write_with_id(writer, "dc:contributor", &contributor.value, &contributor.id)?;
    }

    if let Some(ref date) = metadata.date {
        write_text_element(writer, "dc:date", date)?;
    }
    if let Some(ref description) = metadata.description {
        write_text_element(writer, "dc:description", description)?;
    }
    if let Some(ref publisher) = metadata.publisher {
        write_text_element(writer, "dc:publisher", publisher)?;
    }

    for meta in &metadata.metas {
        write_meta(writer, meta)?;
    }

    writer.write_event(Event::End(BytesEnd::new("metadata")))?;
    Ok(())
}

/// Write a simple text element
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
) -> Result<(), OpfError> {
    write_element(writer, BytesStart::new(name), content)
}

fn write_with_id<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: &str,
    id: &str,
) -> Result<(), OpfError> {
    let mut elem = BytesStart::new(name);
    elem.push_attribute(("id", id));
    write_element(writer, elem, content)
}

fn write_meta<W: std::io::Write>(
    writer: &mut Writer<W>,
    meta: &MetaElement,
) -> Result<(), OpfError> {
    let mut elem = BytesStart::new("meta");
    elem.push_attribute(("property", meta.property.as_str()));
    if let Some(ref refines) = meta.refines {
        elem.push_attribute(("refines", refines.as_str()));
    }
    if let Some(ref scheme) = meta.scheme {
        elem.push_attribute(("scheme", scheme.as_str()));
    }
    if let Some(ref lang) = meta.lang {
        elem.push_attribute(("xml:lang", lang.as_str()));
    }
    write_element(writer, elem, &meta.value)
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    content: &str,
) -> Result<(), OpfError> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// Element currently being read, with its attributes and text so far
struct OpenElement {
    name: String,
    attributes: HashMap<String, String>,
    text: String,
}

impl OpenElement {
    fn attr(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }
}

/// Parse OPF XML produced by [`PackageDocument::to_xml`] (or any document of
/// the same shape) back into a document.
///
/// The result has its own identity: contributor references from the
/// original document are not valid for it.
pub fn read_package(xml: &str) -> Result<PackageDocument, OpfError> {
    let mut reader = Reader::from_str(xml);

    let mut package: Option<HashMap<String, String>> = None;
    let mut metadata = PackageMetadata::default();
    let mut open: Option<OpenElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let element = open_element(&e)?;
                match element.name.as_str() {
                    "package" => package = Some(element.attributes),
                    "metadata" => {}
                    _ => open = Some(element),
                }
            }
            Event::Empty(e) => {
                let element = open_element(&e)?;
                if element.name == "package" {
                    package = Some(element.attributes);
                } else {
                    close_element(&mut metadata, element);
                }
            }
            Event::Text(e) => {
                if let Some(element) = open.as_mut() {
                    element.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(element) = open.as_mut() {
                    element.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if open.as_ref().is_some_and(|el| el.name == name) {
                    if let Some(element) = open.take() {
                        close_element(&mut metadata, element);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let package =
        package.ok_or_else(|| OpfError::MalformedPackage("missing <package>".to_string()))?;

    let version = package
        .get("version")
        .and_then(|v| PackageVersion::parse(v))
        .ok_or_else(|| OpfError::MalformedPackage("unsupported package version".to_string()))?;

    let unique_identifier_id = package.get("unique-identifier").cloned().ok_or_else(|| {
        OpfError::MalformedPackage("missing unique-identifier attribute".to_string())
    })?;

    if !metadata
        .identifiers
        .iter()
        .any(|i| i.id == unique_identifier_id)
    {
        return Err(OpfError::MalformedPackage(format!(
            "no dc:identifier with id {unique_identifier_id}"
        )));
    }

    let language = package
        .get("xml:lang")
        .cloned()
        .unwrap_or_else(|| metadata.language.clone());

    let document = PackageDocument {
        instance: Uuid::new_v4(),
        version,
        unique_identifier_id,
        language,
        text_direction: package.get("dir").cloned(),
        metadata,
    };
    document.check_references()?;

    Ok(document)
}

fn open_element(start: &BytesStart<'_>) -> Result<OpenElement, OpfError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = HashMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        attributes.insert(key, attr.unescape_value()?.into_owned());
    }

    Ok(OpenElement {
        name,
        attributes,
        text: String::new(),
    })
}

fn close_element(metadata: &mut PackageMetadata, element: OpenElement) {
    let id = element.attr("id").unwrap_or_default();

    match element.name.as_str() {
        "dc:identifier" => metadata.identifiers.push(IdentifierElement {
            value: element.text,
            id,
        }),
        "dc:title" => metadata.titles.push(TitleElement {
            value: element.text,
            id,
        }),
        "dc:creator" => metadata.creators.push(ContributorElement {
            value: element.text,
            id,
        }),
        "dc:contributor" => metadata.contributors.push(ContributorElement {
            value: element.text,
            id,
        }),
        "dc:language" => metadata.language = element.text,
        "dc:date" => metadata.date = Some(element.text),
        "dc:description" => metadata.description = Some(element.text),
        "dc:publisher" => metadata.publisher = Some(element.text),
        "meta" => metadata.metas.push(MetaElement {
            property: element.attr("property").unwrap_or_default(),
            refines: element.attr("refines"),
            scheme: element.attr("scheme"),
            lang: element.attr("xml:lang"),
            value: element.text,
        }),
        _ => {}
    }
}
