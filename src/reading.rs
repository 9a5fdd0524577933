//! Reading documents from XML
//!
//! The reader is a single pass over quick-xml events. Every start tag is
//! resolved against the namespace scopes, matched against the parent's
//! schema and read through the attribute pipeline. Problems with the
//! content are logged in the document's
//! [`ErrorLog`](crate::diagnostics::ErrorLog); only I/O failures and exceeded
//! [`Limits`] abort with an `Err`.

use crate::attributes::{AttributeReader, RawAttributeTable, ReadContext, VectorSpec};
use crate::attributes::values::parse_bool;
use crate::diagnostics::{ErrorCode, ErrorRecord};
use crate::documents::{Document, NodeId};
use crate::error::Result;
use crate::limits::Limits;
use crate::model::core::SbmlRoot;
use crate::model::schema::{qualify, ElementSchema};
use crate::namespaces::{
    level_version_of, package_by_uri, NamespaceContext, NamespaceKind, NamespaceStack, PackageInfo, QName,
    SbmlNamespaces,
};
use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

impl Document {
    /// Read a document from a string with default limits
    pub fn read_from_str(xml: &str) -> Result<Self> {
        Self::read_with_limits(xml, &Limits::default())
    }

    /// Read a document from a file with default limits
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::read_from_bytes(&bytes, &Limits::default())
    }

    /// Read a document from raw bytes, which must be UTF-8
    pub fn read_from_bytes(bytes: &[u8], limits: &Limits) -> Result<Self> {
        match std::str::from_utf8(bytes) {
            Ok(xml) => Self::read_with_limits(xml, limits),
            Err(err) => {
                let valid = &bytes[..err.valid_up_to()];
                let line = valid.iter().filter(|b| **b == b'\n').count() as u32 + 1;
                let mut doc = Document::with_namespaces(SbmlNamespaces::default());
                doc.error_log.add(
                    ErrorRecord::new(ErrorCode::NotUtf8)
                        .with_message(format!("Invalid UTF-8 at byte {}.", err.valid_up_to()))
                        .with_location(line, 0),
                );
                Ok(doc)
            }
        }
    }

    /// Read a document from a string
    pub fn read_with_limits(xml: &str, limits: &Limits) -> Result<Self> {
        limits.check_document_size(xml.len())?;
        DocumentReader::new(xml, limits).run()
    }
}

/// Byte offsets of line starts, for turning positions into line and column
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { starts }
    }

    fn locate(&self, offset: usize) -> (u32, u32) {
        let line = match self.starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        ((line + 1) as u32, (offset - self.starts[line] + 1) as u32)
    }
}

/// What an open tag turned into
enum Frame {
    Element { node: NodeId, line: u32, column: u32 },
    Vector { node: NodeId, spec: &'static VectorSpec, text: String },
    Skip,
}

struct DocumentReader<'x> {
    xml: &'x str,
    lines: LineIndex,
    limits: &'x Limits,
    doc: Document,
    frames: Vec<Frame>,
    scopes: NamespaceStack,
    seen_root: bool,
    stopped: bool,
}

impl<'x> DocumentReader<'x> {
    fn new(xml: &'x str, limits: &'x Limits) -> Self {
        Self {
            xml,
            lines: LineIndex::new(xml),
            limits,
            doc: Document::with_namespaces(SbmlNamespaces::default()),
            frames: Vec::new(),
            scopes: NamespaceStack::new(),
            seen_root: false,
            stopped: false,
        }
    }

    fn run(mut self) -> Result<Document> {
        let mut reader = Reader::from_str(self.xml);
        reader.trim_text(true);

        while !self.stopped {
            let before = reader.buffer_position();
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let offset = self.tag_offset(before);
                    self.start_element(&e, offset)?;
                }
                Ok(Event::Empty(e)) => {
                    let offset = self.tag_offset(before);
                    self.start_element(&e, offset)?;
                    if !self.stopped {
                        self.end_element()?;
                    }
                }
                Ok(Event::End(_)) => self.end_element()?,
                Ok(Event::Text(e)) => match e.unescape() {
                    Ok(text) => self.text(&text),
                    Err(err) => self.fatal(reader.buffer_position(), format!("Malformed text: {}.", err)),
                },
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    self.text(&text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => self.fatal(reader.buffer_position(), format!("{}.", err)),
            }
        }

        if !self.stopped {
            if let Some(open) = self.frames.len().checked_sub(1) {
                let message = format!("Document ends inside {} open element(s).", open + 1);
                self.fatal(self.xml.len(), message);
            } else if !self.seen_root {
                self.fatal(self.xml.len(), "Document has no <sbml> element.".to_string());
            } else {
                self.doc.check_identifiers();
            }
        }
        debug!(
            "read {} elements with {} diagnostics",
            self.doc.nodes.len(),
            self.doc.error_log.len()
        );
        Ok(self.doc)
    }

    /// Offset of the `<` of the tag read after `before`; trimmed
    /// whitespace may sit between the two
    fn tag_offset(&self, before: usize) -> usize {
        self.xml[before..].find('<').map_or(before, |i| before + i)
    }

    fn fatal(&mut self, offset: usize, message: String) {
        let (line, column) = self.lines.locate(offset.min(self.xml.len()));
        self.doc.error_log.add(
            ErrorRecord::new(ErrorCode::XmlParseError)
                .with_message(message)
                .with_location(line, column),
        );
        self.stopped = true;
    }

    fn report(&mut self, record: ErrorRecord, line: u32, column: u32) {
        self.doc.error_log.add(record.with_location(line, column));
    }

    fn start_element(&mut self, start: &BytesStart<'_>, offset: usize) -> Result<()> {
        self.limits.check_depth(self.frames.len() + 1)?;
        let (line, column) = self.lines.locate(offset);

        let raw_name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        trace!("<{}> at {}:{}", raw_name, line, column);

        // namespace declarations first, so the tag's own prefixes resolve
        let mut scope = NamespaceContext::new();
        let mut declared = Vec::new();
        let mut attributes = Vec::new();
        for attribute in start.attributes().with_checks(false) {
            let attribute = match attribute {
                Ok(a) => a,
                Err(err) => {
                    self.fatal(offset, format!("Malformed attribute on <{}>: {}.", raw_name, err));
                    return Ok(());
                }
            };
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = match attribute.unescape_value() {
                Ok(v) => v.into_owned(),
                Err(err) => {
                    self.fatal(offset, format!("Malformed value of '{}': {}.", key, err));
                    return Ok(());
                }
            };
            if key == "xmlns" {
                scope.set_default_namespace(value.as_str());
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                scope.add_prefix(prefix, value.as_str());
                declared.push(value);
            } else {
                attributes.push((key, value));
            }
        }
        self.scopes.push(scope);
        self.limits.check_attributes(attributes.len())?;

        let Some(qname) = self.scopes.resolve_element(&raw_name) else {
            self.fatal(offset, format!("Unbound namespace prefix on <{}>.", raw_name));
            return Ok(());
        };

        let mut table = RawAttributeTable::new();
        for (key, value) in attributes {
            let Some(name) = self.scopes.resolve_attribute(&key) else {
                self.fatal(offset, format!("Unbound namespace prefix on attribute '{}'.", key));
                return Ok(());
            };
            if !table.insert(name, value) {
                let record = ErrorRecord::new(ErrorCode::DuplicateAttribute)
                    .with_element(qname.local_name.clone())
                    .with_attribute(key.clone())
                    .with_message(format!(
                        "The attribute '{}' appears more than once on <{}>.",
                        key, raw_name
                    ));
                self.report(record, line, column);
            }
        }

        let frame = match self.frames.last() {
            None if !self.seen_root => {
                self.seen_root = true;
                self.start_root(&qname, &declared, table, line, column)?
            }
            None => Frame::Skip,
            Some(Frame::Skip) => Frame::Skip,
            Some(Frame::Vector { node, spec, .. }) => {
                let parent = self.doc.nodes[node.0].element.schema();
                let message = format!(
                    "<{}> is not permitted inside <{}> of <{}>.",
                    raw_name, spec.name, parent.name
                );
                self.unrecognized(&qname, message, line, column);
                Frame::Skip
            }
            Some(Frame::Element { node, .. }) => {
                let node = *node;
                self.start_child(node, &qname, &raw_name, table, line, column)
            }
        };
        self.frames.push(frame);
        Ok(())
    }

    fn start_root(
        &mut self,
        qname: &QName,
        declared: &[String],
        mut table: RawAttributeTable,
        line: u32,
        column: u32,
    ) -> Result<Frame> {
        let core = qname.namespace.as_deref().and_then(level_version_of);
        let (level, version) = match (qname.local_name.as_str(), core) {
            ("sbml", Some(lv)) => lv,
            ("sbml", None) => {
                let record = ErrorRecord::new(ErrorCode::InvalidNamespaceOnSbml)
                    .with_element("sbml")
                    .with_message(format!(
                        "The <sbml> element is in the namespace '{}', which is not an SBML core namespace.",
                        qname.namespace.as_deref().unwrap_or("")
                    ));
                self.report(record, line, column);
                return Ok(Frame::Skip);
            }
            _ => {
                let message = format!("The document root must be <sbml>, not <{}>.", qname.local_name);
                self.unrecognized(qname, message, line, column);
                return Ok(Frame::Skip);
            }
        };

        self.doc.namespaces = SbmlNamespaces::new(level, version)?;
        for uri in declared {
            let Some(package) = package_by_uri(uri) else {
                trace!("ignoring namespace {}", uri);
                continue;
            };
            let required = self.package_required(package, &mut table, line, column);
            self.doc.namespaces.enable_package(package.name, required)?;
            debug!("enabled package {} (required={})", package.name, required);
        }

        let root = self.doc.push_node(None, Box::new(SbmlRoot::new()));
        self.doc.root = Some(root);
        self.read_node(root, &table, line, column);

        let sbml = self.doc.downcast::<SbmlRoot>(root);
        let attributes = sbml.map(|s| (s.level(), s.version()));
        if let Some((Some(l), Some(v))) = attributes {
            if (l, v) != (level, version) {
                let record = ErrorRecord::new(ErrorCode::InvalidNamespaceOnSbml)
                    .with_element("sbml")
                    .with_message(format!(
                        "The level {} version {} attributes do not match the namespace of level {} version {}.",
                        l, v, level, version
                    ));
                self.report(record, line, column);
            }
        }
        Ok(Frame::Element { node: root, line, column })
    }

    /// Consume `pkg:required` from the root's attributes
    fn package_required(
        &mut self,
        package: &PackageInfo,
        table: &mut RawAttributeTable,
        line: u32,
        column: u32,
    ) -> bool {
        let Some(raw) = table.remove(&QName::namespaced(package.uri, "required")) else {
            return false;
        };
        match parse_bool(&raw) {
            Some(required) => required,
            None => {
                let record = ErrorRecord::new(ErrorCode::AttributeMustBeBoolean)
                    .with_element("sbml")
                    .with_attribute("required")
                    .with_package(package.name)
                    .with_message(format!(
                        "The attribute '{}:required' on the <sbml> element must be a boolean; found '{}'.",
                        package.name, raw
                    ));
                self.report(record, line, column);
                false
            }
        }
    }

    fn start_child(
        &mut self,
        parent: NodeId,
        qname: &QName,
        raw_name: &str,
        table: RawAttributeTable,
        line: u32,
        column: u32,
    ) -> Frame {
        let schema = self.doc.nodes[parent.0].element.schema();
        let package = match qname.namespace.as_deref().map(|uri| self.doc.namespaces.classify(uri)) {
            Some(NamespaceKind::Core) => None,
            Some(NamespaceKind::Package(p)) => Some(p),
            _ => {
                let message = format!(
                    "<{}> in namespace '{}' is not permitted inside <{}>.",
                    raw_name,
                    qname.namespace.as_deref().unwrap_or(""),
                    schema.qualified_name()
                );
                self.unrecognized(qname, message, line, column);
                return Frame::Skip;
            }
        };
        let name = qname.local_name.as_str();

        if same_package(package, schema) {
            if let Some(spec) = schema.vector(name) {
                return Frame::Vector {
                    node: parent,
                    spec,
                    text: String::new(),
                };
            }
            if package.is_none() && (name == "notes" || name == "annotation") {
                trace!("skipping <{}>", name);
                return Frame::Skip;
            }
        }

        let Some(spec) = schema.child(name, package) else {
            let message = format!(
                "<{}> is not permitted inside <{}>.",
                qualify(package, name),
                schema.qualified_name()
            );
            self.unrecognized(qname, message, line, column);
            return Frame::Skip;
        };

        if !spec.multiple && self.doc.child_named(parent, spec.name, package.map(|p| p.name)).is_some() {
            let record = ErrorRecord::new(ErrorCode::OnlyOneChildAllowed)
                .with_element(schema.name)
                .with_message(format!(
                    "The <{}> element may contain only one <{}> element.",
                    schema.qualified_name(),
                    qualify(package, name)
                ));
            self.report(record, line, column);
            return Frame::Skip;
        }

        let node = self.doc.push_node(Some(parent), (spec.create)());
        self.read_node(node, &table, line, column);
        Frame::Element { node, line, column }
    }

    fn read_node(&mut self, node: NodeId, table: &RawAttributeTable, line: u32, column: u32) {
        let Document {
            nodes,
            namespaces,
            error_log,
            ..
        } = &mut self.doc;
        let mut ctx = ReadContext::new(error_log, namespaces).at(line, column);
        nodes[node.0].element.read_attributes(table, &mut ctx);
    }

    fn unrecognized(&mut self, qname: &QName, message: String, line: u32, column: u32) {
        let record = ErrorRecord::new(ErrorCode::UnrecognizedElement)
            .with_element(qname.local_name.clone())
            .with_message(message);
        self.report(record, line, column);
    }

    fn text(&mut self, text: &str) {
        match self.frames.last_mut() {
            Some(Frame::Vector { text: buffer, .. }) => {
                buffer.push(' ');
                buffer.push_str(text);
            }
            Some(Frame::Element { .. }) if !text.trim().is_empty() => {
                trace!("ignoring text content '{}'", text.trim());
            }
            _ => {}
        }
    }

    fn end_element(&mut self) -> Result<()> {
        self.scopes.pop();
        let Some(frame) = self.frames.pop() else {
            return Ok(());
        };
        match frame {
            Frame::Skip => {}
            Frame::Vector { node, spec, text } => {
                let (line, column) = self.element_location(node);
                let Document {
                    nodes,
                    namespaces,
                    error_log,
                    ..
                } = &mut self.doc;
                let mut ctx = ReadContext::new(error_log, namespaces).at(line, column);
                AttributeReader::read_vector(nodes[node.0].element.as_mut(), spec, &text, self.limits, &mut ctx)?;
            }
            Frame::Element { node, line, column } => self.finish_element(node, line, column),
        }
        Ok(())
    }

    /// Location of the innermost open element frame for `node`
    fn element_location(&self, node: NodeId) -> (u32, u32) {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| match frame {
                Frame::Element { node: n, line, column } if *n == node => Some((*line, *column)),
                _ => None,
            })
            .unwrap_or((0, 0))
    }

    fn finish_element(&mut self, node: NodeId, line: u32, column: u32) {
        let schema = self.doc.nodes[node.0].element.schema();
        for spec in schema.children.iter().filter(|c| c.required) {
            if self
                .doc
                .child_named(node, spec.name, spec.package.map(|p| p.name))
                .is_none()
            {
                let record = ErrorRecord::new(ErrorCode::MissingRequiredElement)
                    .with_element(schema.name)
                    .with_message(format!(
                        "The <{}> element is missing the required <{}> element.",
                        schema.qualified_name(),
                        qualify(spec.package, spec.name)
                    ));
                self.report(record, line, column);
            }
        }

        let Document {
            nodes,
            namespaces,
            error_log,
            ..
        } = &mut self.doc;
        let mut ctx = ReadContext::new(error_log, namespaces).at(line, column);
        nodes[node.0].element.post_read(&mut ctx);
    }
}

/// Whether an element in `package` shares the namespace of `schema`
fn same_package(package: Option<&PackageInfo>, schema: &ElementSchema) -> bool {
    package.map(|p| p.name) == schema.package.map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::core::{Model, Parameter};
    use crate::model::samples::{Calibration, Sample};
    use crate::model::schema::TypeCode;

    const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

    fn document(body: &str) -> String {
        format!(
            r#"{}
<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" level="3" version="2"
      xmlns:samples="http://www.sbml.org/sbml/level3/version1/samples/version1" samples:required="true">
  <model id="m">
{}
  </model>
</sbml>"#,
            HEADER, body
        )
    }

    fn codes(doc: &Document) -> Vec<ErrorCode> {
        doc.error_log().iter().map(|r| r.code).collect()
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.locate(0), (1, 1));
        assert_eq!(index.locate(4), (2, 2));
        assert_eq!(index.locate(6), (3, 1));
        assert_eq!(index.locate(7), (4, 1));
    }

    #[test]
    fn test_read_valid_document() {
        let xml = document(
            r#"    <listOfParameters>
      <parameter id="k1" value="0.5" constant="true"/>
      <parameter id="k2" constant="false" units="second"/>
    </listOfParameters>
    <samples:listOfSamples>
      <samples:sample id="s1" num="2" true="true" interpolation="linear">
        <samples:vectorDouble> 1.5 -2 </samples:vectorDouble>
        <samples:samplePoints> 0 1 </samples:samplePoints>
      </samples:sample>
    </samples:listOfSamples>"#,
        );
        let doc = Document::read_from_str(&xml).unwrap();
        assert!(doc.error_log().is_empty(), "{}", doc.error_log());
        assert_eq!(doc.namespaces().is_required("samples"), Some(true));

        let root = doc.root().unwrap();
        let model = doc.model().unwrap();
        assert_eq!(doc.element(model).unwrap().id(), Some("m"));

        let k2 = doc.element_by_sid(root, "k2").unwrap();
        let parameter = doc.downcast::<Parameter>(k2).unwrap();
        assert_eq!(parameter.constant(), Some(false));
        assert_eq!(parameter.units(), Some("second"));

        let s1 = doc.element_by_sid(root, "s1").unwrap();
        let sample = doc.downcast::<Sample>(s1).unwrap();
        assert_eq!(sample.vector_double(), Some(&[1.5, -2.0][..]));
        assert_eq!(sample.sample_points(), Some(&[0.0, 1.0][..]));
        assert_eq!(sample.get_true(), Some(true));
        assert_eq!(doc.ancestor_of_type(s1, TypeCode::MODEL), Some(model));
        assert!(doc.downcast::<Model>(model).is_some());
    }

    #[test]
    fn test_attribute_diagnostics_carry_location() {
        let xml = document(
            r#"    <listOfParameters>
      <parameter id="" constant="maybe"/>
    </listOfParameters>"#,
        );
        let doc = Document::read_from_str(&xml).unwrap();
        assert_eq!(
            codes(&doc),
            vec![ErrorCode::EmptyStringAttribute, ErrorCode::AttributeMustBeBoolean]
        );
        let record = doc.error_log().get(0).unwrap();
        assert_eq!((record.line, record.column), (6, 7));
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let xml = document(
            r#"    <listOfWidgets><widget id="w"/></listOfWidgets>
    <listOfParameters/>
    <listOfParameters/>"#,
        );
        let doc = Document::read_from_str(&xml).unwrap();
        assert_eq!(
            codes(&doc),
            vec![ErrorCode::UnrecognizedElement, ErrorCode::OnlyOneChildAllowed]
        );
        assert!(doc.element_by_sid(doc.root().unwrap(), "w").is_none());
    }

    #[test]
    fn test_vector_problems() {
        let xml = document(
            r#"    <samples:listOfSamples>
      <samples:sample id="s1" num="3">
        <samples:vectorInt> 1 x 3 </samples:vectorInt>
        <samples:samplePoints> 0.5 </samples:samplePoints>
      </samples:sample>
    </samples:listOfSamples>"#,
        );
        let doc = Document::read_from_str(&xml).unwrap();
        assert_eq!(
            codes(&doc),
            vec![ErrorCode::VectorMustBeNumeric, ErrorCode::ArrayLengthMismatch]
        );
        let s1 = doc.element_by_sid(doc.root().unwrap(), "s1").unwrap();
        let sample = doc.downcast::<Sample>(s1).unwrap();
        assert!(!sample.is_set_vector_int());
        assert!(!sample.is_set_sample_points());
    }

    #[test]
    fn test_calibration_vector_diagnostics() {
        let xml = document(
            r#"    <samples:listOfSamples>
      <samples:sample id="s1" num="0">
        <samples:calibration>
          <samples:coefficients> 1 2 </samples:coefficients>
        </samples:calibration>
      </samples:sample>
      <samples:sample id="s2" num="0">
        <samples:calibration>
          <samples:reference> 0 1 </samples:reference>
          <samples:coefficients> 1 0.5 0.25 </samples:coefficients>
        </samples:calibration>
      </samples:sample>
    </samples:listOfSamples>"#,
        );
        let doc = Document::read_from_str(&xml).unwrap();
        assert_eq!(
            codes(&doc),
            vec![ErrorCode::MissingRequiredElement, ErrorCode::ArrayLengthMismatch]
        );
        assert!(doc.error_log().get(0).unwrap().concerns("calibration", "reference"));
        assert!(doc.error_log().get(1).unwrap().concerns("calibration", "coefficients"));

        let root = doc.root().unwrap();
        let first = doc.children(doc.element_by_sid(root, "s1").unwrap())[0];
        let calibration = doc.downcast::<Calibration>(first).unwrap();
        assert!(calibration.reference().is_none());
        assert!(calibration.coefficients().is_none());
        assert!(!doc.has_required_elements(first));

        let second = doc.children(doc.element_by_sid(root, "s2").unwrap())[0];
        let calibration = doc.downcast::<Calibration>(second).unwrap();
        assert_eq!(calibration.coefficients(), Some(&[1.0, 0.5, 0.25][..]));
        assert!(doc.has_required_elements(second));
    }

    #[test]
    fn test_missing_model() {
        let xml = r#"<sbml xmlns="http://www.sbml.org/sbml/level3/version1/core" level="3" version="1"/>"#;
        let doc = Document::read_from_str(xml).unwrap();
        assert_eq!(codes(&doc), vec![ErrorCode::MissingRequiredElement]);
        assert_eq!(doc.level(), 3);
        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_root_namespace_checks() {
        let xml = r#"<sbml xmlns="http://example.com/core" level="3" version="2"><model/></sbml>"#;
        let doc = Document::read_from_str(xml).unwrap();
        assert_eq!(codes(&doc), vec![ErrorCode::InvalidNamespaceOnSbml]);
        assert!(doc.root().is_none());

        let xml = r#"<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" level="3" version="1"><model/></sbml>"#;
        let doc = Document::read_from_str(xml).unwrap();
        assert_eq!(codes(&doc), vec![ErrorCode::InvalidNamespaceOnSbml]);
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        let xml = r#"<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" level="3" version="2"><model></sbml>"#;
        let doc = Document::read_from_str(xml).unwrap();
        assert!(doc.error_log().has_fatal());
        assert_eq!(doc.error_log().iter().last().unwrap().code, ErrorCode::XmlParseError);

        let doc = Document::read_from_str("<sbml").unwrap();
        assert!(doc.error_log().has_fatal());
    }

    #[test]
    fn test_invalid_utf8() {
        let doc = Document::read_from_bytes(b"<sbml>\xff</sbml>", &Limits::default()).unwrap();
        assert_eq!(codes(&doc), vec![ErrorCode::NotUtf8]);
    }

    #[test]
    fn test_limits_abort_reading() {
        let xml = document("");
        let limits = Limits::default().with_max_depth(1);
        assert!(Document::read_with_limits(&xml, &limits).is_err());
    }

    #[test]
    fn test_duplicate_ids_are_reported() {
        let xml = document(
            r#"    <listOfParameters>
      <parameter id="m" constant="true"/>
    </listOfParameters>"#,
        );
        let doc = Document::read_from_str(&xml).unwrap();
        assert_eq!(codes(&doc), vec![ErrorCode::DuplicateSId]);
    }
}
