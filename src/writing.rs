//! Writing documents as XML
//!
//! Core elements are written unprefixed and package elements with their
//! package prefix. The root declares the core namespace, every enabled
//! package namespace, and each package's `required` flag.

use crate::attributes::AttributeWriter;
use crate::documents::{Document, NodeId};
use crate::error::{Error, Result};
use crate::model::schema::qualify;
use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::Path;

/// Output formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Spaces per nesting level, 0 for no line breaks
    pub indent: usize,
    /// Whether to start with `<?xml ...?>`
    pub write_declaration: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            write_declaration: true,
        }
    }
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_declaration(mut self, write_declaration: bool) -> Self {
        self.write_declaration = write_declaration;
        self
    }
}

impl Document {
    /// Serialize with the default configuration
    pub fn write_to_string(&self) -> Result<String> {
        self.write_to_string_with(&WriterConfig::default())
    }

    pub fn write_to_string_with(&self, config: &WriterConfig) -> Result<String> {
        let bytes = self.write_to(Vec::new(), config)?;
        String::from_utf8(bytes).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Serialize to a file with the default configuration
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut out = self.write_to(std::io::BufWriter::new(file), &WriterConfig::default())?;
        out.flush()?;
        Ok(())
    }

    /// Serialize into `sink`, returning it
    pub fn write_to<W: Write>(&self, sink: W, config: &WriterConfig) -> Result<W> {
        let root = self
            .root
            .ok_or_else(|| Error::InvalidObject("document has no root element".to_string()))?;
        let mut writer = if config.indent > 0 {
            Writer::new_with_indent(sink, b' ', config.indent)
        } else {
            Writer::new(sink)
        };
        if config.write_declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        self.write_node(&mut writer, root)?;
        debug!("wrote document with {} elements", self.descendants(root).len() + 1);
        Ok(writer.into_inner())
    }

    fn write_node<W: Write>(&self, writer: &mut Writer<W>, node: NodeId) -> Result<()> {
        let element = self
            .element(node)
            .ok_or_else(|| Error::InvalidObject(format!("no element with handle {}", node.0)))?;
        let schema = element.schema();
        let tag = schema.qualified_name();
        let is_root = Some(node) == self.root;

        let mut start = BytesStart::new(tag.as_str());
        if is_root {
            start.push_attribute(("xmlns", self.namespaces.core_uri()));
            for (package, _) in self.namespaces.packages() {
                let key = format!("xmlns:{}", package.name);
                start.push_attribute((key.as_str(), package.uri));
            }
        }
        element.write_attributes(&mut start);
        if is_root {
            for (package, required) in self.namespaces.packages() {
                let key = format!("{}:required", package.name);
                start.push_attribute((key.as_str(), if required { "true" } else { "false" }));
            }
        }

        let vectors = element.vectors_to_write();
        let children = self.children(node);
        if vectors.is_empty() && children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for (name, vector) in &vectors {
            AttributeWriter::write_vector(writer, &qualify(schema.package, name), vector)?;
        }
        for child in children {
            self.write_node(writer, *child)?;
        }
        writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::core::{ListOf, Model, Parameter};
    use crate::model::samples::Sample;
    use crate::model::sbase::SBaseElement;
    use pretty_assertions::assert_eq;

    fn sample_document() -> Document {
        let mut doc = Document::new(3, 2).unwrap();
        doc.enable_package("samples", true).unwrap();
        let root = doc.root().unwrap();
        let model = doc.append(root, Model::new()).unwrap();

        let params = doc.append(model, ListOf::parameters()).unwrap();
        let mut k = Parameter::new();
        k.set_id("k").unwrap();
        k.set_value(1e-7);
        k.set_constant(true);
        doc.append(params, k).unwrap();

        let samples = doc.append(model, ListOf::samples()).unwrap();
        let mut s = Sample::new();
        s.set_id("s").unwrap();
        s.set_num(1);
        s.set_false(true);
        s.set_vector_double(vec![1.5]);
        s.set_sample_points(vec![f64::INFINITY]);
        doc.append(samples, s).unwrap();
        doc
    }

    #[test]
    fn test_write_canonical_form() {
        let xml = sample_document().write_to_string().unwrap();
        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<sbml xmlns="http://www.sbml.org/sbml/level3/version2/core" xmlns:samples="http://www.sbml.org/sbml/level3/version1/samples/version1" level="3" version="2" samples:required="true">
  <model>
    <listOfParameters>
      <parameter id="k" value="1e-7" constant="true"/>
    </listOfParameters>
    <samples:listOfSamples>
      <samples:sample id="s" num="1" false="true">
        <samples:vectorDouble> 1.5 </samples:vectorDouble>
        <samples:samplePoints> INF </samples:samplePoints>
      </samples:sample>
    </samples:listOfSamples>
  </model>
</sbml>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_write_without_indent_or_declaration() {
        let doc = Document::new(3, 1).unwrap();
        let config = WriterConfig::new().with_indent(0).with_declaration(false);
        let xml = doc.write_to_string_with(&config).unwrap();
        assert_eq!(
            xml,
            r#"<sbml xmlns="http://www.sbml.org/sbml/level3/version1/core" level="3" version="1"/>"#
        );
    }

    #[test]
    fn test_round_trip() {
        let doc = sample_document();
        let xml = doc.write_to_string().unwrap();
        let read = Document::read_from_str(&xml).unwrap();
        assert!(read.error_log().is_empty(), "{}", read.error_log());
        assert_eq!(read.write_to_string().unwrap(), xml);

        let s = read.element_by_sid(read.root().unwrap(), "s").unwrap();
        let sample = read.downcast::<Sample>(s).unwrap();
        assert_eq!(sample.get_false(), Some(true));
        assert_eq!(sample.get_true(), None);
        assert_eq!(sample.sample_points(), Some(&[f64::INFINITY][..]));
        assert_eq!(read.element(s).unwrap().element_name(), "sample");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.xml");
        let doc = sample_document();
        doc.write_to_file(&path).unwrap();

        let read = Document::read_from_file(&path).unwrap();
        assert!(read.error_log().is_empty());
        assert!(read.namespaces().is_enabled("samples"));
    }

    #[test]
    fn test_document_without_root() {
        let doc = Document::read_from_str("<notsbml/>").unwrap();
        assert!(doc.root().is_none());
        assert!(matches!(doc.write_to_string(), Err(Error::InvalidObject(_))));
    }
}
