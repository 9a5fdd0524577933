//! Integration tests for the attribute pipeline
//!
//! These tests drive elements through the public reading API and check the
//! diagnostics that end up in the log.

use pretty_assertions::assert_eq;
use sbase::attributes::{
    AttributeAccess, AttributeReadable, ExpectedAttributeProvider, RawAttributeTable, ReadContext,
};
use sbase::model::core::{Parameter, PARAMETER_SCHEMA};
use sbase::model::samples::{Sample, SAMPLE_SCHEMA};
use sbase::namespaces::QName;
use sbase::{Document, ErrorCode, ErrorLog, SBaseElement, SbmlNamespaces};

const CORE: &str = "http://www.sbml.org/sbml/level3/version2/core";
const SAMPLES: &str = "http://www.sbml.org/sbml/level3/version1/samples/version1";

fn namespaces() -> SbmlNamespaces {
    let mut ns = SbmlNamespaces::new(3, 2).unwrap();
    ns.enable_package("samples", false).unwrap();
    ns
}

fn read_sample(table: &RawAttributeTable) -> (Sample, ErrorLog) {
    let ns = namespaces();
    let mut log = ErrorLog::new();
    let mut sample = Sample::new();
    sample.read_attributes(table, &mut ReadContext::new(&mut log, &ns));
    (sample, log)
}

fn codes(log: &ErrorLog) -> Vec<ErrorCode> {
    log.iter().map(|r| r.code).collect()
}

fn wrap_samples(sample: &str) -> String {
    format!(
        r#"<sbml xmlns="{}" xmlns:samples="{}" level="3" version="2" samples:required="false">
  <model>
    <samples:listOfSamples>
      {}
    </samples:listOfSamples>
  </model>
</sbml>"#,
        CORE, SAMPLES, sample
    )
}

#[test]
fn test_empty_table_reports_each_missing_attribute_once() {
    let (sample, log) = read_sample(&RawAttributeTable::new());

    assert_eq!(
        codes(&log),
        vec![ErrorCode::MissingRequiredAttribute, ErrorCode::MissingRequiredAttribute]
    );
    assert!(log.get(0).unwrap().concerns("sample", "id"));
    assert!(log.get(1).unwrap().concerns("sample", "num"));
    assert!(!sample.is_set_id());
    assert!(!sample.is_set_num());
}

#[test]
fn test_malformed_values_get_specific_codes() {
    let table: RawAttributeTable = [("id", ""), ("num", "abc")].into_iter().collect();
    let (sample, log) = read_sample(&table);

    assert_eq!(
        codes(&log),
        vec![ErrorCode::EmptyStringAttribute, ErrorCode::AttributeMustBeNonNegativeInteger]
    );
    assert!(log.get(1).unwrap().concerns("sample", "num"));
    assert!(!log.contains(ErrorCode::AttributeTypeMismatch));
    assert!(!sample.is_set_id());
    assert!(!sample.is_set_num());
}

#[test]
fn test_every_kind_has_its_own_code() {
    let cases = [
        ("id", "2fast", ErrorCode::InvalidIdSyntax),
        ("metaid", "a b", ErrorCode::InvalidMetaIdSyntax),
        ("sboTerm", "SBO:12", ErrorCode::InvalidSboTermSyntax),
        ("offset", "1.5", ErrorCode::AttributeMustBeInteger),
        ("num", "-1", ErrorCode::AttributeMustBeNonNegativeInteger),
        ("weight", "heavy", ErrorCode::AttributeMustBeDouble),
        ("true", "yes", ErrorCode::AttributeMustBeBoolean),
        ("interpolation", "spline", ErrorCode::AttributeMustBeEnum),
    ];
    for (attribute, value, code) in cases {
        let mut table: RawAttributeTable = [("id", "s"), ("num", "1")].into_iter().collect();
        table.remove(&QName::local(attribute));
        table.insert(QName::local(attribute), value);

        let (sample, log) = read_sample(&table);
        assert_eq!(codes(&log), vec![code], "{}={}", attribute, value);
        assert!(log.get(0).unwrap().concerns("sample", attribute));
        assert!(sample.attribute(attribute).is_none());
    }
}

#[test]
fn test_parameter_inherits_and_overrides() {
    let expected = PARAMETER_SCHEMA.expected_attributes();
    let names: Vec<_> = expected.names().collect();
    let mut unique = names.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), names.len());
    assert!(expected.get("id").unwrap().required);

    let table: RawAttributeTable = [("constant", "true")].into_iter().collect();
    let ns = namespaces();
    let mut log = ErrorLog::new();
    let mut parameter = Parameter::new();
    parameter.read_attributes(&table, &mut ReadContext::new(&mut log, &ns));
    assert_eq!(codes(&log), vec![ErrorCode::MissingRequiredAttribute]);
    assert!(log.get(0).unwrap().concerns("parameter", "id"));
}

#[test]
fn test_unknown_attributes_in_document() {
    let xml = wrap_samples(&format!(
        r#"<samples:sample id="s" num="0" colour="red" xmlns:core="{}" core:units="mole" samples:shade="dark" xmlns:x="http://example.com/x" x:note="n"/>"#,
        CORE
    ));
    let doc = Document::read_from_str(&xml).unwrap();
    assert_eq!(
        codes(doc.error_log()),
        vec![
            ErrorCode::PackageAllowedAttributes,
            ErrorCode::PackageAllowedCoreAttributes,
            ErrorCode::PackageAllowedAttributes,
        ]
    );
    assert!(doc
        .error_log()
        .iter()
        .all(|r| r.package.as_deref() == Some("samples")));
}

#[test]
fn test_unknown_attributes_on_core_element() {
    let xml = format!(
        r#"<sbml xmlns="{}" xmlns:samples="{}" level="3" version="2">
  <model samples:num="1" colour="red"/>
</sbml>"#,
        CORE, SAMPLES
    );
    let doc = Document::read_from_str(&xml).unwrap();
    assert_eq!(
        codes(doc.error_log()),
        vec![ErrorCode::UnknownPackageAttribute, ErrorCode::UnknownCoreAttribute]
    );
}

#[test]
fn test_duplicate_attribute() {
    let xml = wrap_samples(r#"<samples:sample id="s" num="0" num="1"/>"#);
    let doc = Document::read_from_str(&xml).unwrap();
    assert_eq!(codes(doc.error_log()), vec![ErrorCode::DuplicateAttribute]);

    let s = doc.element_by_sid(doc.root().unwrap(), "s").unwrap();
    assert_eq!(doc.downcast::<Sample>(s).unwrap().num(), Some(0));
}

#[test]
fn test_sample_schema_is_package_scoped() {
    assert_eq!(SAMPLE_SCHEMA.package.map(|p| p.uri), Some(SAMPLES));
    assert_eq!(Sample::new().element_name(), "sample");
    assert_eq!(Sample::new().schema().qualified_name(), "samples:sample");
}

#[test]
fn test_log_renders_as_json() {
    let (_, log) = read_sample(&RawAttributeTable::new());
    let json: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["attribute"], "num");
    assert_eq!(json[1]["package"], "samples");
}
