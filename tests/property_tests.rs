//! Property-based tests for the attribute pipeline
//!
//! These tests use proptest to verify:
//! 1. Roundtrip: any fully valid sample survives write -> read unchanged
//! 2. Unset attributes never reach the output
//! 3. Malformed numbers always produce exactly one specific diagnostic

use proptest::prelude::*;
use sbase::attributes::{AttributeReadable, RawAttributeTable, ReadContext};
use sbase::model::core::ListOf;
use sbase::model::samples::{Interpolation, Sample};
use sbase::{Document, ErrorCode, ErrorLog, SBaseElement, SbmlNamespaces};

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn interpolation() -> impl Strategy<Value = Interpolation> {
    prop_oneof![
        Just(Interpolation::Linear),
        Just(Interpolation::NearestNeighbor),
        Just(Interpolation::Cubic),
    ]
}

prop_compose! {
    fn sample()(
        id in "[A-Za-z_][A-Za-z0-9_]{0,8}",
        points in proptest::option::of(prop::collection::vec(finite(), 0..6)),
        num in any::<u32>(),
        t in proptest::option::of(any::<bool>()),
        f in proptest::option::of(any::<bool>()),
        weight in proptest::option::of(finite()),
        offset in proptest::option::of(any::<i32>()),
        interp in proptest::option::of(interpolation()),
        doubles in proptest::option::of(prop::collection::vec(finite(), 0..6)),
        ints in proptest::option::of(prop::collection::vec(any::<i32>(), 0..6)),
    ) -> Sample {
        let mut s = Sample::new();
        s.set_id(&id).unwrap();
        match points {
            Some(points) => {
                s.set_num(points.len() as u32);
                s.set_sample_points(points);
            }
            None => s.set_num(num),
        }
        if let Some(v) = t { s.set_true(v); }
        if let Some(v) = f { s.set_false(v); }
        if let Some(v) = weight { s.set_weight(v); }
        if let Some(v) = offset { s.set_offset(v); }
        if let Some(v) = interp { s.set_interpolation(v); }
        if let Some(v) = doubles { s.set_vector_double(v); }
        if let Some(v) = ints { s.set_vector_int(v); }
        s
    }
}

fn document_with(sample: Sample) -> Document {
    let mut doc = Document::new(3, 2).unwrap();
    doc.enable_package("samples", true).unwrap();
    let root = doc.root().unwrap();
    let model = doc.append(root, sbase::model::Model::new()).unwrap();
    let list = doc.append(model, ListOf::samples()).unwrap();
    doc.append(list, sample).unwrap();
    doc
}

proptest! {
    #[test]
    fn roundtrip_sample(s in sample()) {
        let xml = document_with(s.clone()).write_to_string().unwrap();
        let doc = Document::read_from_str(&xml).unwrap();
        prop_assert!(doc.error_log().is_empty(), "{}\n{}", doc.error_log(), xml);

        let node = doc.element_by_sid(doc.root().unwrap(), s.id().unwrap()).unwrap();
        prop_assert_eq!(doc.downcast::<Sample>(node).unwrap(), &s);
    }

    #[test]
    fn unset_attributes_are_omitted(s in sample()) {
        let mut s = s;
        s.unset_weight();
        s.unset_offset();
        let xml = document_with(s).write_to_string().unwrap();
        prop_assert!(!xml.contains(" weight="));
        prop_assert!(!xml.contains(" offset="));
    }

    #[test]
    fn malformed_num_gets_one_specific_record(raw in "[a-z.+-]{1,8}") {
        let table: RawAttributeTable = [("id", "s"), ("num", raw.as_str())].into_iter().collect();
        let mut ns = SbmlNamespaces::new(3, 2).unwrap();
        ns.enable_package("samples", false).unwrap();
        let mut log = ErrorLog::new();
        let mut sample = Sample::new();
        sample.read_attributes(&table, &mut ReadContext::new(&mut log, &ns));

        if raw.parse::<u32>().is_err() {
            prop_assert_eq!(log.len(), 1);
            prop_assert_eq!(log.get(0).unwrap().code, ErrorCode::AttributeMustBeNonNegativeInteger);
            prop_assert!(!sample.is_set_num());
        } else {
            prop_assert!(log.is_empty());
        }
    }
}
