//! Cross-record behaviour: dynamic equality, hashing in collections, and
//! serialization round trips through the codec collaborators.

use std::collections::HashSet;

use proptest::prelude::*;
use uuid::Uuid;

use valrec_codec::{Codec, CodecKind, JsonCodec, PostcardCodec, round_trip};
use valrec_core::record::equals;
use valrec_core::{DomainError, DynRecord, Fields, Record};
use valrec_records::{Customer, Person, Point2D, customer};

#[test]
fn records_of_different_types_never_compare_equal() {
    let person = Person::new("Dave", 42).unwrap();
    let point = Point2D::by(1, 2);

    assert!(!equals(&person, &point));
    assert!(equals(&person, &Person::new("Dave", 42).unwrap()));
}

#[test]
fn heterogeneous_records_render_in_declaration_order() {
    let id = Uuid::from_u64_pair(1, 1);
    let records: Vec<Box<dyn DynRecord>> = vec![
        Box::new(Person::new("Dave", 42).unwrap()),
        Box::new(Point2D::by(1.5, -2)),
        Box::new(customer::create_with_id("Lucy", id).unwrap()),
    ];

    let rendered: Vec<String> = records.iter().map(|r| r.dyn_display()).collect();
    assert_eq!(
        rendered,
        vec![
            "Person(name=Dave, age=42)".to_string(),
            "Point2D(x=1.5, y=-2.0)".to_string(),
            "Customer(id=00000000-0000-0001-0000-000000000001, name=Lucy, discount=0.0)"
                .to_string(),
        ]
    );
}

#[test]
fn equal_records_collapse_in_hash_sets() {
    let mut set = HashSet::new();
    set.insert(Person::new("Dave", 42).unwrap());
    set.insert(Person::new("Dave", 42).unwrap());
    set.insert(Person::new("Dave", 43).unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn missing_required_field_produces_no_instance() {
    let result = Person::construct(Fields::new().with("age", 42));
    assert_eq!(result, Err(DomainError::arity("Person", "name")));
}

#[test]
fn every_record_round_trips_through_both_codecs() {
    let person = Person::new("Al Lansley", 45).unwrap();
    let point = Point2D::by(0.1, 0.2);
    let customer = customer::create_with_discount("Chris", None, 12.5).unwrap();

    for kind in [CodecKind::Json, CodecKind::Postcard] {
        assert_eq!(round_trip(&kind, &person).unwrap().decoded, person);
        assert_eq!(round_trip(&kind, &point).unwrap().decoded, point);
        assert_eq!(round_trip(&kind, &customer).unwrap().decoded, customer);
    }
}

#[test]
fn json_shape_uses_field_names() {
    let bytes = JsonCodec.encode(&Person::new("Dave", 42).unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, serde_json::json!({ "name": "Dave", "age": 42 }));
}

#[test]
fn decoding_cannot_bypass_validation() {
    let err = Codec::<Person>::decode(&JsonCodec, br#"{"name":"Dave","age":-1}"#).unwrap_err();
    assert!(matches!(
        err,
        valrec_codec::CodecError::Domain(DomainError::Validation(_))
    ));
}

proptest! {
    #[test]
    fn customers_survive_binary_round_trip(
        name in "[A-Za-z]{1,12}",
        hi in any::<u64>(),
        lo in any::<u64>(),
        discount in 0.0f64..=100.0,
    ) {
        let original = Customer::new(Uuid::from_u64_pair(hi, lo), name, discount).unwrap();
        let outcome = round_trip(&PostcardCodec, &original).unwrap();
        prop_assert_eq!(&outcome.decoded, &original);
        prop_assert_eq!(outcome.decoded.structural_hash(), original.structural_hash());
    }
}

#[test]
fn non_finite_points_fail_json_encode_but_survive_postcard() {
    for point in [Point2D::by(f64::NAN, 1.0), Point2D::by(f64::INFINITY, 1.0)] {
        let err = round_trip(&CodecKind::Json, &point).unwrap_err();
        assert!(matches!(err, valrec_codec::CodecError::Encode(_)), "{err}");

        let outcome = round_trip(&CodecKind::Postcard, &point).unwrap();
        assert_eq!(outcome.decoded, point);
    }
}
